// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Blast Core — Surface Mine Blast-Hole Design
// Burden, spacing, charging and layout for open cast benches
//

pub mod blast_kernel;
pub mod design_engine;
pub mod error;
pub mod formulas;
pub mod inputs;
pub mod layout;
pub mod optimization;
pub mod science;
#[cfg(test)]
pub mod tests_design;

// Re-export core types
pub use blast_kernel::{BlastConfig, BlastDesign, BlastKernel, Severity, ValidationEvent};
pub use design_engine::{DesignEngine, DesignResult};
pub use error::{BlastError, Result};
pub use formulas::RangePosition;
pub use inputs::{DesignInputs, FormulaSelection, HoleCondition, RawDesignInputs, RockClass};
pub use layout::{pattern, profile, HoleProfile, PatternLayout};
pub use science::{PowderFactorRange, PowderFactorTable};
