// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod burden;
pub mod charge;
pub mod powder_factor;
pub mod spacing;
pub mod stemming;
pub mod sub_drill;

pub use burden::BurdenFormula;
pub use charge::{ChargeEngine, ChargeResult};
pub use powder_factor::{
    PowderFactorAdvisory, PowderFactorEngine, PowderFactorRange, PowderFactorStatus,
    PowderFactorTable,
};
pub use spacing::SpacingPattern;
pub use stemming::StemmingFormula;
pub use sub_drill::SubDrillFormula;

/// Folds a UI label to a comparison key: lowercase ASCII alphanumerics only,
/// with `&` read as "and" so "Hoek & Bray" and "Hoek and Bray" meet.
pub(crate) fn normalize_label(label: &str) -> String {
    label
        .replace('&', "and")
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
