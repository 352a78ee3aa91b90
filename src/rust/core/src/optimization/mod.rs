// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod range_sweep;

pub use range_sweep::{DesignEnvelope, RangeSweep, SweepPoint};
