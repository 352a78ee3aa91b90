// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::formulas::{RangePosition, ATLAS_STEMMING_RANGE, COMMON_STEMMING_RANGE};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StemmingFormula {
    /// S.L. = (0.7 → 1.3) × B
    Atlas,
    /// S.L. = (15 → 25) × D
    Common,
}

impl StemmingFormula {
    pub const ALL: [StemmingFormula; 2] = [StemmingFormula::Atlas, StemmingFormula::Common];

    pub const FALLBACK: StemmingFormula = StemmingFormula::Common;

    pub fn from_label(label: &str) -> Option<Self> {
        match super::normalize_label(label).as_str() {
            "atlas" | "atlascopco" => Some(StemmingFormula::Atlas),
            "common" => Some(StemmingFormula::Common),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StemmingFormula::Atlas => "Atlas",
            StemmingFormula::Common => "Common",
        }
    }

    pub fn compute(&self, burden: f64, diameter_m: f64, position: RangePosition) -> f64 {
        match self {
            StemmingFormula::Atlas => ATLAS_STEMMING_RANGE.at(position) * burden,
            StemmingFormula::Common => COMMON_STEMMING_RANGE.at(position) * diameter_m,
        }
    }
}
