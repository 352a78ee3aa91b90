// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::formulas::{RangePosition, COMMON_SPACING_RANGE, STAGGERED_SPACING_FACTOR};
use serde::{Deserialize, Serialize};

/// Spacing rule. Doubles as the pattern type of the drill layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacingPattern {
    Square,
    Staggered,
    Common,
}

impl SpacingPattern {
    pub const ALL: [SpacingPattern; 3] = [
        SpacingPattern::Square,
        SpacingPattern::Staggered,
        SpacingPattern::Common,
    ];

    /// Resolved when the spacing selector is not recognised.
    pub const FALLBACK: SpacingPattern = SpacingPattern::Common;

    pub fn from_label(label: &str) -> Option<Self> {
        match super::normalize_label(label).as_str() {
            "square" => Some(SpacingPattern::Square),
            "staggered" => Some(SpacingPattern::Staggered),
            "common" => Some(SpacingPattern::Common),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpacingPattern::Square => "Square",
            SpacingPattern::Staggered => "Staggered",
            SpacingPattern::Common => "Common",
        }
    }

    pub fn compute(&self, burden: f64, position: RangePosition) -> f64 {
        match self {
            SpacingPattern::Square => burden,
            SpacingPattern::Staggered => STAGGERED_SPACING_FACTOR * burden,
            SpacingPattern::Common => COMMON_SPACING_RANGE.at(position) * burden,
        }
    }

    /// Only staggered layouts offset alternate rows.
    pub fn is_staggered(&self) -> bool {
        matches!(self, SpacingPattern::Staggered)
    }
}
