// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::formulas::{
    RangePosition, ATLAS_SUB_DRILL_RANGE, HOEK_BRAY_SUB_DRILL_RANGE, KONYA_SUB_DRILL_FACTOR,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubDrillFormula {
    Atlas,
    Konya,
    #[serde(rename = "Hoek & Bray")]
    HoekBray,
}

impl SubDrillFormula {
    pub const ALL: [SubDrillFormula; 3] = [
        SubDrillFormula::Atlas,
        SubDrillFormula::Konya,
        SubDrillFormula::HoekBray,
    ];

    pub const FALLBACK: SubDrillFormula = SubDrillFormula::HoekBray;

    pub fn from_label(label: &str) -> Option<Self> {
        match super::normalize_label(label).as_str() {
            "atlas" | "atlascopco" => Some(SubDrillFormula::Atlas),
            "konya" => Some(SubDrillFormula::Konya),
            "hoekandbray" | "hoekbray" => Some(SubDrillFormula::HoekBray),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubDrillFormula::Atlas => "Atlas",
            SubDrillFormula::Konya => "Konya",
            SubDrillFormula::HoekBray => "Hoek & Bray",
        }
    }

    /// Sub-drill J in metres, always a fraction of burden.
    pub fn compute(&self, burden: f64, position: RangePosition) -> f64 {
        let factor = match self {
            SubDrillFormula::Atlas => ATLAS_SUB_DRILL_RANGE.at(position),
            SubDrillFormula::Konya => KONYA_SUB_DRILL_FACTOR,
            SubDrillFormula::HoekBray => HOEK_BRAY_SUB_DRILL_RANGE.at(position),
        };
        factor * burden
    }
}
