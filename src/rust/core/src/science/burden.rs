// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::formulas::{self, RangePosition, ADHIKARI_BURDEN_RANGE, DICK_BURDEN_RANGE};
use serde::{Deserialize, Serialize};

/// Burden rule. `Fallback` is never offered to the user; it is what an
/// unrecognised selector resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BurdenFormula {
    #[serde(rename = "Hoek and Bray")]
    HoekBray,
    #[serde(rename = "Atlas Copco")]
    AtlasCopco,
    #[serde(rename = "Dick et al")]
    DickEtAl,
    #[serde(rename = "Adhikari")]
    Adhikari,
    #[serde(rename = "Default (25 x D)")]
    Fallback,
}

impl BurdenFormula {
    pub const LISTED: [BurdenFormula; 4] = [
        BurdenFormula::HoekBray,
        BurdenFormula::AtlasCopco,
        BurdenFormula::DickEtAl,
        BurdenFormula::Adhikari,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match super::normalize_label(label).as_str() {
            "hoekandbray" | "hoekbray" => Some(BurdenFormula::HoekBray),
            "atlascopco" => Some(BurdenFormula::AtlasCopco),
            "dicketal" | "dick" => Some(BurdenFormula::DickEtAl),
            "adhikari" => Some(BurdenFormula::Adhikari),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BurdenFormula::HoekBray => "Hoek and Bray",
            BurdenFormula::AtlasCopco => "Atlas Copco",
            BurdenFormula::DickEtAl => "Dick et al",
            BurdenFormula::Adhikari => "Adhikari",
            BurdenFormula::Fallback => "Default (25 x D)",
        }
    }

    /// Burden in metres.
    pub fn compute(&self, diameter_m: f64, bench_height_m: f64, position: RangePosition) -> f64 {
        match self {
            BurdenFormula::HoekBray => formulas::burden_hoek_bray(diameter_m),
            BurdenFormula::AtlasCopco => formulas::burden_atlas_copco(diameter_m),
            BurdenFormula::DickEtAl => {
                formulas::burden_dick(diameter_m, DICK_BURDEN_RANGE.at(position))
            }
            BurdenFormula::Adhikari => {
                formulas::burden_adhikari(bench_height_m, ADHIKARI_BURDEN_RANGE.at(position))
            }
            BurdenFormula::Fallback => formulas::burden_fallback(diameter_m),
        }
    }
}
