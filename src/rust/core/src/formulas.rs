// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Empirical Formulas for Surface Blast Design
//!
//! These are pure mathematical functions operating on scalar values.
//! Diameters and heights are in metres unless a name says otherwise.
//!
//! References:
//! - Hoek & Bray (1981): Burden and sub-drill rules of thumb
//! - Atlas Copco (Langefors-derived): Burden, stemming and sub-drill
//! - Dick, Fletcher & D'Andrea (1983): Burden range
//! - Konya & Walter (1990): Sub-drill
//! - Adhikari (1999): Burden from bench height

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Where inside a documented empirical range a coefficient is taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePosition {
    Low,
    #[default]
    Midpoint,
    High,
}

impl RangePosition {
    pub const ALL: [RangePosition; 3] = [
        RangePosition::Low,
        RangePosition::Midpoint,
        RangePosition::High,
    ];
}

/// A coefficient published as a range, with the value used when no bias is requested.
///
/// The midpoint is stored, not computed, so the default design reproduces the
/// published midpoints bit-for-bit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalRange {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl EmpiricalRange {
    pub const fn new(low: f64, mid: f64, high: f64) -> Self {
        Self { low, mid, high }
    }

    pub fn at(&self, position: RangePosition) -> f64 {
        match position {
            RangePosition::Low => self.low,
            RangePosition::Midpoint => self.mid,
            RangePosition::High => self.high,
        }
    }
}

// ============================================================================
// PUBLISHED COEFFICIENTS
// ============================================================================

pub const HOEK_BRAY_BURDEN_FACTOR: f64 = 45.0;
pub const ATLAS_COPCO_BURDEN_FACTOR: f64 = 19.7;
pub const ATLAS_COPCO_BURDEN_EXPONENT: f64 = 0.99;
/// Burden factor applied when the burden selector is not recognised.
pub const FALLBACK_BURDEN_FACTOR: f64 = 25.0;
pub const STAGGERED_SPACING_FACTOR: f64 = 1.15;
pub const KONYA_SUB_DRILL_FACTOR: f64 = 0.30;

/// B = (20 → 40) × D
pub const DICK_BURDEN_RANGE: EmpiricalRange = EmpiricalRange::new(20.0, 30.0, 40.0);
/// B = (0.25 → 0.5) × H
pub const ADHIKARI_BURDEN_RANGE: EmpiricalRange = EmpiricalRange::new(0.25, 0.375, 0.5);
/// S = (1 → 2) × B
pub const COMMON_SPACING_RANGE: EmpiricalRange = EmpiricalRange::new(1.0, 1.5, 2.0);
/// S.L. = (0.7 → 1.3) × B
pub const ATLAS_STEMMING_RANGE: EmpiricalRange = EmpiricalRange::new(0.7, 1.0, 1.3);
/// S.L. = (15 → 25) × D
pub const COMMON_STEMMING_RANGE: EmpiricalRange = EmpiricalRange::new(15.0, 20.0, 25.0);
/// J = (0.2 → 0.5) × B
pub const ATLAS_SUB_DRILL_RANGE: EmpiricalRange = EmpiricalRange::new(0.2, 0.35, 0.5);
/// J = (0.2 → 0.3) × B
pub const HOEK_BRAY_SUB_DRILL_RANGE: EmpiricalRange = EmpiricalRange::new(0.2, 0.25, 0.3);
/// E_b = [(0.3 → 0.5) × B] + J
pub const BASE_CHARGE_RANGE: EmpiricalRange = EmpiricalRange::new(0.3, 0.4, 0.5);

/// Deck stemming T_d = 0.5 × D in dry holes.
pub const DRY_DECK_STEMMING_FACTOR: f64 = 0.5;
/// Deck stemming T_d = 1.0 × D in wet holes.
pub const WET_DECK_STEMMING_FACTOR: f64 = 1.0;

// ============================================================================
// UNIT CONVERSIONS
// ============================================================================

/// Millimetres to metres.
#[wasm_bindgen]
pub fn mm_to_m(mm: f64) -> f64 {
    mm / 1000.0
}

/// g/cm³ to kg/m³.
#[wasm_bindgen]
pub fn g_cm3_to_kg_m3(density: f64) -> f64 {
    density * 1000.0
}

// ============================================================================
// BURDEN MODELS
// ============================================================================

/// Hoek and Bray: B = 45 × D
#[wasm_bindgen]
pub fn burden_hoek_bray(diameter_m: f64) -> f64 {
    HOEK_BRAY_BURDEN_FACTOR * diameter_m
}

/// Atlas Copco: B = 19.7 × D^0.99
#[wasm_bindgen]
pub fn burden_atlas_copco(diameter_m: f64) -> f64 {
    if diameter_m <= 0.0 {
        return 0.0;
    }
    ATLAS_COPCO_BURDEN_FACTOR * diameter_m.powf(ATLAS_COPCO_BURDEN_EXPONENT)
}

/// Dick et al: B = k × D, k in 20-40
#[wasm_bindgen]
pub fn burden_dick(diameter_m: f64, k: f64) -> f64 {
    k * diameter_m
}

/// Adhikari: B = k × H, k in 0.25-0.5
#[wasm_bindgen]
pub fn burden_adhikari(bench_height_m: f64, k: f64) -> f64 {
    k * bench_height_m
}

/// Unlisted rule used for unrecognised burden selectors: B = 25 × D
#[wasm_bindgen]
pub fn burden_fallback(diameter_m: f64) -> f64 {
    FALLBACK_BURDEN_FACTOR * diameter_m
}

// ============================================================================
// CHARGE GEOMETRY
// ============================================================================

/// Base charge E_b = k × B + J, k in 0.3-0.5
#[wasm_bindgen]
pub fn base_charge_length(burden: f64, sub_drill: f64, k: f64) -> f64 {
    k * burden + sub_drill
}

/// Hole cross-section π (D/2)² in m²
#[wasm_bindgen]
pub fn hole_cross_section(diameter_m: f64) -> f64 {
    std::f64::consts::PI * (diameter_m / 2.0).powi(2)
}

/// Linear charge concentration (kg/m) for a fully coupled column.
#[wasm_bindgen]
pub fn linear_charge_density(diameter_m: f64, explosive_density_g_cm3: f64) -> f64 {
    hole_cross_section(diameter_m) * g_cm3_to_kg_m3(explosive_density_g_cm3)
}

/// Deck stemming T_d = (0.5 dry | 1.0 wet) × D
#[wasm_bindgen]
pub fn deck_stemming(diameter_m: f64, wet: bool) -> f64 {
    let factor = if wet {
        WET_DECK_STEMMING_FACTOR
    } else {
        DRY_DECK_STEMMING_FACTOR
    };
    factor * diameter_m
}
