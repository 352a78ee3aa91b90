// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::formulas::{self, RangePosition, BASE_CHARGE_RANGE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Charge column of a single hole.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChargeResult {
    pub total_hole_depth: f64,     // m
    pub stemming: f64,             // m, equal to the input unless the hole is fully stemmed
    pub base_charge_length: f64,   // m
    pub column_charge_length: f64, // m
    pub base_charge_mass: f64,     // kg
    pub column_charge_mass: f64,   // kg
    pub total_charge_mass: f64,    // kg
    /// Base + column + stemming overran the hole and the column was dropped.
    pub clamp_applied: bool,
    /// Stemming alone fills the hole; nothing is charged.
    pub fully_stemmed: bool,
}

pub struct ChargeEngine;

impl ChargeEngine {
    /// Splits the hole into stemming, column and base charge and weighs the explosive.
    ///
    /// # Arguments
    /// * `burden`, `sub_drill`, `stemming`, `bench_height` - metres
    /// * `diameter_m` - hole diameter in metres
    /// * `explosive_density` - g/cm³
    /// * `position` - where inside the 0.3-0.5 × B base-charge range to sit
    ///
    /// # Clamp
    /// When the column comes out negative it is set to zero and the base charge takes
    /// whatever the stemming leaves, so base + column + stemming never exceeds the
    /// hole depth and neither length is negative.
    pub fn compute(
        burden: f64,
        sub_drill: f64,
        stemming: f64,
        bench_height: f64,
        diameter_m: f64,
        explosive_density: f64,
        position: RangePosition,
    ) -> ChargeResult {
        let total_hole_depth = bench_height + sub_drill;
        let mut stemming = stemming;
        let base_factor = BASE_CHARGE_RANGE.at(position);
        let mut base = formulas::base_charge_length(burden, sub_drill, base_factor);
        let mut column = total_hole_depth - stemming - base;
        let mut clamp_applied = false;
        let mut fully_stemmed = false;

        if column < 0.0 {
            clamp_applied = true;
            column = 0.0;
            base = total_hole_depth - stemming;
            debug!(total_hole_depth, stemming, base, "column charge clamped to zero");

            // [GUARDRAIL] Stemming longer than the hole
            if base < 0.0 {
                fully_stemmed = true;
                warn!(
                    total_hole_depth,
                    stemming, "stemming exceeds hole depth, hole left uncharged"
                );
                base = 0.0;
                stemming = total_hole_depth;
            }
        }

        let cross_section = formulas::hole_cross_section(diameter_m);
        let density_kg_m3 = formulas::g_cm3_to_kg_m3(explosive_density);
        let base_charge_mass = base * cross_section * density_kg_m3;
        let column_charge_mass = column * cross_section * density_kg_m3;

        ChargeResult {
            total_hole_depth,
            stemming,
            base_charge_length: base,
            column_charge_length: column,
            base_charge_mass,
            column_charge_mass,
            total_charge_mass: base_charge_mass + column_charge_mass,
            clamp_applied,
            fully_stemmed,
        }
    }
}
