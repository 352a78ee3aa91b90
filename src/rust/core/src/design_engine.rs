// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Parameter Engine
//!
//! Maps rock, explosive and geometry inputs to the scalar blast design.
//! Burden, stemming and sub-drill are resolved in that order; every later rule
//! may read the burden already bound.

use crate::error::{BlastError, Result};
use crate::formulas::{self, RangePosition};
use crate::inputs::{DesignInputs, FormulaSelection};
use crate::science::{ChargeEngine, PowderFactorEngine};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scalar design for one hole. All lengths in m, masses in kg.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    pub bench_height: f64,
    pub burden: f64,
    pub spacing: f64,
    /// Stemming in the hole. Equals `design_stemming` unless the hole is fully stemmed.
    pub stemming: f64,
    /// Stemming given by the selected rule, before any clamp.
    pub design_stemming: f64,
    pub sub_drill: f64,
    pub base_charge_length: f64,
    pub column_charge_length: f64,
    pub total_hole_depth: f64,
    pub base_charge_mass: f64,
    pub column_charge_mass: f64,
    pub total_charge_mass: f64,
    pub rock_volume: f64,   // m³ per hole
    pub powder_factor: f64, // kg/m³
    pub rock_mass: f64,     // t per hole
    /// kg of explosive per tonne of rock; `None` when the rock mass is not positive.
    pub specific_charge: Option<f64>,
    pub deck_stemming: f64,
    pub clamp_applied: bool,
    pub fully_stemmed: bool,
    pub selection: FormulaSelection,
    pub range_position: RangePosition,
}

/// One line of the "calculated parameters" table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub parameter: String,
    pub value: String,
    pub formula: String,
}

impl DesignResult {
    /// Rows in the order the results table shows them.
    pub fn summary(&self) -> Vec<SummaryRow> {
        let row = |parameter: &str, value: String, formula: &str| SummaryRow {
            parameter: parameter.to_string(),
            value,
            formula: formula.to_string(),
        };
        let metres = |v: f64| format!("{:.2} m", v);
        let spacing_formula = format!("{} Pattern", self.selection.spacing.label());
        let stemming_formula = if self.fully_stemmed {
            format!(
                "{} ({:.2} m, clamped to hole depth)",
                self.selection.stemming.label(),
                self.design_stemming
            )
        } else {
            self.selection.stemming.label().to_string()
        };

        vec![
            row("Burden", metres(self.burden), self.selection.burden.label()),
            row("Spacing", metres(self.spacing), spacing_formula.as_str()),
            row("Stemming Length", metres(self.stemming), stemming_formula.as_str()),
            row("Sub-Drill Depth", metres(self.sub_drill), self.selection.sub_drill.label()),
            row("Base Charge Length", metres(self.base_charge_length), "Base Charge Formula"),
            row("Column Charge Length", metres(self.column_charge_length), "Calculated"),
            row("Total Hole Depth", metres(self.total_hole_depth), "Sum of Components"),
            row(
                "Total Explosive Charge",
                format!("{:.2} kg", self.total_charge_mass),
                "Calculated",
            ),
            row(
                "Powder Factor",
                format!("{:.3} kg/m³", self.powder_factor),
                "Weight/Volume",
            ),
        ]
    }
}

pub struct DesignEngine;

impl DesignEngine {
    /// Derive the design with every ranged coefficient at its published midpoint.
    ///
    /// Inputs are expected to have passed `DesignInputs::validate`; the engine itself
    /// only fails when the broken-rock volume, powder factor or rock mass is degenerate.
    pub fn derive(inputs: &DesignInputs) -> Result<DesignResult> {
        Self::derive_at(inputs, RangePosition::Midpoint)
    }

    pub fn derive_at(inputs: &DesignInputs, position: RangePosition) -> Result<DesignResult> {
        let d = inputs.hole_diameter_m();
        let h = inputs.bench_height;
        let selection = inputs.selection;

        let burden = selection.burden.compute(d, h, position);
        let spacing = selection.spacing.compute(burden, position);
        let stemming = selection.stemming.compute(burden, d, position);
        let sub_drill = selection.sub_drill.compute(burden, position);
        debug!(burden, spacing, stemming, sub_drill, ?position, "geometry resolved");

        let charge = ChargeEngine::compute(
            burden,
            sub_drill,
            stemming,
            h,
            d,
            inputs.explosive_density,
            position,
        );

        let rock_volume = PowderFactorEngine::rock_volume(burden, spacing, h)?;
        let powder_factor =
            PowderFactorEngine::compute(charge.total_charge_mass, burden, spacing, h)?;

        // g/cm³ is numerically t/m³
        let rock_mass = rock_volume * inputs.rock_density;
        if !rock_mass.is_finite() {
            return Err(BlastError::degenerate("rock_mass"));
        }
        let specific_charge = if rock_mass > 0.0 {
            Some(charge.total_charge_mass / rock_mass)
        } else {
            None
        };

        Ok(DesignResult {
            bench_height: h,
            burden,
            spacing,
            stemming: charge.stemming,
            design_stemming: stemming,
            sub_drill,
            base_charge_length: charge.base_charge_length,
            column_charge_length: charge.column_charge_length,
            total_hole_depth: charge.total_hole_depth,
            base_charge_mass: charge.base_charge_mass,
            column_charge_mass: charge.column_charge_mass,
            total_charge_mass: charge.total_charge_mass,
            rock_volume,
            powder_factor,
            rock_mass,
            specific_charge,
            deck_stemming: formulas::deck_stemming(d, inputs.hole_condition.is_wet()),
            clamp_applied: charge.clamp_applied,
            fully_stemmed: charge.fully_stemmed,
            selection,
            range_position: position,
        })
    }
}
