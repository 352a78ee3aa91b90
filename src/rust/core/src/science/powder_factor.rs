// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::error::{BlastError, Result};
use crate::inputs::RockClass;
use serde::{Deserialize, Serialize};

/// Recommended powder factor band (kg/m³).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowderFactorRange {
    pub min: f64,
    pub max: f64,
}

impl PowderFactorRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Static lookup of powder factor bands keyed by rock class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowderFactorTable {
    pub hard: PowderFactorRange,
    pub medium: PowderFactorRange,
    pub soft: PowderFactorRange,
    pub very_soft: PowderFactorRange,
}

impl Default for PowderFactorTable {
    fn default() -> Self {
        Self {
            hard: PowderFactorRange::new(0.7, 0.8),
            medium: PowderFactorRange::new(0.4, 0.5),
            soft: PowderFactorRange::new(0.25, 0.35),
            very_soft: PowderFactorRange::new(0.15, 0.25),
        }
    }
}

impl PowderFactorTable {
    pub fn get(&self, rock_class: RockClass) -> PowderFactorRange {
        match rock_class {
            RockClass::Hard => self.hard,
            RockClass::Medium => self.medium,
            RockClass::Soft => self.soft,
            RockClass::VerySoft => self.very_soft,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowderFactorStatus {
    Below,
    InRange,
    Above,
}

/// Informational comparison of a design against its rock class band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowderFactorAdvisory {
    pub rock_class: RockClass,
    pub powder_factor: f64,
    pub range: PowderFactorRange,
    pub status: PowderFactorStatus,
    pub recommendation: Option<String>,
}

const BELOW_BAND_ADVICE: &str =
    "Consider increasing the explosive charge or reducing the spacing/burden.";
const ABOVE_BAND_ADVICE: &str =
    "Consider decreasing the explosive charge or increasing the spacing/burden.";

pub struct PowderFactorEngine;

impl PowderFactorEngine {
    /// PF = W_e / V with V = B × S × H.
    ///
    /// # Errors
    /// `DegenerateGeometry` naming the first of burden, spacing, bench height that is
    /// not strictly positive, `rock_volume` when the product leaves the finite
    /// positive range, or `powder_factor` when the quotient is not finite.
    pub fn compute(
        total_charge_mass: f64,
        burden: f64,
        spacing: f64,
        bench_height: f64,
    ) -> Result<f64> {
        let powder_factor = total_charge_mass / Self::rock_volume(burden, spacing, bench_height)?;
        if !powder_factor.is_finite() {
            return Err(BlastError::degenerate("powder_factor"));
        }
        Ok(powder_factor)
    }

    /// Rock volume broken per hole (m³).
    pub fn rock_volume(burden: f64, spacing: f64, bench_height: f64) -> Result<f64> {
        let factors = [
            ("burden", burden),
            ("spacing", spacing),
            ("bench_height", bench_height),
        ];
        for (field, value) in factors {
            if !(value > 0.0) {
                return Err(BlastError::degenerate(field));
            }
        }

        // Positive factors can still underflow to 0 or overflow to inf
        let volume = burden * spacing * bench_height;
        if !(volume.is_finite() && volume > 0.0) {
            return Err(BlastError::degenerate("rock_volume"));
        }
        Ok(volume)
    }

    pub fn classify(powder_factor: f64, range: PowderFactorRange) -> PowderFactorStatus {
        if powder_factor < range.min {
            PowderFactorStatus::Below
        } else if powder_factor > range.max {
            PowderFactorStatus::Above
        } else {
            PowderFactorStatus::InRange
        }
    }

    pub fn assess(
        powder_factor: f64,
        rock_class: RockClass,
        table: &PowderFactorTable,
    ) -> PowderFactorAdvisory {
        let range = table.get(rock_class);
        let status = Self::classify(powder_factor, range);
        let recommendation = match status {
            PowderFactorStatus::InRange => None,
            PowderFactorStatus::Below => Some(BELOW_BAND_ADVICE.to_string()),
            PowderFactorStatus::Above => Some(ABOVE_BAND_ADVICE.to_string()),
        };

        PowderFactorAdvisory {
            rock_class,
            powder_factor,
            range,
            status,
            recommendation,
        }
    }
}
