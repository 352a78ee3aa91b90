// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Range Sweep over the empirical coefficients
//!
//! Most rules of thumb are published as a range ("20 to 40 × D"). The design
//! engine uses the midpoint; this sweep evaluates the low and high ends too, so
//! the caller can see how far the powder factor moves inside the published bands.
//! Deterministic: three evaluations, no sampling.

use crate::design_engine::{DesignEngine, DesignResult};
use crate::error::Result;
use crate::formulas::RangePosition;
use crate::inputs::DesignInputs;
use crate::science::{PowderFactorEngine, PowderFactorStatus, PowderFactorTable};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wasm_bindgen::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub position: RangePosition,
    pub design: DesignResult,
    pub status: PowderFactorStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignEnvelope {
    pub points: Vec<SweepPoint>,
    pub powder_factor_min: f64,
    pub powder_factor_max: f64,
}

impl DesignEnvelope {
    pub fn at(&self, position: RangePosition) -> Option<&SweepPoint> {
        self.points.iter().find(|p| p.position == position)
    }

    /// Whether any point of the sweep lands inside the rock class band.
    pub fn reaches_band(&self) -> bool {
        self.points
            .iter()
            .any(|p| p.status == PowderFactorStatus::InRange)
    }
}

#[wasm_bindgen]
pub struct RangeSweep;

#[wasm_bindgen]
impl RangeSweep {
    /// Sweep a form payload (same shape as `BlastKernel::compute_design`).
    ///
    /// Returns the `DesignEnvelope` as JSON, or `{"error": ...}`.
    pub fn sweep(inputs_json: &str) -> String {
        let result = DesignInputs::from_json(inputs_json)
            .and_then(|resolved| Self::envelope(&resolved.inputs, &PowderFactorTable::default()));

        match result {
            Ok(envelope) => serde_json::to_string(&envelope).unwrap_or_default(),
            Err(e) => serde_json::to_string(&serde_json::json!({ "error": e })).unwrap_or_default(),
        }
    }
}

impl RangeSweep {
    pub fn envelope(inputs: &DesignInputs, table: &PowderFactorTable) -> Result<DesignEnvelope> {
        let range = table.get(inputs.rock_class);
        let mut points = Vec::with_capacity(RangePosition::ALL.len());

        for position in RangePosition::ALL {
            let design = DesignEngine::derive_at(inputs, position)?;
            let status = PowderFactorEngine::classify(design.powder_factor, range);
            debug!(?position, powder_factor = design.powder_factor, "sweep point");
            points.push(SweepPoint {
                position,
                design,
                status,
            });
        }

        let powder_factor_min = points
            .iter()
            .map(|p| p.design.powder_factor)
            .fold(f64::INFINITY, f64::min);
        let powder_factor_max = points
            .iter()
            .map(|p| p.design.powder_factor)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(DesignEnvelope {
            points,
            powder_factor_min,
            powder_factor_max,
        })
    }
}
