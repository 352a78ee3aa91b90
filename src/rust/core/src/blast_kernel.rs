// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Blast Design Kernel
//
// ============================================================================
// BlastKernel: single entry point for a design request
// ============================================================================
// Parameter Engine → Layout Generator, strictly in that order. Every call is
// independent and deterministic; nothing is cached between requests.
// ============================================================================

use crate::design_engine::{DesignEngine, DesignResult};
use crate::error::{BlastError, Result};
use crate::formulas::RangePosition;
use crate::inputs::{DesignInputs, InputLimits, ResolvedInputs, SelectorFallback};
use crate::layout::{pattern, HoleProfile, PatternLayout};
use crate::science::{
    PowderFactorAdvisory, PowderFactorEngine, PowderFactorStatus, PowderFactorTable,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wasm_bindgen::prelude::*;

/// Largest plan-view grid a request may ask for.
pub const DEFAULT_MAX_PATTERN_HOLES: usize = 10_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastConfig {
    pub enable_layout: bool,
    pub enable_profile: bool,
    pub enable_advisory: bool,
    /// Grid of simulated holes for the plan view.
    pub pattern_rows: usize,
    pub pattern_cols: usize,
    /// Upper bound on `pattern_rows × pattern_cols`.
    pub max_pattern_holes: usize,
    /// Where ranged coefficients sit. Midpoint reproduces the published table.
    pub range_position: RangePosition,
    pub limits: InputLimits,
    pub powder_factor_ranges: PowderFactorTable,
}

impl Default for BlastConfig {
    fn default() -> Self {
        Self {
            enable_layout: true,
            enable_profile: true,
            enable_advisory: true,
            pattern_rows: 5,
            pattern_cols: 6,
            max_pattern_holes: DEFAULT_MAX_PATTERN_HOLES,
            range_position: RangePosition::Midpoint,
            limits: InputLimits::default(),
            powder_factor_ranges: PowderFactorTable::default(),
        }
    }
}

impl BlastConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationEvent {
    fn new(topic: &str, severity: Severity, message: String) -> Self {
        Self {
            topic: topic.to_string(),
            message,
            severity,
        }
    }
}

/// Everything one request produces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlastDesign {
    pub result: DesignResult,
    pub advisory: Option<PowderFactorAdvisory>,
    pub layout: Option<PatternLayout>,
    pub profile: Option<HoleProfile>,
    pub events: Vec<ValidationEvent>,
}

#[wasm_bindgen]
pub struct BlastKernel;

#[wasm_bindgen]
impl BlastKernel {
    /// Main entry point for the web front-end: form JSON in, design JSON out.
    ///
    /// # Example
    /// ```json
    /// {"bench_height": 10, "hole_diameter": 150, "hole_condition": "Dry",
    ///  "rock_type": "Medium", "explosive_density": 1.2, "rock_density": 2.6,
    ///  "burden_formula": "Hoek and Bray", "spacing_pattern": "Square",
    ///  "stemming_formula": "Atlas", "sub_drill_formula": "Konya"}
    /// ```
    ///
    /// # Errors
    /// Returns `{"error": {"kind": ..., "field": ...}}`; never a partial design.
    pub fn compute_design(inputs_json: &str) -> String {
        Self::respond(Self::run(inputs_json, &BlastConfig::default()))
    }

    /// As `compute_design`, with a `BlastConfig` JSON (missing fields take defaults).
    pub fn compute_design_with_config(inputs_json: &str, config_json: &str) -> String {
        let result = BlastConfig::from_json(config_json)
            .and_then(|config| Self::run(inputs_json, &config));
        Self::respond(result)
    }
}

/// Pure Rust implementation (non-WASM).
impl BlastKernel {
    pub fn run(inputs_json: &str, config: &BlastConfig) -> Result<BlastDesign> {
        let resolved = DesignInputs::from_json(inputs_json)?;
        Self::compute_resolved(&resolved, config)
    }

    /// Runs the design and prepends an event for every selector that fell back.
    pub fn compute_resolved(
        resolved: &ResolvedInputs,
        config: &BlastConfig,
    ) -> Result<BlastDesign> {
        let mut design = Self::compute(&resolved.inputs, &config.powder_factor_ranges, config)?;
        let mut events: Vec<ValidationEvent> =
            resolved.fallbacks.iter().map(Self::fallback_event).collect();
        events.append(&mut design.events);
        design.events = events;
        Ok(design)
    }

    /// [CORE] Inputs and powder factor table → scalar design, layout and profile.
    pub fn compute(
        inputs: &DesignInputs,
        table: &PowderFactorTable,
        config: &BlastConfig,
    ) -> Result<BlastDesign> {
        inputs.validate()?;
        if config.enable_layout {
            Self::check_grid(config)?;
        }

        let mut events = Vec::new();

        for v in config.limits.check(inputs) {
            events.push(ValidationEvent::new(
                "INPUT.ENVELOPE",
                Severity::Warning,
                format!(
                    "{} = {} is outside the recommended {} - {}",
                    v.field, v.value, v.bounds.min, v.bounds.max
                ),
            ));
        }

        // 1. Parameter Engine
        let result = DesignEngine::derive_at(inputs, config.range_position)?;

        if result.fully_stemmed {
            events.push(ValidationEvent::new(
                "CHARGE.STEMMING",
                Severity::Critical,
                format!(
                    "Stemming fills the whole {:.2} m hole; no explosive is loaded",
                    result.total_hole_depth
                ),
            ));
        } else if result.clamp_applied {
            events.push(ValidationEvent::new(
                "CHARGE.CLAMP",
                Severity::Info,
                format!(
                    "Column charge clamped to zero; base charge shortened to {:.2} m",
                    result.base_charge_length
                ),
            ));
        }

        // 2. Advisory (never alters the result)
        let advisory = if config.enable_advisory {
            let advisory =
                PowderFactorEngine::assess(result.powder_factor, inputs.rock_class, table);
            events.push(Self::advisory_event(&advisory));
            Some(advisory)
        } else {
            None
        };

        // 3. Layout Generator
        let layout = config.enable_layout.then(|| {
            pattern(
                result.spacing,
                result.burden,
                result.selection.spacing,
                config.pattern_rows,
                config.pattern_cols,
            )
        });
        let profile = config
            .enable_profile
            .then(|| HoleProfile::from_design(&result));

        info!(
            burden = result.burden,
            spacing = result.spacing,
            powder_factor = result.powder_factor,
            "blast design computed"
        );
        debug!(events = events.len(), "design events");

        Ok(BlastDesign {
            result,
            advisory,
            layout,
            profile,
            events,
        })
    }

    fn check_grid(config: &BlastConfig) -> Result<()> {
        if config.pattern_rows == 0 {
            return Err(BlastError::invalid("pattern_rows", "must be > 0"));
        }
        if config.pattern_cols == 0 {
            return Err(BlastError::invalid("pattern_cols", "must be > 0"));
        }
        match config.pattern_rows.checked_mul(config.pattern_cols) {
            Some(holes) if holes <= config.max_pattern_holes => Ok(()),
            _ => Err(BlastError::invalid(
                "pattern_rows",
                format!(
                    "pattern_rows × pattern_cols must not exceed {}",
                    config.max_pattern_holes
                ),
            )),
        }
    }

    fn respond(result: Result<BlastDesign>) -> String {
        match result {
            Ok(design) => serde_json::to_string(&design).unwrap_or_default(),
            Err(e) => serde_json::to_string(&serde_json::json!({ "error": e })).unwrap_or_default(),
        }
    }

    fn fallback_event(fallback: &SelectorFallback) -> ValidationEvent {
        ValidationEvent::new(
            "DESIGN.SELECTOR",
            Severity::Warning,
            format!(
                "Unrecognised {} '{}', using {}",
                fallback.selector, fallback.requested, fallback.resolved
            ),
        )
    }

    fn advisory_event(advisory: &PowderFactorAdvisory) -> ValidationEvent {
        let rock = advisory.rock_class.label().to_lowercase();
        match advisory.status {
            PowderFactorStatus::InRange => ValidationEvent::new(
                "POWDER_FACTOR",
                Severity::Info,
                format!(
                    "Powder factor ({:.3} kg/m³) is within the acceptable range for {} rock.",
                    advisory.powder_factor, rock
                ),
            ),
            PowderFactorStatus::Below | PowderFactorStatus::Above => ValidationEvent::new(
                "POWDER_FACTOR",
                Severity::Warning,
                format!(
                    "Powder factor ({:.3} kg/m³) is outside the recommended range \
                     for {} rock ({} - {} kg/m³). {}",
                    advisory.powder_factor,
                    rock,
                    advisory.range.min,
                    advisory.range.max,
                    advisory.recommendation.as_deref().unwrap_or_default()
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::RockClass;
    use serde_json::json;

    fn form() -> serde_json::Value {
        json!({
            "bench_height": 10.0,
            "hole_diameter": 150.0,
            "hole_condition": "Dry",
            "rock_type": "Medium",
            "explosive_density": 1.2,
            "rock_density": 2.6,
            "burden_formula": "Hoek and Bray",
            "spacing_pattern": "Square",
            "stemming_formula": "Atlas",
            "sub_drill_formula": "Konya"
        })
    }

    #[test]
    fn test_compute_design_json() {
        let out = BlastKernel::compute_design(&form().to_string());
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(v.get("error").is_none(), "{}", out);
        assert!((v["result"]["burden"].as_f64().unwrap() - 6.75).abs() < 1e-9);
        assert_eq!(v["layout"]["holes"].as_array().unwrap().len(), 30);
        assert_eq!(v["profile"]["intervals"].as_array().unwrap().len(), 4);
        assert_eq!(v["advisory"]["status"], "BELOW");
    }

    #[test]
    fn test_invalid_input_returns_error_only() {
        let mut payload = form();
        payload["bench_height"] = json!(-1.0);
        let out = BlastKernel::compute_design(&payload.to_string());
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["error"]["kind"], "INVALID_INPUT");
        assert_eq!(v["error"]["field"], "bench_height");
        assert!(v.get("result").is_none());
    }

    #[test]
    fn test_fallback_selector_event() {
        let mut payload = form();
        payload["burden_formula"] = json!("Unknown");
        let design = BlastKernel::run(&payload.to_string(), &BlastConfig::default()).unwrap();
        assert_eq!(design.events[0].topic, "DESIGN.SELECTOR");
        assert_eq!(design.events[0].severity, Severity::Warning);
        // 25 × 0.15
        assert!((design.result.burden - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_advisory_does_not_change_result() {
        let inputs = DesignInputs::default();
        let table = PowderFactorTable::default();
        let with = BlastKernel::compute(&inputs, &table, &BlastConfig::default()).unwrap();
        let without = BlastKernel::compute(
            &inputs,
            &table,
            &BlastConfig {
                enable_advisory: false,
                ..BlastConfig::default()
            },
        )
        .unwrap();
        assert_eq!(with.result, without.result);
        assert!(without.advisory.is_none());
    }

    #[test]
    fn test_custom_table_moves_status() {
        let inputs = DesignInputs {
            rock_class: RockClass::Soft,
            ..DesignInputs::default()
        };
        let generous = PowderFactorTable {
            soft: crate::science::PowderFactorRange::new(0.0, 10.0),
            ..PowderFactorTable::default()
        };
        let design = BlastKernel::compute(&inputs, &generous, &BlastConfig::default()).unwrap();
        assert_eq!(design.advisory.unwrap().status, PowderFactorStatus::InRange);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let config = BlastConfig {
            pattern_rows: 0,
            ..BlastConfig::default()
        };
        let err =
            BlastKernel::compute(&DesignInputs::default(), &config.powder_factor_ranges, &config)
                .unwrap_err();
        assert_eq!(err.field(), Some("pattern_rows"));
    }

    #[test]
    fn test_layout_disabled_skips_grid_check() {
        let config = BlastConfig {
            enable_layout: false,
            pattern_rows: 0,
            ..BlastConfig::default()
        };
        let table = &config.powder_factor_ranges;
        let design = BlastKernel::compute(&DesignInputs::default(), table, &config).unwrap();
        assert!(design.layout.is_none());
        assert!(design.profile.is_some());
    }

    #[test]
    fn test_config_json_partial() {
        let out = BlastKernel::compute_design_with_config(
            &form().to_string(),
            r#"{"pattern_rows": 2, "pattern_cols": 3, "enable_profile": false}"#,
        );
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["layout"]["holes"].as_array().unwrap().len(), 6);
        assert!(v["profile"].is_null());
    }

    #[test]
    fn test_envelope_warning() {
        let inputs = DesignInputs {
            hole_diameter_mm: 500.0,
            ..DesignInputs::default()
        };
        let config = BlastConfig::default();
        let design = BlastKernel::compute(&inputs, &config.powder_factor_ranges, &config).unwrap();
        assert!(design.events.iter().any(|e| e.topic == "INPUT.ENVELOPE"));
    }

    #[test]
    fn test_oversized_grid_returns_error_json() {
        // rows × cols overflows usize
        let out = BlastKernel::compute_design_with_config(
            &form().to_string(),
            r#"{"pattern_rows": 4294967296, "pattern_cols": 4294967296}"#,
        );
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["error"]["kind"], "INVALID_INPUT");
        assert_eq!(v["error"]["field"], "pattern_rows");
        assert!(v.get("layout").is_none());
    }

    #[test]
    fn test_grid_cap_is_inclusive() {
        let at_cap = BlastConfig {
            pattern_rows: 100,
            pattern_cols: 100,
            ..BlastConfig::default()
        };
        let table = &at_cap.powder_factor_ranges;
        let design = BlastKernel::compute(&DesignInputs::default(), table, &at_cap).unwrap();
        assert_eq!(design.layout.unwrap().len(), DEFAULT_MAX_PATTERN_HOLES);

        let over = BlastConfig {
            pattern_cols: 101,
            ..at_cap.clone()
        };
        let err = BlastKernel::compute(&DesignInputs::default(), table, &over).unwrap_err();
        assert_eq!(err.field(), Some("pattern_rows"));
    }

    #[test]
    fn test_non_finite_volume_returns_error() {
        let inputs = DesignInputs {
            hole_diameter_mm: 1e-200,
            ..DesignInputs::default()
        };
        let config = BlastConfig::default();
        let err = BlastKernel::compute(&inputs, &config.powder_factor_ranges, &config).unwrap_err();
        assert_eq!(err, BlastError::degenerate("rock_volume"));
    }
}
