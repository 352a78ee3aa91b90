// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Design inputs and their boundary validation.
//!
//! `RawDesignInputs` is what arrives from the form (JSON, string labels, possibly
//! missing fields). `DesignInputs` is the validated value the engine works on.

use crate::error::{BlastError, Result};
use crate::science::{BurdenFormula, SpacingPattern, StemmingFormula, SubDrillFormula};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoleCondition {
    #[default]
    Dry,
    Wet,
}

impl HoleCondition {
    pub fn from_label(label: &str) -> Option<Self> {
        match crate::science::normalize_label(label).as_str() {
            "dry" => Some(HoleCondition::Dry),
            "wet" | "water" | "watered" => Some(HoleCondition::Wet),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HoleCondition::Dry => "Dry",
            HoleCondition::Wet => "Wet",
        }
    }

    pub fn is_wet(&self) -> bool {
        matches!(self, HoleCondition::Wet)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RockClass {
    Hard,
    #[default]
    Medium,
    Soft,
    #[serde(rename = "Very Soft")]
    VerySoft,
}

impl RockClass {
    pub const ALL: [RockClass; 4] = [
        RockClass::Hard,
        RockClass::Medium,
        RockClass::Soft,
        RockClass::VerySoft,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match crate::science::normalize_label(label).as_str() {
            "hard" => Some(RockClass::Hard),
            "medium" => Some(RockClass::Medium),
            "soft" => Some(RockClass::Soft),
            "verysoft" => Some(RockClass::VerySoft),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RockClass::Hard => "Hard",
            RockClass::Medium => "Medium",
            RockClass::Soft => "Soft",
            RockClass::VerySoft => "Very Soft",
        }
    }
}

/// One resolved formula per selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormulaSelection {
    pub burden: BurdenFormula,
    pub spacing: SpacingPattern,
    pub stemming: StemmingFormula,
    pub sub_drill: SubDrillFormula,
}

impl Default for FormulaSelection {
    fn default() -> Self {
        Self {
            burden: BurdenFormula::HoekBray,
            spacing: SpacingPattern::Square,
            stemming: StemmingFormula::Atlas,
            sub_drill: SubDrillFormula::Atlas,
        }
    }
}

impl FormulaSelection {
    /// Fixed-coefficient preset of the quick calculator.
    pub fn simplified() -> Self {
        Self {
            burden: BurdenFormula::HoekBray,
            spacing: SpacingPattern::Square,
            stemming: StemmingFormula::Atlas,
            sub_drill: SubDrillFormula::Konya,
        }
    }

    pub fn labels(&self) -> SelectionLabels {
        SelectionLabels {
            burden_formula: self.burden.label().to_string(),
            spacing_pattern: self.spacing.label().to_string(),
            stemming_formula: self.stemming.label().to_string(),
            sub_drill_formula: self.sub_drill.label().to_string(),
        }
    }
}

/// A selector label that did not match any listed formula.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorFallback {
    pub selector: String,
    pub requested: String,
    pub resolved: String,
}

/// Formula selectors as typed in the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionLabels {
    pub burden_formula: String,
    pub spacing_pattern: String,
    pub stemming_formula: String,
    pub sub_drill_formula: String,
}

impl Default for SelectionLabels {
    fn default() -> Self {
        FormulaSelection::default().labels()
    }
}

impl SelectionLabels {
    /// Maps every label to its formula. Unknown labels take the selector's fallback
    /// and are listed in the second element.
    pub fn resolve(&self) -> (FormulaSelection, Vec<SelectorFallback>) {
        let mut fallbacks = Vec::new();

        let burden = resolve_one(
            "burden_formula",
            &self.burden_formula,
            BurdenFormula::from_label,
            BurdenFormula::Fallback,
            BurdenFormula::label,
            &mut fallbacks,
        );
        let spacing = resolve_one(
            "spacing_pattern",
            &self.spacing_pattern,
            SpacingPattern::from_label,
            SpacingPattern::FALLBACK,
            SpacingPattern::label,
            &mut fallbacks,
        );
        let stemming = resolve_one(
            "stemming_formula",
            &self.stemming_formula,
            StemmingFormula::from_label,
            StemmingFormula::FALLBACK,
            StemmingFormula::label,
            &mut fallbacks,
        );
        let sub_drill = resolve_one(
            "sub_drill_formula",
            &self.sub_drill_formula,
            SubDrillFormula::from_label,
            SubDrillFormula::FALLBACK,
            SubDrillFormula::label,
            &mut fallbacks,
        );

        (
            FormulaSelection {
                burden,
                spacing,
                stemming,
                sub_drill,
            },
            fallbacks,
        )
    }
}

fn resolve_one<T: Copy>(
    selector: &str,
    requested: &str,
    parse: impl Fn(&str) -> Option<T>,
    fallback: T,
    label: impl Fn(&T) -> &'static str,
    fallbacks: &mut Vec<SelectorFallback>,
) -> T {
    match parse(requested) {
        Some(formula) => formula,
        None => {
            warn!(
                selector,
                requested,
                resolved = label(&fallback),
                "unrecognised formula selector, using fallback"
            );
            fallbacks.push(SelectorFallback {
                selector: selector.to_string(),
                requested: requested.to_string(),
                resolved: label(&fallback).to_string(),
            });
            fallback
        }
    }
}

/// Validated design inputs. Fields are public so callers (and tests) can build
/// values directly; `validate` re-checks the boundary rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignInputs {
    pub bench_height: f64,     // m
    pub hole_diameter_mm: f64, // mm
    pub hole_condition: HoleCondition,
    pub rock_class: RockClass,
    pub explosive_density: f64, // g/cm³
    pub rock_density: f64,      // g/cm³
    pub selection: FormulaSelection,
}

impl Default for DesignInputs {
    fn default() -> Self {
        Self {
            bench_height: 10.0,
            hole_diameter_mm: 150.0,
            hole_condition: HoleCondition::Dry,
            rock_class: RockClass::Medium,
            explosive_density: 1.2,
            rock_density: 2.6,
            selection: FormulaSelection::default(),
        }
    }
}

impl DesignInputs {
    pub fn hole_diameter_m(&self) -> f64 {
        crate::formulas::mm_to_m(self.hole_diameter_mm)
    }

    /// Every numeric field must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("bench_height", self.bench_height),
            ("hole_diameter", self.hole_diameter_mm),
            ("explosive_density", self.explosive_density),
            ("rock_density", self.rock_density),
        ] {
            require_positive(field, value)?;
        }
        Ok(())
    }

    /// Parse and validate a JSON payload in the form's shape.
    pub fn from_json(json: &str) -> Result<ResolvedInputs> {
        let raw: RawDesignInputs = serde_json::from_str(json)?;
        raw.resolve()
    }
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BlastError::invalid(field, format!("must be a finite number, got {}", value)));
    }
    if value <= 0.0 {
        return Err(BlastError::invalid(field, format!("must be > 0, got {}", value)));
    }
    Ok(())
}

/// Inputs as they arrive from the form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawDesignInputs {
    pub bench_height: Option<f64>,
    /// Millimetres.
    pub hole_diameter: Option<f64>,
    #[serde(default)]
    pub hole_condition: Option<String>,
    #[serde(default, alias = "rock_type")]
    pub rock_class: Option<String>,
    pub explosive_density: Option<f64>,
    pub rock_density: Option<f64>,
    #[serde(flatten)]
    pub selection: SelectionLabels,
}

/// Validated inputs plus the selectors that fell back.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedInputs {
    pub inputs: DesignInputs,
    pub fallbacks: Vec<SelectorFallback>,
}

impl RawDesignInputs {
    pub fn resolve(&self) -> Result<ResolvedInputs> {
        let bench_height = required("bench_height", self.bench_height)?;
        let hole_diameter_mm = required("hole_diameter", self.hole_diameter)?;
        let explosive_density = required("explosive_density", self.explosive_density)?;
        let rock_density = required("rock_density", self.rock_density)?;

        let hole_condition = match &self.hole_condition {
            None => HoleCondition::default(),
            Some(label) => HoleCondition::from_label(label).ok_or_else(|| {
                BlastError::invalid("hole_condition", format!("unknown hole condition '{}'", label))
            })?,
        };
        let rock_class = match &self.rock_class {
            None => RockClass::default(),
            Some(label) => RockClass::from_label(label).ok_or_else(|| {
                BlastError::invalid("rock_class", format!("unknown rock class '{}'", label))
            })?,
        };

        let (selection, fallbacks) = self.selection.resolve();

        let inputs = DesignInputs {
            bench_height,
            hole_diameter_mm,
            hole_condition,
            rock_class,
            explosive_density,
            rock_density,
            selection,
        };
        inputs.validate()?;

        Ok(ResolvedInputs { inputs, fallbacks })
    }
}

fn required(field: &str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| BlastError::invalid(field, "is required"))
}

/// Closed interval used for the recommended operating envelope.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Recommended envelope for the empirical rules. Leaving it is allowed but reported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub bench_height: Bounds,      // m
    pub hole_diameter_mm: Bounds,  // mm
    pub explosive_density: Bounds, // g/cm³
    pub rock_density: Bounds,      // g/cm³
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            bench_height: Bounds::new(1.0, 30.0),
            hole_diameter_mm: Bounds::new(50.0, 400.0),
            explosive_density: Bounds::new(0.8, 1.6),
            rock_density: Bounds::new(1.5, 4.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LimitViolation {
    pub field: String,
    pub value: f64,
    pub bounds: Bounds,
}

impl InputLimits {
    pub fn check(&self, inputs: &DesignInputs) -> Vec<LimitViolation> {
        [
            ("bench_height", inputs.bench_height, self.bench_height),
            ("hole_diameter", inputs.hole_diameter_mm, self.hole_diameter_mm),
            ("explosive_density", inputs.explosive_density, self.explosive_density),
            ("rock_density", inputs.rock_density, self.rock_density),
        ]
        .into_iter()
        .filter(|(_, value, bounds)| !bounds.contains(*value))
        .map(|(field, value, bounds)| LimitViolation {
            field: field.to_string(),
            value,
            bounds,
        })
        .collect()
    }
}
