// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Blast Design Scenario Tests
//!
//! End-to-end checks across the parameter engine, layout generator and kernel.

use crate::blast_kernel::{BlastConfig, BlastKernel};
use crate::design_engine::DesignEngine;
use crate::error::BlastError;
use crate::formulas::{self, RangePosition};
use crate::inputs::{DesignInputs, FormulaSelection, HoleCondition, RockClass};
use crate::layout::{pattern, HoleProfile, IntervalKind};
use crate::science::{BurdenFormula, SpacingPattern, StemmingFormula, SubDrillFormula};
use serde_json::json;

fn every_selection() -> Vec<FormulaSelection> {
    let mut all = Vec::new();
    for burden in BurdenFormula::LISTED {
        for spacing in SpacingPattern::ALL {
            for stemming in StemmingFormula::ALL {
                for sub_drill in SubDrillFormula::ALL {
                    all.push(FormulaSelection {
                        burden,
                        spacing,
                        stemming,
                        sub_drill,
                    });
                }
            }
        }
    }
    all
}

fn inputs(bench_height: f64, hole_diameter_mm: f64, selection: FormulaSelection) -> DesignInputs {
    DesignInputs {
        bench_height,
        hole_diameter_mm,
        hole_condition: HoleCondition::Dry,
        rock_class: RockClass::Medium,
        explosive_density: 1.2,
        rock_density: 2.6,
        selection,
    }
}

#[test]
fn test_reference_scenario_exact_values() {
    // D = 150 mm, H = 10 m, Hoek and Bray / Square / Atlas / Konya
    let reference = inputs(10.0, 150.0, FormulaSelection::simplified());
    let design = DesignEngine::derive(&reference).unwrap();

    assert!((design.burden - 6.75).abs() < 1e-9);
    assert!((design.spacing - 6.75).abs() < 1e-9);
    assert!((design.sub_drill - 2.025).abs() < 1e-9);
    assert!((design.stemming - 6.75).abs() < 1e-9);
    assert!((design.total_hole_depth - 12.025).abs() < 1e-9);
    assert!((design.base_charge_length - 4.725).abs() < 1e-9);
    assert!((design.column_charge_length - 0.55).abs() < 1e-9);
    assert!(!design.clamp_applied);
}

#[test]
fn test_clamp_on_shallow_bench() {
    // H = 1 m, 65 mm, Atlas Copco burden, Common stemming: base + stemming overrun the hole
    let selection = FormulaSelection {
        burden: BurdenFormula::AtlasCopco,
        spacing: SpacingPattern::Square,
        stemming: StemmingFormula::Common,
        sub_drill: SubDrillFormula::Atlas,
    };
    let d = DesignEngine::derive(&inputs(1.0, 65.0, selection)).unwrap();

    let unclamped_column = d.total_hole_depth - d.stemming - (0.4 * d.burden + d.sub_drill);
    assert!(unclamped_column < 0.0, "scenario must overrun: {}", unclamped_column);

    assert!(d.clamp_applied);
    assert!(!d.fully_stemmed);
    assert_eq!(d.column_charge_length, 0.0);
    assert!(d.base_charge_length > 0.0);
    assert!((d.base_charge_length - (d.total_hole_depth - d.stemming)).abs() < 1e-12);
}

#[test]
fn test_clamp_on_large_diameter_hole() {
    // 250 mm on a 1 m bench: 20·D stemming is longer than the hole itself
    let selection = FormulaSelection {
        burden: BurdenFormula::AtlasCopco,
        spacing: SpacingPattern::Square,
        stemming: StemmingFormula::Common,
        sub_drill: SubDrillFormula::Konya,
    };
    let d = DesignEngine::derive(&inputs(1.0, 250.0, selection)).unwrap();

    assert!(d.clamp_applied && d.fully_stemmed);
    assert_eq!(d.design_stemming, 20.0 * 0.25);
    assert!(d.design_stemming > d.stemming);
    assert_eq!(d.column_charge_length, 0.0);
    assert_eq!(d.base_charge_length, 0.0);
    assert_eq!(d.base_charge_length, d.total_hole_depth - d.stemming);
    assert_eq!(d.powder_factor, 0.0);
}

#[test]
fn test_charge_lengths_non_negative_everywhere() {
    for selection in every_selection() {
        for h in [1.0, 3.0, 10.0, 30.0] {
            for dia in [50.0, 150.0, 400.0] {
                let d = DesignEngine::derive(&inputs(h, dia, selection)).unwrap();
                assert!(d.base_charge_length >= 0.0, "{:?} h={} d={}", selection, h, dia);
                assert!(d.column_charge_length >= 0.0, "{:?} h={} d={}", selection, h, dia);
                let used = d.base_charge_length + d.column_charge_length + d.stemming;
                assert!(used <= d.total_hole_depth + 1e-9);
                assert_eq!(d.total_hole_depth, h + d.sub_drill);
                if d.clamp_applied {
                    assert!((d.base_charge_length + d.stemming - d.total_hole_depth).abs() < 1e-9);
                }
                assert!(d.powder_factor.is_finite() && d.powder_factor >= 0.0);
            }
        }
    }
}

#[test]
fn test_hoek_bray_burden_monotone_in_diameter() {
    let mut last = 0.0;
    for dia in (50..=400).step_by(5) {
        let i = inputs(10.0, dia as f64, FormulaSelection::simplified());
        let d = DesignEngine::derive(&i).unwrap();
        assert!(d.burden > last, "burden must grow with diameter at {} mm", dia);
        last = d.burden;
    }
}

#[test]
fn test_determinism_bitwise() {
    for selection in every_selection() {
        let i = inputs(12.5, 165.0, selection);
        let config = BlastConfig::default();
        let a = BlastKernel::compute(&i, &config.powder_factor_ranges, &config).unwrap();
        let b = BlastKernel::compute(&i, &config.powder_factor_ranges, &config).unwrap();
        assert_eq!(a.result.powder_factor.to_bits(), b.result.powder_factor.to_bits());
        assert_eq!(a, b);
    }
}

#[test]
fn test_json_boundary_is_deterministic() {
    let payload = json!({
        "bench_height": 15.0,
        "hole_diameter": 200.0,
        "hole_condition": "Wet",
        "rock_type": "Hard",
        "explosive_density": 1.3,
        "rock_density": 2.8,
        "burden_formula": "Dick et al",
        "spacing_pattern": "Staggered",
        "stemming_formula": "Common",
        "sub_drill_formula": "Hoek & Bray"
    })
    .to_string();
    assert_eq!(
        BlastKernel::compute_design(&payload),
        BlastKernel::compute_design(&payload)
    );
}

#[test]
fn test_pattern_spec_example() {
    let layout = pattern(5.0, 4.0, SpacingPattern::Staggered, 2, 2);
    let expected = [(0.0, 0.0), (5.0, 0.0), (2.5, 4.0), (7.5, 4.0)];
    for (k, hole) in layout.holes.iter().enumerate() {
        assert_eq!(hole.index, k + 1);
        assert_eq!((hole.x, hole.y), expected[k]);
    }
}

#[test]
fn test_profiles_partition_the_hole() {
    for selection in every_selection() {
        for h in [1.0, 10.0] {
            for dia in [65.0, 250.0] {
                let d = DesignEngine::derive(&inputs(h, dia, selection)).unwrap();
                let p = HoleProfile::from_design(&d);
                assert!(p.is_contiguous(1e-9), "{:?} h={} d={}: {:?}", selection, h, dia, p);
                let sub = p.interval(IntervalKind::SubDrill).unwrap();
                assert!(sub.overlay);
                assert_eq!(sub.start, h);
                assert_eq!(sub.end, d.total_hole_depth);
            }
        }
    }
}

#[test]
fn test_zero_diameter_signals_degenerate_geometry() {
    // Bypasses boundary validation on purpose
    let d = inputs(10.0, 0.0, FormulaSelection::simplified());
    let err = DesignEngine::derive(&d).unwrap_err();
    assert!(matches!(err, BlastError::DegenerateGeometry { .. }));

    // The kernel rejects the same input at the boundary instead
    let config = BlastConfig::default();
    let err = BlastKernel::compute(&d, &config.powder_factor_ranges, &config).unwrap_err();
    assert_eq!(err.field(), Some("hole_diameter"));
}

#[test]
fn test_adhikari_zero_height_is_degenerate() {
    let selection = FormulaSelection {
        burden: BurdenFormula::Adhikari,
        ..FormulaSelection::simplified()
    };
    let err = DesignEngine::derive(&inputs(0.0, 150.0, selection)).unwrap_err();
    assert_eq!(err, BlastError::degenerate("burden"));
}

#[test]
fn test_powder_factor_matches_hand_calculation() {
    let selection = FormulaSelection {
        burden: BurdenFormula::DickEtAl,
        spacing: SpacingPattern::Staggered,
        stemming: StemmingFormula::Common,
        sub_drill: SubDrillFormula::HoekBray,
    };
    let d = DesignEngine::derive(&inputs(12.0, 200.0, selection)).unwrap();

    // B = 6, S = 6.9, stemming = 4, J = 1.5, depth 13.5, base 3.9, column 5.6
    assert!((d.burden - 6.0).abs() < 1e-9);
    assert!((d.spacing - 6.9).abs() < 1e-9);
    assert!((d.stemming - 4.0).abs() < 1e-9);
    assert!((d.base_charge_length - 3.9).abs() < 1e-9);
    assert!((d.column_charge_length - 5.6).abs() < 1e-9);

    let mass = 9.5 * formulas::linear_charge_density(0.2, 1.2);
    let pf = mass / (6.0 * 6.9 * 12.0);
    assert!((d.powder_factor - pf).abs() < 1e-9, "Expected {}, got {}", pf, d.powder_factor);
}

#[test]
fn test_simplified_is_a_selection_subset() {
    // The quick calculator is the detailed engine with a fixed selection
    let quick = DesignEngine::derive(&inputs(10.0, 150.0, FormulaSelection::simplified())).unwrap();
    let detailed = DesignEngine::derive_at(
        &inputs(10.0, 150.0, FormulaSelection::simplified()),
        RangePosition::Midpoint,
    )
    .unwrap();
    assert_eq!(quick, detailed);
}

#[test]
fn test_extreme_valid_inputs_never_yield_nan() {
    // Each value passes boundary validation; the broken volume does not survive f64
    for (bench_height, hole_diameter) in [(10.0, 1e-200), (1e300, 1e300)] {
        let payload = json!({
            "bench_height": bench_height,
            "hole_diameter": hole_diameter,
            "explosive_density": 1.2,
            "rock_density": 2.6
        })
        .to_string();
        let out = BlastKernel::compute_design(&payload);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["error"]["kind"], "DEGENERATE_GEOMETRY", "{}", out);
        assert_eq!(v["error"]["field"], "rock_volume");
        assert!(v.get("result").is_none());
    }
}
