// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::design_engine::DesignResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    Stemming,
    ColumnCharge,
    BaseCharge,
    SubDrill,
}

impl IntervalKind {
    pub fn label(&self) -> &'static str {
        match self {
            IntervalKind::Stemming => "Stemming",
            IntervalKind::ColumnCharge => "Column Charge",
            IntervalKind::BaseCharge => "Base Charge",
            IntervalKind::SubDrill => "Sub-drill",
        }
    }
}

/// Depth interval measured downward from the collar (m).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthInterval {
    pub kind: IntervalKind,
    pub start: f64,
    pub end: f64,
    /// Annotation drawn over the charge intervals, not part of the partition.
    pub overlay: bool,
}

impl DepthInterval {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Depth at which to anchor the interval's label.
    pub fn midpoint(&self) -> f64 {
        self.start + self.length() / 2.0
    }
}

/// Vertical section of one hole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoleProfile {
    pub bench_height: f64,
    pub total_depth: f64,
    pub intervals: Vec<DepthInterval>,
}

/// Segments the hole top-down: stemming, column charge (when present), then the base
/// charge occupying the bottom `base_charge_length` of the hole. The sub-drill
/// `[bench_height, total_depth]` is emitted last as an overlay and overlaps the charge.
pub fn profile(
    bench_height: f64,
    sub_drill: f64,
    stemming: f64,
    base_charge_length: f64,
    column_charge_length: f64,
) -> HoleProfile {
    let total_depth = bench_height + sub_drill;
    let mut intervals = Vec::with_capacity(4);

    let mut push = |kind, start: f64, end: f64, overlay| {
        if end > start {
            intervals.push(DepthInterval {
                kind,
                start,
                end,
                overlay,
            });
        }
    };

    push(IntervalKind::Stemming, 0.0, stemming, false);
    if column_charge_length > 0.0 {
        push(
            IntervalKind::ColumnCharge,
            stemming,
            stemming + column_charge_length,
            false,
        );
    }
    push(
        IntervalKind::BaseCharge,
        total_depth - base_charge_length,
        total_depth,
        false,
    );
    push(IntervalKind::SubDrill, bench_height, total_depth, true);

    HoleProfile {
        bench_height,
        total_depth,
        intervals,
    }
}

impl HoleProfile {
    pub fn from_design(design: &DesignResult) -> Self {
        profile(
            design.bench_height,
            design.sub_drill,
            design.stemming,
            design.base_charge_length,
            design.column_charge_length,
        )
    }

    /// The physical segments, top-down.
    pub fn partition(&self) -> impl Iterator<Item = &DepthInterval> {
        self.intervals.iter().filter(|i| !i.overlay)
    }

    pub fn overlays(&self) -> impl Iterator<Item = &DepthInterval> {
        self.intervals.iter().filter(|i| i.overlay)
    }

    pub fn interval(&self, kind: IntervalKind) -> Option<&DepthInterval> {
        self.intervals.iter().find(|i| i.kind == kind)
    }

    /// Whether the non-overlay intervals tile `[0, total_depth]` without gaps or
    /// overlaps, within `tolerance` metres.
    pub fn is_contiguous(&self, tolerance: f64) -> bool {
        let mut cursor = 0.0;
        for interval in self.partition() {
            if (interval.start - cursor).abs() > tolerance {
                return false;
            }
            cursor = interval.end;
        }
        (cursor - self.total_depth).abs() <= tolerance
    }
}
