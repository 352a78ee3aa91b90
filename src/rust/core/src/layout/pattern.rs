// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::science::SpacingPattern;
use serde::{Deserialize, Serialize};

/// One simulated hole in plan view. `index` is 1-based, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HolePosition {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub x: f64, // m, along the face (spacing direction)
    pub y: f64, // m, away from the face (burden direction)
}

/// Viewport that frames the whole pattern with half a hole of margin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatternLayout {
    pub pattern: SpacingPattern,
    pub spacing: f64,
    pub burden: f64,
    pub rows: usize,
    pub cols: usize,
    pub holes: Vec<HolePosition>,
}

/// Plan-view drill pattern on a `rows × cols` grid.
///
/// Hole (i, j) sits at `x = j·spacing + offset(i)`, `y = i·burden`, where odd rows
/// of a staggered pattern shift by half a spacing. The grid is allocated up front;
/// `BlastKernel` caps `rows × cols` before calling this.
pub fn pattern(
    spacing: f64,
    burden: f64,
    pattern_type: SpacingPattern,
    rows: usize,
    cols: usize,
) -> PatternLayout {
    let mut holes = Vec::with_capacity(rows * cols);

    for i in 0..rows {
        let offset = if pattern_type.is_staggered() && i % 2 == 1 {
            spacing / 2.0
        } else {
            0.0
        };
        for j in 0..cols {
            holes.push(HolePosition {
                index: i * cols + j + 1,
                row: i,
                col: j,
                x: j as f64 * spacing + offset,
                y: i as f64 * burden,
            });
        }
    }

    PatternLayout {
        pattern: pattern_type,
        spacing,
        burden,
        rows,
        cols,
        holes,
    }
}

impl PatternLayout {
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Hole by its 1-based number.
    pub fn hole(&self, index: usize) -> Option<&HolePosition> {
        index.checked_sub(1).and_then(|i| self.holes.get(i))
    }

    pub fn bounds(&self) -> PlotBounds {
        let s = self.spacing;
        let b = self.burden;
        let cols = self.cols.max(1) as f64;
        let mut x_max = (cols - 1.0) * s + s / 2.0;
        if self.pattern.is_staggered() {
            x_max += s / 2.0;
        }

        PlotBounds {
            x_min: -s / 2.0,
            x_max,
            y_min: -b / 2.0,
            y_max: self.rows as f64 * b,
        }
    }
}
