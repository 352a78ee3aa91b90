// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Layout Generator: turns the scalar design into coordinates and depth intervals
// for an external plotting front-end. Nothing here draws.

pub mod pattern;
pub mod profile;

pub use pattern::{pattern, HolePosition, PatternLayout, PlotBounds};
pub use profile::{profile, DepthInterval, HoleProfile, IntervalKind};
