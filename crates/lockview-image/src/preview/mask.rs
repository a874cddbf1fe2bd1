// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Gradient mask — per-row opacity of the blurred layer.

use super::layout::BandLayout;

/// Opacity of the blurred layer at the nominal blur boundary.
///
/// The ramp rises to this value by `blur_start_y` and then continues to 1 at
/// the bottom edge, so most of the visible change happens early.
pub const TRANSITION_OPACITY: f32 = 0.4;

/// Single-channel opacity ramp over image rows.
///
/// Zero above `start_y`, then monotonically non-decreasing towards 1 at the
/// bottom edge. Rebuilt for every call; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientMask {
    start_y: u32,
    alphas: Vec<f32>,
}

impl GradientMask {
    /// Build the mask for a layout: one value per row in
    /// `[gradient_start_y, height)`, sampled at row centres.
    pub fn build(layout: &BandLayout) -> Self {
        let stop = layout.transition_stop();
        let alphas = (layout.gradient_start_y..layout.height)
            .map(|y| ramp_value(layout.ramp_position(y), stop))
            .collect();
        Self {
            start_y: layout.gradient_start_y,
            alphas,
        }
    }

    /// First row with a (possibly) non-zero value.
    pub fn start_y(&self) -> u32 {
        self.start_y
    }

    /// Number of rows covered by the ramp.
    pub fn len(&self) -> usize {
        self.alphas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphas.is_empty()
    }

    /// Opacity at row `y`. Zero above the ramp; rows past the end report the
    /// final value.
    pub fn at(&self, y: u32) -> f32 {
        if y < self.start_y {
            return 0.0;
        }
        let index = (y - self.start_y) as usize;
        match self.alphas.get(index) {
            Some(alpha) => *alpha,
            None => self.alphas.last().copied().unwrap_or(0.0),
        }
    }
}

/// Three-stop linear gradient: 0 at `t = 0`, [`TRANSITION_OPACITY`] at
/// `t = stop`, 1 at `t = 1`.
pub fn ramp_value(t: f32, stop: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let stop = stop.clamp(0.0, 1.0);
    if t <= stop {
        if stop <= 0.0 {
            return TRANSITION_OPACITY;
        }
        TRANSITION_OPACITY * t / stop
    } else {
        // t > stop implies stop < 1.
        TRANSITION_OPACITY + (1.0 - TRANSITION_OPACITY) * (t - stop) / (1.0 - stop)
    }
}

// -- Tests --------------------------------------------------------------------
