// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vertical band geometry: where the sharp region ends, where the transition
// starts, and where the fully blurred region begins.

use lockview_core::BlurParameters;

/// Row boundaries for one preview, derived from the image height and the
/// (clamped) blur ratios.
///
/// Invariant: `gradient_start_y <= blur_start_y <= height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLayout {
    /// Image height in rows.
    pub height: u32,
    /// First row of the transition band. Rows above it are never touched.
    pub gradient_start_y: u32,
    /// First row of the fully blurred band.
    pub blur_start_y: u32,
}

impl BandLayout {
    /// Compute the band rows for an image of `height` rows.
    ///
    /// The transition band is at least one row tall, and is clipped at the
    /// top of the image.
    pub fn compute(height: u32, params: &BlurParameters) -> Self {
        let rows = f64::from(height);
        let blur_start_y =
            ((rows * f64::from(params.clamped_visible_ratio())).round() as u32).min(height);
        let fade_height = ((rows * f64::from(params.clamped_fade_ratio())).round() as u32).max(1);
        let gradient_start_y = blur_start_y.saturating_sub(fade_height);

        Self {
            height,
            gradient_start_y,
            blur_start_y,
        }
    }

    /// Whether any row is blurred at all. A layout whose blur band starts at
    /// or past the bottom edge leaves the image untouched.
    pub fn has_obscured_region(&self) -> bool {
        self.blur_start_y < self.height
    }

    /// Number of rows from the start of the transition to the bottom edge.
    pub fn ramp_span(&self) -> u32 {
        self.height - self.gradient_start_y
    }

    /// Relative position of `blur_start_y` within `[gradient_start_y, height)`.
    ///
    /// Treated as 1 when the blur band starts at or past the bottom edge.
    pub fn transition_stop(&self) -> f32 {
        if self.blur_start_y >= self.height || self.ramp_span() == 0 {
            return 1.0;
        }
        (self.blur_start_y - self.gradient_start_y) as f32 / self.ramp_span() as f32
    }

    /// Relative position of the centre of row `y` within the ramp, in `[0, 1]`.
    /// Rows above `gradient_start_y` report 0.
    pub fn ramp_position(&self, y: u32) -> f32 {
        if y < self.gradient_start_y || self.ramp_span() == 0 {
            return 0.0;
        }
        let offset = (y - self.gradient_start_y) as f32 + 0.5;
        (offset / self.ramp_span() as f32).clamp(0.0, 1.0)
    }
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn params(visible: f32, fade: f32) -> BlurParameters {
        BlurParameters::new(6.0, visible, fade, 0.0)
    }

    #[test]
    fn typical_layout() {
        let layout = BandLayout::compute(1000, &params(0.3, 0.1));
        assert_eq!(layout.blur_start_y, 300);
        assert_eq!(layout.gradient_start_y, 200);
        assert!(layout.has_obscured_region());
        assert!((layout.transition_stop() - 0.125).abs() < 1e-6);
    }

    /// A zero fade ratio still yields a one-row transition band.
    #[test]
    fn fade_band_is_at_least_one_row() {
        let layout = BandLayout::compute(100, &params(0.5, 0.0));
        assert_eq!(layout.blur_start_y, 50);
        assert_eq!(layout.gradient_start_y, 49);
    }

    /// With nothing visible the fade band is clipped at row 0.
    #[test]
    fn zero_visible_ratio_blurs_from_the_top() {
        let layout = BandLayout::compute(100, &params(0.0, 0.2));
        assert_eq!(layout.blur_start_y, 0);
        assert_eq!(layout.gradient_start_y, 0);
        assert_eq!(layout.transition_stop(), 0.0);
    }

    #[test]
    fn fully_visible_has_no_obscured_region() {
        let layout = BandLayout::compute(100, &params(1.0, 0.1));
        assert_eq!(layout.blur_start_y, 100);
        assert!(!layout.has_obscured_region());
        assert_eq!(layout.transition_stop(), 1.0);
    }

    /// Out-of-range ratios produce the same layout as their clamped values.
    #[test]
    fn out_of_range_ratios_match_clamped() {
        assert_eq!(
            BandLayout::compute(240, &params(1.5, 0.1)),
            BandLayout::compute(240, &params(1.0, 0.1))
        );
        assert_eq!(
            BandLayout::compute(240, &params(0.4, -1.0)),
            BandLayout::compute(240, &params(0.4, 0.0))
        );
    }

    #[test]
    fn ramp_position_is_zero_above_and_bounded_below() {
        let layout = BandLayout::compute(100, &params(0.5, 0.1));
        assert_eq!(layout.ramp_position(10), 0.0);
        assert!(layout.ramp_position(40) > 0.0);
        assert!(layout.ramp_position(99) <= 1.0);
    }
}
