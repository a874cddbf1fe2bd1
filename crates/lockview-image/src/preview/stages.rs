// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Compositing stages — blur copy, banded base, masked composite, white tint.
//
// Every stage borrows its inputs and returns a fresh `RgbaImage`; nothing is
// mutated in place, so the stages can be tested and reordered independently.

use image::{ImageBuffer, Rgba, RgbaImage};
use imageproc::filter::gaussian_blur_f32;
use lockview_core::error::{LockviewError, Result};
use tracing::debug;

use super::layout::BandLayout;
use super::mask::GradientMask;

/// The tint starts this much below its peak opacity at the top of the ramp.
pub const TINT_SPREAD: f32 = 0.2;

/// Fully blurred copy of `source` using a Gaussian of standard deviation
/// `radius`.
///
/// The radius is capped at the larger image dimension; anything beyond that
/// is already close to flat and would only grow the kernel.
pub fn blur_copy(source: &RgbaImage, radius: f32) -> Result<RgbaImage> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(LockviewError::InvalidBlurRadius(radius));
    }
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(LockviewError::EmptyImage);
    }
    let sigma = radius.min(width.max(height) as f32);
    debug!(sigma, "Blurring source copy");
    Ok(gaussian_blur_f32(source, sigma))
}

/// Original rows above `blur_start_y`, blurred rows from there down.
pub fn banded_base(original: &RgbaImage, blurred: &RgbaImage, blur_start_y: u32) -> RgbaImage {
    ImageBuffer::from_fn(original.width(), original.height(), |x, y| {
        if y < blur_start_y {
            *original.get_pixel(x, y)
        } else {
            *blurred.get_pixel(x, y)
        }
    })
}

/// Lay `blurred` over `base`, weighted per row by `mask`.
///
/// Rows above the mask start are copied from `base` unchanged.
pub fn composite(base: &RgbaImage, blurred: &RgbaImage, mask: &GradientMask) -> RgbaImage {
    ImageBuffer::from_fn(base.width(), base.height(), |x, y| {
        let under = base.get_pixel(x, y);
        if y < mask.start_y() {
            return *under;
        }
        let over = blurred.get_pixel(x, y);
        blend(under, over, mask.at(y))
    })
}

/// Wash out the ramp rows with white, rising from
/// `highlight_opacity - TINT_SPREAD` (floored at 0) at `gradient_start_y` to
/// `highlight_opacity` at the bottom edge.
///
/// A non-positive opacity returns an unmodified copy.
pub fn tint(image: &RgbaImage, layout: &BandLayout, highlight_opacity: f32) -> RgbaImage {
    if highlight_opacity <= 0.0 {
        return image.clone();
    }
    let peak = highlight_opacity.min(1.0);
    let floor = (peak - TINT_SPREAD).max(0.0);
    let white = Rgba([255u8, 255, 255, 255]);

    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        if y < layout.gradient_start_y {
            return *pixel;
        }
        let alpha = floor + (peak - floor) * layout.ramp_position(y);
        blend(pixel, &white, alpha)
    })
}

/// Straight-alpha interpolation of every channel from `under` towards `over`.
///
/// Identical inputs come back unchanged for any `alpha`.
fn blend(under: &Rgba<u8>, over: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |u: u8, o: u8| -> u8 {
        let u = f32::from(u);
        (u + (f32::from(o) - u) * alpha).round().clamp(0.0, 255.0) as u8
    };
    let Rgba([ur, ug, ub, ua]) = *under;
    let Rgba([or, og, ob, oa]) = *over;
    Rgba([mix(ur, or), mix(ug, og), mix(ub, ob), mix(ua, oa)])
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use lockview_core::BlurParameters;

    fn checkerboard(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            if (x / 2 + y / 2) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
    }

    fn rows_equal(a: &RgbaImage, b: &RgbaImage, rows: std::ops::Range<u32>) -> bool {
        rows.into_iter()
            .all(|y| (0..a.width()).all(|x| a.get_pixel(x, y) == b.get_pixel(x, y)))
    }

    #[test]
    fn blur_copy_rejects_bad_radius() {
        let img = checkerboard(8, 8);
        assert!(matches!(blur_copy(&img, 0.0), Err(LockviewError::InvalidBlurRadius(_))));
        assert!(matches!(blur_copy(&img, -2.0), Err(LockviewError::InvalidBlurRadius(_))));
        assert!(matches!(
            blur_copy(&img, f32::NAN),
            Err(LockviewError::InvalidBlurRadius(_))
        ));
    }

    /// Blurring a checkerboard pulls its pixels towards mid grey.
    #[test]
    fn blur_copy_smooths_detail() {
        let img = checkerboard(32, 32);
        let blurred = blur_copy(&img, 4.0).unwrap();
        assert_eq!(blurred.dimensions(), (32, 32));
        let centre = blurred.get_pixel(16, 16).0[0];
        assert!((60..=195).contains(&centre), "centre = {centre}");
    }

    /// A huge radius still finishes and produces a near-flat image.
    #[test]
    fn blur_copy_with_huge_radius_is_near_flat() {
        let img = checkerboard(16, 16);
        let blurred = blur_copy(&img, 1.0e9).unwrap();
        let a = i32::from(blurred.get_pixel(2, 2).0[0]);
        let b = i32::from(blurred.get_pixel(13, 13).0[0]);
        assert!((a - b).abs() <= 40, "{a} vs {b}");
    }

    #[test]
    fn banded_base_switches_at_blur_start() {
        let original = RgbaImage::from_pixel(4, 10, Rgba([10, 10, 10, 255]));
        let blurred = RgbaImage::from_pixel(4, 10, Rgba([200, 200, 200, 255]));
        let base = banded_base(&original, &blurred, 6);
        assert_eq!(base.get_pixel(0, 5), &Rgba([10, 10, 10, 255]));
        assert_eq!(base.get_pixel(0, 6), &Rgba([200, 200, 200, 255]));
    }

    /// Rows above the ramp are copied and rows where base and overlay agree stay put.
    #[test]
    fn composite_leaves_rows_above_ramp_untouched() {
        let original = checkerboard(20, 40);
        let blurred = blur_copy(&original, 3.0).unwrap();
        let layout = BandLayout::compute(40, &BlurParameters::new(3.0, 0.5, 0.25, 0.0));
        let base = banded_base(&original, &blurred, layout.blur_start_y);
        let out = composite(&base, &blurred, &GradientMask::build(&layout));

        assert!(rows_equal(&out, &original, 0..layout.gradient_start_y));
        assert!(rows_equal(&out, &blurred, layout.blur_start_y..40));
        assert!(!rows_equal(&out, &original, layout.gradient_start_y..layout.blur_start_y));
    }

    #[test]
    fn tint_lightens_rows_and_rises_downwards() {
        let img = RgbaImage::from_pixel(4, 100, Rgba([100, 100, 100, 255]));
        let layout = BandLayout::compute(100, &BlurParameters::new(3.0, 0.5, 0.1, 0.5));
        let out = tint(&img, &layout, 0.5);

        assert_eq!(out.get_pixel(0, 39), &Rgba([100, 100, 100, 255]));
        let first = out.get_pixel(0, layout.gradient_start_y).0[0];
        let last = out.get_pixel(0, 99).0[0];
        assert!(first > 100);
        assert!(last > first);
        // 100 + 155 * ~0.5
        assert!((175..=178).contains(&last), "last = {last}");
    }

    #[test]
    fn zero_tint_is_identity() {
        let img = checkerboard(10, 10);
        let layout = BandLayout::compute(10, &BlurParameters::default());
        assert_eq!(tint(&img, &layout, 0.0), img);
    }

    #[test]
    fn blend_identical_pixels_is_exact() {
        let p = Rgba([17, 99, 240, 128]);
        for alpha in [0.0, 0.13, 0.4, 0.77, 1.0] {
            assert_eq!(blend(&p, &p, alpha), p);
        }
    }
}
