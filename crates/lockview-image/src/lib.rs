// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// lockview-image — Locked image previews.
//
// Produces an image that is sharp for a leading band, blurred and washed out
// below it, with a smooth transition between. Each stage of the pipeline
// (band layout, blur, gradient mask, composite, tint) is a pure
// buffer-to-buffer function; the redactor wires them together and falls back
// to the untouched source on any failure.

pub mod codec;
pub mod preview;

// Re-export the primary types so callers can use `lockview_image::ImageRedactor` etc.
pub use codec::EncodedImage;
pub use preview::layout::BandLayout;
pub use preview::mask::GradientMask;
pub use preview::redactor::{ImageRedactor, redact};
