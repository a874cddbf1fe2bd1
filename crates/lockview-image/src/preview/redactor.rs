// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image redactor — chains the preview stages and never fails towards the
// caller. Any decode, blur, or encode problem is logged and the original
// source is handed back unchanged.

use image::RgbaImage;
use lockview_core::BlurParameters;
use lockview_core::error::{LockviewError, Result};
use tracing::{debug, info, instrument, warn};

use super::layout::BandLayout;
use super::mask::GradientMask;
use super::stages::{banded_base, blur_copy, composite, tint};
use crate::codec::{EncodedImage, decode_rgba, encode_png};

/// Builds locked image previews with a fixed set of blur parameters.
///
/// Stateless apart from the parameters; one redactor can serve any number of
/// concurrent calls.
///
/// ```ignore
/// let redactor = ImageRedactor::new(BlurParameters::default());
/// let preview = redactor.redact_bytes(&jpeg_bytes);
/// let url = preview.to_data_url();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImageRedactor {
    params: BlurParameters,
}

impl ImageRedactor {
    pub fn new(params: BlurParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BlurParameters {
        &self.params
    }

    // -- Fail-soft entry points -----------------------------------------------

    /// Redact encoded image bytes. Returns a PNG on success, or the source
    /// bytes untouched on any failure.
    #[instrument(skip_all, fields(data_len = source.len()))]
    pub fn redact_bytes(&self, source: &[u8]) -> EncodedImage {
        match self.try_redact(source) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "preview redaction failed; returning source unchanged");
                EncodedImage::from_bytes(source.to_vec())
            }
        }
    }

    /// Redact an already wrapped image, keeping its MIME type on fallback.
    pub fn redact_encoded(&self, source: &EncodedImage) -> EncodedImage {
        match self.try_redact(&source.bytes) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, mime = %source.mime, "preview redaction failed; returning source unchanged");
                source.clone()
            }
        }
    }

    /// Redact a `data:` URL, returning a PNG data URL, or `url` itself if it
    /// cannot be parsed or processed.
    #[instrument(skip_all, fields(url_len = url.len()))]
    pub fn redact_data_url(&self, url: &str) -> String {
        let source = match EncodedImage::from_data_url(url) {
            Ok(source) => source,
            Err(err) => {
                warn!(error = %err, "unreadable data URL; returning it unchanged");
                return url.to_string();
            }
        };
        match self.try_redact(&source.bytes) {
            Ok(encoded) => encoded.to_data_url(),
            Err(err) => {
                warn!(error = %err, "preview redaction failed; returning source unchanged");
                url.to_string()
            }
        }
    }

    /// Run the redaction on the blocking thread pool.
    ///
    /// Resolves exactly once: with the preview, or with `source` if the
    /// pipeline or the blocking task itself fails.
    pub async fn redact_async(&self, source: EncodedImage) -> EncodedImage {
        let redactor = self.clone();
        let fallback = source.clone();
        match tokio::task::spawn_blocking(move || redactor.redact_encoded(&source)).await {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "preview task did not complete; returning source unchanged");
                fallback
            }
        }
    }

    // -- Fallible pipeline ----------------------------------------------------

    /// Decode, obscure, and re-encode as PNG.
    pub fn try_redact(&self, source: &[u8]) -> Result<EncodedImage> {
        let original = decode_rgba(source)?;
        let redacted = self.redact_pixels(&original)?;
        let png = encode_png(&redacted)?;
        debug!(png_len = png.len(), "Preview encoded");
        Ok(EncodedImage::png(png))
    }

    /// The pixel pipeline on its own: band layout, blur copy, banded base,
    /// masked composite, tint.
    #[instrument(skip_all, fields(width = original.width(), height = original.height()))]
    pub fn redact_pixels(&self, original: &RgbaImage) -> Result<RgbaImage> {
        let (width, height) = original.dimensions();
        if width == 0 || height == 0 {
            return Err(LockviewError::EmptyImage);
        }

        let layout = BandLayout::compute(height, &self.params);
        info!(
            gradient_start_y = layout.gradient_start_y,
            blur_start_y = layout.blur_start_y,
            "Building locked preview"
        );
        if !layout.has_obscured_region() {
            debug!("Nothing below the visible band; leaving pixels untouched");
            return Ok(original.clone());
        }

        let blurred = blur_copy(original, self.params.blur_radius)?;
        let base = banded_base(original, &blurred, layout.blur_start_y);
        let mask = GradientMask::build(&layout);
        let composited = composite(&base, &blurred, &mask);
        Ok(tint(
            &composited,
            &layout,
            self.params.clamped_highlight_opacity(),
        ))
    }
}

/// One-shot form of [`ImageRedactor::redact_bytes`].
pub fn redact(source: &[u8], params: &BlurParameters) -> EncodedImage {
    ImageRedactor::new(*params).redact_bytes(source)
}

// -- Tests --------------------------------------------------------------------
