// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image codec helpers — decode to RGBA, encode to PNG, and data URL framing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};
use lockview_core::error::{LockviewError, Result};

/// MIME type reported when the source format cannot be identified.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// An encoded image together with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// Wrap encoded bytes, sniffing the MIME type from the content.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            mime: sniff_mime(&bytes).to_string(),
            bytes,
        }
    }

    /// Wrap PNG bytes produced by [`encode_png`].
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            mime: ImageFormat::Png.to_mime_type().to_string(),
            bytes,
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URL.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let rest = url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| LockviewError::DataUrl("missing `data:` scheme".into()))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| LockviewError::DataUrl("missing `,` separator".into()))?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or_else(|| LockviewError::DataUrl("only base64 payloads are supported".into()))?;

        let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|err| LockviewError::DataUrl(format!("invalid base64 payload: {}", err)))?;

        let mime = if mime.is_empty() {
            sniff_mime(&bytes).to_string()
        } else {
            mime.to_string()
        };
        Ok(Self { mime, bytes })
    }

    /// Render as a base64 data URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Decode any format the `image` crate understands into an RGBA buffer.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|err| LockviewError::ImageDecode(format!("failed to decode image: {}", err)))?;
    if img.width() == 0 || img.height() == 0 {
        return Err(LockviewError::EmptyImage);
    }
    Ok(img.to_rgba8())
}

/// Encode an RGBA buffer as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| LockviewError::ImageEncode(format!("PNG encoding failed: {}", err)))?;
    Ok(buffer)
}

/// Best-effort MIME type of encoded image bytes.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME)
}

// -- Tests --------------------------------------------------------------------
