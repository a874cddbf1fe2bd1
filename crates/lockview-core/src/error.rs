// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Lockview.
//
// None of these escape the public redactor entry points: the image pipeline
// falls back to the untouched source and the record redactor is total. They
// exist so the internal stages can propagate with `?` and the fallback can log
// what went wrong.

use thiserror::Error;

/// Top-level error type for all Lockview operations.
#[derive(Debug, Error)]
pub enum LockviewError {
    // -- Image errors --
    #[error("image decoding failed: {0}")]
    ImageDecode(String),

    #[error("image encoding failed: {0}")]
    ImageEncode(String),

    #[error("blur radius must be positive and finite, got {0}")]
    InvalidBlurRadius(f32),

    #[error("image has zero width or height")]
    EmptyImage,

    #[error("malformed data URL: {0}")]
    DataUrl(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LockviewError>;
