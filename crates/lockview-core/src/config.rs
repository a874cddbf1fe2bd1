// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Engine configuration and its JSON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LockviewError, Result};
use crate::types::{BlurParameters, Placeholders};

/// Settings shared by both redactors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockviewConfig {
    /// How image previews are blurred and tinted.
    pub blur: BlurParameters,
    /// Replacement text used for locked records.
    pub placeholders: Placeholders,
}

impl LockviewConfig {
    /// Read a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Read a config from `path`, falling back to defaults when the file is
    /// absent or unusable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "ignoring unusable config file");
            Self::default()
        })
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Reject settings the image pipeline cannot run with at all.
    ///
    /// Ratios are deliberately not checked here: they are clamped at use.
    pub fn validate(&self) -> Result<()> {
        if !self.blur.has_valid_radius() {
            return Err(LockviewError::Config(format!(
                "blur_radius must be a positive number, got {}",
                self.blur.blur_radius
            )));
        }
        if self.placeholders.token.is_empty() {
            return Err(LockviewError::Config("placeholder token must not be empty".into()));
        }
        Ok(())
    }
}

// -- Tests --------------------------------------------------------------------
