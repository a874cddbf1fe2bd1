// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Lockview preview engine.

use serde::{Deserialize, Serialize};

/// Parameters controlling how the lower part of an image preview is obscured.
///
/// Ratios are stored exactly as supplied. Out-of-range values are never
/// rejected; they are clamped into `[0, 1]` by the accessor methods at the
/// point of use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurParameters {
    /// Gaussian standard deviation in pixels. Must be positive.
    pub blur_radius: f32,
    /// Fraction of the image height (from the top) left sharp.
    pub visible_ratio: f32,
    /// Fraction of the image height used for the sharp-to-blurred transition.
    pub fade_ratio: f32,
    /// Peak opacity of the white tint laid over the obscured region.
    pub highlight_opacity: f32,
}

impl BlurParameters {
    pub fn new(blur_radius: f32, visible_ratio: f32, fade_ratio: f32, highlight_opacity: f32) -> Self {
        Self {
            blur_radius,
            visible_ratio,
            fade_ratio,
            highlight_opacity,
        }
    }

    /// Visible ratio clamped into `[0, 1]`.
    pub fn clamped_visible_ratio(&self) -> f32 {
        clamp_unit(self.visible_ratio)
    }

    /// Fade ratio clamped into `[0, 1]`.
    pub fn clamped_fade_ratio(&self) -> f32 {
        clamp_unit(self.fade_ratio)
    }

    /// Highlight opacity clamped into `[0, 1]`.
    pub fn clamped_highlight_opacity(&self) -> f32 {
        clamp_unit(self.highlight_opacity)
    }

    /// Whether the blur radius is usable by the blur stage.
    pub fn has_valid_radius(&self) -> bool {
        self.blur_radius.is_finite() && self.blur_radius > 0.0
    }
}

impl Default for BlurParameters {
    fn default() -> Self {
        Self {
            blur_radius: 8.0,
            visible_ratio: 0.3,
            fade_ratio: 0.12,
            highlight_opacity: 0.35,
        }
    }
}

/// Clamp into `[0, 1]`. NaN maps to 0.
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// The fixed replacement text used by the record redactor.
///
/// Every non-empty leaf of a locked record is drawn from this table, so a
/// caller can check any output value with [`Placeholders::contains`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    /// Token for short identifying text and scalar list entries.
    pub token: String,
    /// Sentence substituted for long narrative text.
    pub locked_text: String,
    /// Generic name for companies, schools, issuers.
    pub hidden_organization: String,
    /// Generic name for places.
    pub hidden_location: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub social: String,
    pub url: String,
}

impl Placeholders {
    /// All non-empty replacement values in the table.
    pub fn values(&self) -> [&str; 9] {
        [
            &self.token,
            &self.locked_text,
            &self.hidden_organization,
            &self.hidden_location,
            &self.email,
            &self.phone,
            &self.address,
            &self.social,
            &self.url,
        ]
    }

    /// Whether `value` is one of the fixed replacement values.
    pub fn contains(&self, value: &str) -> bool {
        self.values().contains(&value)
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            token: "[Locked Preview]".into(),
            locked_text: "This section is locked. Unlock the full resume to read it.".into(),
            hidden_organization: "Hidden Organization".into(),
            hidden_location: "Hidden Location".into(),
            email: "hidden@example.com".into(),
            phone: "+00 000 000 0000".into(),
            address: "Hidden City, Hidden Country".into(),
            social: "https://example.com/hidden-profile".into(),
            url: "https://example.com".into(),
        }
    }
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Ratios above 1 and below 0 are pulled back into range.
    #[test]
    fn ratios_clamp_into_unit_interval() {
        let params = BlurParameters::new(4.0, 1.5, -1.0, 2.0);
        assert_eq!(params.clamped_visible_ratio(), 1.0);
        assert_eq!(params.clamped_fade_ratio(), 0.0);
        assert_eq!(params.clamped_highlight_opacity(), 1.0);
    }

    /// NaN ratios behave like zero rather than poisoning the layout maths.
    #[test]
    fn nan_ratio_clamps_to_zero() {
        let params = BlurParameters::new(4.0, f32::NAN, 0.1, 0.0);
        assert_eq!(params.clamped_visible_ratio(), 0.0);
    }

    #[test]
    fn radius_validity() {
        assert!(BlurParameters::default().has_valid_radius());
        assert!(!BlurParameters::new(0.0, 0.5, 0.1, 0.0).has_valid_radius());
        assert!(!BlurParameters::new(-3.0, 0.5, 0.1, 0.0).has_valid_radius());
        assert!(!BlurParameters::new(f32::INFINITY, 0.5, 0.1, 0.0).has_valid_radius());
    }

    /// Partial JSON fills the remaining fields from the defaults.
    #[test]
    fn blur_parameters_deserialize_with_defaults() {
        let params: BlurParameters = serde_json::from_str(r#"{"blur_radius": 12.0}"#).unwrap();
        assert_eq!(params.blur_radius, 12.0);
        assert_eq!(params.visible_ratio, BlurParameters::default().visible_ratio);
    }

    #[test]
    fn placeholder_membership() {
        let placeholders = Placeholders::default();
        assert!(placeholders.contains("[Locked Preview]"));
        assert!(placeholders.contains("Hidden Organization"));
        assert!(!placeholders.contains("Acme"));
        assert!(!placeholders.contains(""));
    }
}
