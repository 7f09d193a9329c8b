//! Preview configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Outline shown while the document is empty.
pub const DEFAULT_PLACEHOLDER: &str =
    "# Welcome to Markmap\n## Start editing your markdown\n### The mind map will update automatically";

/// User-facing preview settings.
///
/// Every field has a default, so a settings file only needs the keys it
/// overrides.
///
/// ```rust
/// use markmap_preview::PreviewConfig;
///
/// let config = PreviewConfig::from_json(r#"{ "markmap": { "maxWidth": 480 } }"#).unwrap();
/// assert_eq!(config.markmap.max_width, 480);
/// assert_eq!(config.markmap.duration, 500);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewConfig {
    pub markmap: MarkmapOptions,
    /// Markdown rendered when the document is empty or whitespace only.
    pub placeholder: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            markmap: MarkmapOptions::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl PreviewConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Options passed verbatim to `Markmap.create` in the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkmapOptions {
    /// Depth below which branches inherit their parent's color.
    pub color_freeze_level: u32,
    /// Transition duration in milliseconds.
    pub duration: u32,
    /// Maximum node width in pixels.
    pub max_width: u32,
    pub spacing_vertical: u32,
    pub spacing_horizontal: u32,
    pub auto_fit: bool,
    pub pan: bool,
    pub zoom: bool,
}

impl Default for MarkmapOptions {
    fn default() -> Self {
        Self {
            color_freeze_level: 6,
            duration: 500,
            max_width: 300,
            spacing_vertical: 8,
            spacing_horizontal: 80,
            auto_fit: true,
            pan: true,
            zoom: true,
        }
    }
}
