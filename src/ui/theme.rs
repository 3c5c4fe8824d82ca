// RustPixel Range UI - Theme System
// copyright zipxing@hotmail.com 2022～2025

//! Visual configuration for the range slider.
//!
//! Themes are plain serde structs so they can live next to other game
//! config as JSON. Missing fields fall back to the built-in defaults.
//!
//! ```json
//! { "tint_color": { "r": 0.2, "g": 0.6, "b": 1.0 }, "indicator_offset": -40 }
//! ```

use crate::render::Color;
use crate::ui::{UIError, UIResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderTheme {
    /// Track background tint
    pub background_color: Color,
    /// Thumb tint, `None` draws with the untinted white texture
    pub tint_color: Option<Color>,
    pub indicator_text_color: Color,
    pub indicator_shadow_color: Color,
    /// Distance of the indicator from the slider, negative places it on the left
    pub indicator_offset: i32,
    /// Width of the left and right thumb caps, in local units
    pub cap_width: f32,
    /// Thumbs never get narrower than this, in pixels
    pub min_thumb_width: f32,
}

impl Default for SliderTheme {
    fn default() -> Self {
        Self {
            background_color: Color::rgba(0.5, 0.5, 0.5, 0.3),
            tint_color: Some(Color::YELLOW),
            indicator_text_color: Color::WHITE,
            indicator_shadow_color: Color::CLEAR,
            indicator_offset: 15,
            cap_width: 1.0,
            min_thumb_width: 10.0,
        }
    }
}

impl SliderTheme {
    /// Load a theme from a JSON file
    pub fn load(path: &str) -> UIResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| UIError::ThemeError(format!("{}: {}", path, e)))?;
        Self::from_json(&content)
    }

    /// Parse a theme from a JSON string
    pub fn from_json(json: &str) -> UIResult<Self> {
        serde_json::from_str(json).map_err(|e| UIError::ThemeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let theme = SliderTheme::from_json(r#"{ "indicator_offset": -40 }"#).unwrap();
        assert_eq!(theme.indicator_offset, -40);
        assert_eq!(theme.min_thumb_width, 10.0);
        assert_eq!(theme.tint_color, Some(Color::rgb(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_null_tint() {
        let theme = SliderTheme::from_json(r#"{ "tint_color": null }"#).unwrap();
        assert_eq!(theme.tint_color, None);
    }

    #[test]
    fn test_bad_json() {
        let err = SliderTheme::from_json("{ not json").unwrap_err();
        assert!(matches!(err, UIError::ThemeError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SliderTheme::load("/nonexistent/slider_theme.json").unwrap_err();
        assert!(matches!(err, UIError::ThemeError(_)));
    }
}
