//! Rating widget configuration.
//!
//! The configuration is caller-supplied and may change between renders. Keys
//! use camelCase on the wire; the short prop names from earlier releases
//! (`edit`, `showCount`, `defaultValue`, `count`, `symbol`, `size`) are still
//! accepted as aliases.

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// Default number of symbols in a row.
pub const DEFAULT_SYMBOL_COUNT: u32 = 5;
/// Default glyph drawn for each symbol.
pub const DEFAULT_SYMBOL_GLYPH: &str = "★";
/// Default symbol size in pixels.
pub const DEFAULT_SYMBOL_SIZE: f32 = 25.0;
/// Default color of inactive symbols.
pub const DEFAULT_INACTIVE_COLOR: &str = "#949494";
/// Default color of active symbols.
pub const DEFAULT_ACTIVE_COLOR: &str = "#ffd700";

/// Configuration of a rating widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RatingConfig {
    /// Number of symbols rendered.
    #[serde(alias = "count")]
    pub symbol_count: u32,
    /// Glyph shown for each symbol.
    #[serde(alias = "symbol")]
    pub symbol_glyph: String,
    /// Symbol size in pixels.
    #[serde(alias = "size")]
    pub symbol_size: f32,
    /// CSS color of active symbols.
    pub active_color: String,
    /// CSS color of inactive symbols.
    pub inactive_color: String,
    /// Whether hover and click change the rating.
    #[serde(alias = "edit")]
    pub editable: bool,
    /// Seed for the committed value.
    #[serde(alias = "defaultValue")]
    pub initial_value: u32,
    /// Whether a numeric readout is shown below the row.
    #[serde(alias = "showCount")]
    pub show_readout: bool,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            symbol_count: DEFAULT_SYMBOL_COUNT,
            symbol_glyph: DEFAULT_SYMBOL_GLYPH.to_string(),
            symbol_size: DEFAULT_SYMBOL_SIZE,
            active_color: DEFAULT_ACTIVE_COLOR.to_string(),
            inactive_color: DEFAULT_INACTIVE_COLOR.to_string(),
            editable: true,
            initial_value: 0,
            show_readout: false,
        }
    }
}

impl RatingConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Set the number of symbols.
    pub fn with_symbol_count(mut self, count: u32) -> Self {
        self.symbol_count = count;
        self
    }

    /// Set the symbol glyph.
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.symbol_glyph = glyph.into();
        self
    }

    /// Set the symbol size in pixels.
    pub fn with_size(mut self, size: f32) -> Self {
        self.symbol_size = size;
        self
    }

    /// Set the active and inactive colors.
    pub fn with_colors(mut self, active: impl Into<String>, inactive: impl Into<String>) -> Self {
        self.active_color = active.into();
        self.inactive_color = inactive.into();
        self
    }

    /// Set whether the rating can be changed.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Set the initial committed value.
    pub fn with_initial_value(mut self, value: u32) -> Self {
        self.initial_value = value;
        self
    }

    /// Set whether the numeric readout is shown.
    pub fn with_readout(mut self, show: bool) -> Self {
        self.show_readout = show;
        self
    }

    /// Clamp a count to `[0, symbol_count]`.
    pub fn clamp_count(&self, count: u32) -> u32 {
        count.min(self.symbol_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RatingConfig::default();
        assert_eq!(config.symbol_count, 5);
        assert_eq!(config.symbol_glyph, "★");
        assert_eq!(config.symbol_size, 25.0);
        assert_eq!(config.inactive_color, "#949494");
        assert_eq!(config.active_color, "#ffd700");
        assert!(config.editable);
        assert!(!config.show_readout);
        assert_eq!(config.initial_value, 0);
    }

    #[test]
    fn test_from_json_partial() {
        let config = RatingConfig::from_json(r#"{"symbolCount": 10, "showReadout": true}"#).unwrap();
        assert_eq!(config.symbol_count, 10);
        assert!(config.show_readout);
        assert_eq!(config.active_color, DEFAULT_ACTIVE_COLOR);
        assert!(config.editable);
    }

    #[test]
    fn test_from_json_aliases() {
        let config = RatingConfig::from_json(
            r#"{"edit": false, "showCount": true, "defaultValue": 3, "count": 7, "symbol": "♥", "size": 40}"#,
        )
        .unwrap();
        assert!(!config.editable);
        assert!(config.show_readout);
        assert_eq!(config.initial_value, 3);
        assert_eq!(config.symbol_count, 7);
        assert_eq!(config.symbol_glyph, "♥");
        assert_eq!(config.symbol_size, 40.0);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(RatingConfig::from_json("{not json").is_err());
        // Negative counts are unrepresentable.
        assert!(RatingConfig::from_json(r#"{"symbolCount": -1}"#).is_err());
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let json = RatingConfig::default().to_json().unwrap();
        assert!(json.contains("\"symbolCount\":5"));
        assert!(json.contains("\"showReadout\":false"));
    }

    #[test]
    fn test_clamp_count() {
        let config = RatingConfig::new().with_symbol_count(3);
        assert_eq!(config.clamp_count(2), 2);
        assert_eq!(config.clamp_count(9), 3);
    }
}
