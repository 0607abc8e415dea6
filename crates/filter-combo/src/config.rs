//! Construction-time configuration for the filterable combo box.
//!
//! Everything here is plain data: it can be built in code, or loaded from
//! TOML or JSON alongside the rest of an application's settings. Behaviour
//! that cannot be expressed as data (a custom filter predicate, a typed
//! display accessor, an explicit full-item source) is supplied through the
//! builder methods on [`FilterComboBox`](crate::FilterComboBox).
//!
//! # Example
//!
//! ```
//! use filter_combo::config::FilterComboConfig;
//!
//! let config = FilterComboConfig::from_toml_str(r#"
//!     placeholder = "Pick a fruit"
//!     max_dropdown_height = 160.0
//!     display_member_path = "name"
//! "#).unwrap();
//!
//! assert_eq!(config.placeholder, "Pick a fruit");
//! assert_eq!(config.item_height, 24.0);
//! ```

use serde::{Deserialize, Serialize};

use filter_combo_core::logging::targets;

use crate::error::{ConfigError, Result};
use crate::events::{Key, KeyChord, KeyboardModifiers};
use crate::filter::CaseSensitivity;
use crate::item::ListItem;
use crate::projection::DisplayProjection;

/// Horizontal placement of the edit field content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    /// Aligned to the left edge.
    #[default]
    Left,
    /// Centered horizontally.
    Center,
    /// Aligned to the right edge.
    Right,
    /// Filling the available width.
    Stretch,
}

/// Vertical placement of the edit field content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    /// Aligned to the top edge.
    Top,
    /// Centered vertically.
    #[default]
    Center,
    /// Aligned to the bottom edge.
    Bottom,
    /// Filling the available height.
    Stretch,
}

/// How the placeholder text is drawn while the edit field is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderAppearance {
    /// Text color as RGBA bytes.
    pub color: [u8; 4],
    /// Whether the placeholder is drawn in italics.
    pub italic: bool,
}

impl Default for PlaceholderAppearance {
    fn default() -> Self {
        Self {
            color: [160, 160, 160, 255],
            italic: false,
        }
    }
}

/// Configuration for a [`FilterComboBox`](crate::FilterComboBox).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterComboConfig {
    /// Text shown while the edit field is empty.
    pub placeholder: String,
    /// Maximum height of the dropdown overlay.
    pub max_dropdown_height: f32,
    /// Height of one row in the dropdown overlay.
    pub item_height: f32,
    /// Horizontal content alignment of the edit field.
    pub horizontal_content_alignment: HorizontalAlignment,
    /// Vertical content alignment of the edit field.
    pub vertical_content_alignment: VerticalAlignment,
    /// Property path projecting a selected item into the edit field.
    pub display_member_path: Option<String>,
    /// Case handling of the default filter.
    pub case_sensitivity: CaseSensitivity,
    /// Placeholder styling.
    pub placeholder_appearance: PlaceholderAppearance,
    /// Chords that toggle the dropdown regardless of its state.
    pub toggle_keys: Vec<KeyChord>,
}

impl Default for FilterComboConfig {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            max_dropdown_height: 240.0,
            item_height: 24.0,
            horizontal_content_alignment: HorizontalAlignment::default(),
            vertical_content_alignment: VerticalAlignment::default(),
            display_member_path: None,
            case_sensitivity: CaseSensitivity::default(),
            placeholder_appearance: PlaceholderAppearance::default(),
            toggle_keys: vec![
                KeyChord::key(Key::F4),
                KeyChord::new(Key::ArrowDown, KeyboardModifiers::ALT),
                KeyChord::new(Key::ArrowUp, KeyboardModifiers::ALT),
            ],
        }
    }
}

impl FilterComboConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the maximum dropdown height using builder pattern.
    pub fn with_max_dropdown_height(mut self, height: f32) -> Self {
        self.max_dropdown_height = height;
        self
    }

    /// Set the dropdown row height using builder pattern.
    pub fn with_item_height(mut self, height: f32) -> Self {
        self.item_height = height;
        self
    }

    /// Set the display member path using builder pattern.
    pub fn with_display_member_path(mut self, path: impl Into<String>) -> Self {
        self.display_member_path = Some(path.into());
        self
    }

    /// Set the default filter's case handling using builder pattern.
    pub fn with_case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = case_sensitivity;
        self
    }

    /// Set the content alignment using builder pattern.
    pub fn with_content_alignment(
        mut self,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
    ) -> Self {
        self.horizontal_content_alignment = horizontal;
        self.vertical_content_alignment = vertical;
        self
    }

    /// Replace the toggle chords using builder pattern.
    pub fn with_toggle_keys(mut self, keys: impl IntoIterator<Item = KeyChord>) -> Self {
        self.toggle_keys = keys.into_iter().collect();
        self
    }

    /// Check the configuration for out-of-range values and malformed paths.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_dropdown_height.is_finite() && self.max_dropdown_height > 0.0) {
            return Err(ConfigError::invalid_value(
                "max_dropdown_height",
                format!("must be a positive number, got {}", self.max_dropdown_height),
            ));
        }
        if !(self.item_height.is_finite() && self.item_height > 0.0) {
            return Err(ConfigError::invalid_value(
                "item_height",
                format!("must be a positive number, got {}", self.item_height),
            ));
        }
        if let Some(path) = &self.display_member_path {
            crate::projection::PropertyPath::parse(path)?;
        }
        Ok(())
    }

    /// Build the display projection described by `display_member_path`.
    pub fn display_projection<T: ListItem>(&self) -> Result<DisplayProjection<T>> {
        match &self.display_member_path {
            Some(path) => DisplayProjection::path(path),
            None => Ok(DisplayProjection::ItemString),
        }
    }

    /// Whether a key press is one of the configured toggle chords.
    pub fn is_toggle_key(&self, event: &crate::events::KeyPressEvent) -> bool {
        self.toggle_keys.iter().any(|chord| chord.matches(event))
    }

    /// Number of whole rows that fit in the dropdown.
    pub fn max_visible_rows(&self) -> usize {
        ((self.max_dropdown_height / self.item_height).floor() as usize).max(1)
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded TOML configuration");
        Ok(config)
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded JSON configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::KeyPressEvent;

    #[test]
    fn test_defaults_are_valid() {
        let config = FilterComboConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_visible_rows(), 10);
        assert!(config.is_toggle_key(&KeyPressEvent::plain(Key::F4)));
        assert!(config.is_toggle_key(&KeyPressEvent::new(Key::ArrowUp, KeyboardModifiers::ALT)));
        assert!(!config.is_toggle_key(&KeyPressEvent::plain(Key::ArrowDown)));
    }

    #[test]
    fn test_toml_round_trip_preserves_settings() {
        let config = FilterComboConfig::new()
            .with_placeholder("Search...")
            .with_display_member_path("origin.country")
            .with_case_sensitivity(CaseSensitivity::CaseSensitive)
            .with_content_alignment(HorizontalAlignment::Center, VerticalAlignment::Top);

        let text = config.to_toml_string().unwrap();
        let parsed = FilterComboConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = FilterComboConfig::from_toml_str(
            r#"
            horizontal_content_alignment = "right"
            toggle_keys = [{ key = "F4" }]
            "#,
        )
        .unwrap();

        assert_eq!(config.horizontal_content_alignment, HorizontalAlignment::Right);
        assert_eq!(config.toggle_keys, vec![KeyChord::key(Key::F4)]);
        assert_eq!(config.max_dropdown_height, 240.0);
    }

    #[test]
    fn test_json_config() {
        let config = FilterComboConfig::from_json_str(
            r#"{ "placeholder": "Fruit", "case_sensitivity": "case_sensitive" }"#,
        )
        .unwrap();
        assert_eq!(config.placeholder, "Fruit");
        assert_eq!(config.case_sensitivity, CaseSensitivity::CaseSensitive);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = FilterComboConfig::new().with_item_height(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref setting, .. }) if setting == "item_height"
        ));

        let err = FilterComboConfig::from_toml_str("max_dropdown_height = -5.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = FilterComboConfig::from_toml_str(r#"display_member_path = "a..b""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPath { .. }));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = FilterComboConfig::from_toml_str("placeholder = ").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_display_projection_from_config() {
        let config = FilterComboConfig::new().with_display_member_path("name");
        let projection = config.display_projection::<serde_json::Value>().unwrap();
        assert!(matches!(projection, DisplayProjection::Path(_)));
    }
}
