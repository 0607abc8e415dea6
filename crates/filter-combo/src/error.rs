//! Error types for filter-combo.
//!
//! The combo box state machine itself never fails: missing sources,
//! unresolvable display paths and out-of-range indices degrade to no-ops.
//! Errors only arise when building or loading configuration.

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while building or loading a combo box configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A display member path could not be parsed.
    #[error("Invalid display path '{path}': {message}")]
    InvalidPath { path: String, message: String },

    /// A numeric or enumerated setting is out of range.
    #[error("Invalid value for setting '{setting}': {message}")]
    InvalidValue { setting: String, message: String },

    /// TOML parsing error.
    #[error("Failed to parse TOML configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Failed to serialize TOML configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON parsing error.
    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Create a path error.
    pub fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(setting: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            setting: setting.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::invalid_path("a..b", "empty property name");
        assert_eq!(err.to_string(), "Invalid display path 'a..b': empty property name");

        let err = ConfigError::invalid_value("item_height", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid value for setting 'item_height': must be positive"
        );
    }
}
