//! Error types for configuration loading and validation.

use thiserror::Error;

/// Errors from reading and validating a world configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config text is not valid TOML for a world config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The material palette is structurally invalid.
    #[error("invalid palette: {reason}")]
    InvalidPalette {
        /// What the validator rejected.
        reason: String,
    },

    /// A world or terrain setting is out of range.
    #[error("invalid setting {name}: {reason}")]
    InvalidSetting {
        /// Which setting was rejected.
        name: &'static str,
        /// What the validator rejected.
        reason: String,
    },
}

/// Convenience alias for config results.
pub type ConfigResult<T> = Result<T, ConfigError>;
