//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating tracker configuration
///
/// The runtime path of the tracker never fails; these only surface at the
/// configuration boundary.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Threshold outside the 0..=1 range
    #[error("Threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f32),

    /// Parallax speed is not a finite number
    #[error("Parallax speed must be finite, got {0}")]
    InvalidSpeed(f32),

    /// Margin string could not be parsed
    #[error("Invalid activation margin '{0}': expected 1 to 4 pixel lengths")]
    InvalidMargin(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
