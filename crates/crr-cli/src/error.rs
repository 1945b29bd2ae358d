//! CLI error type.

use thiserror::Error;

/// Errors surfaced by the `crr` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing or greeks computation failed.
    #[error("pricing failed: {0}")]
    Pricing(#[from] crr_core::Error),

    /// The configuration file could not be read.
    #[error("cannot read config file {path}: {source}")]
    ConfigIo {
        /// Path that was requested.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::DemoConfig`].
    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        /// Path that was parsed.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
