//! Demo harness configuration.
//!
//! Loaded from an optional TOML file, then overridden by command-line
//! flags. Every field has a default, so an empty file (or no file) yields
//! the demo scenario: S0 = K = 100, T = 1, r = 5 %, σ = 20 %,
//! Q = 2 %, four steps, 0.1 % bumps.
//!
//! ```toml
//! early_exercise = "forward-growth"
//! log_level = "debug"
//!
//! [model]
//! steps = 8
//! volatility = 0.25
//!
//! [bumps]
//! vol_bump = 0.001
//! rate_bump = 0.001
//! convention = "time-step"
//! ```

use crate::error::{CliError, Result};
use crr_greeks::BumpSettings;
use crr_methods::{EarlyExercise, ModelParameters};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Log levels accepted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Full harness configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Base model parameters.
    pub model: ModelParameters,
    /// Vega/rho bump sizes.
    pub bumps: BumpSettings,
    /// Early-exercise rule for American prices.
    pub early_exercise: EarlyExercise,
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: LogLevel,
}

impl DemoConfig {
    /// Parse a configuration document.
    pub fn from_toml(text: &str, origin: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| CliError::ConfigParse {
            path: origin.to_string(),
            source,
        })
    }

    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crr_core::OptionType;
    use crr_greeks::BumpConvention;

    #[test]
    fn empty_document_is_demo_scenario() {
        let cfg = DemoConfig::from_toml("", "inline").unwrap();
        assert_eq!(cfg.model, ModelParameters::default());
        assert_eq!(cfg.model.steps, 4);
        assert_eq!(cfg.model.dividend_yield, 0.02);
        assert_eq!(cfg.bumps, BumpSettings::default());
        assert_eq!(cfg.early_exercise, EarlyExercise::Intrinsic);
        assert_eq!(cfg.log_level, LogLevel::Info);
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let cfg = DemoConfig::from_toml(
            r#"
            early_exercise = "forward-growth"
            log_level = "debug"

            [model]
            steps = 8
            option_type = "put"

            [bumps]
            convention = "time-step"
            "#,
            "inline",
        )
        .unwrap();
        assert_eq!(cfg.model.steps, 8);
        assert_eq!(cfg.model.option_type, OptionType::Put);
        assert_eq!(cfg.model.spot, 100.0);
        assert_eq!(cfg.bumps.convention, BumpConvention::TimeStep);
        assert_eq!(cfg.early_exercise, EarlyExercise::ForwardGrowth);
        assert_eq!(cfg.log_level.as_filter_str(), "debug");
    }

    #[test]
    fn malformed_document_is_reported() {
        let err = DemoConfig::from_toml("[model]\nsteps = \"four\"", "bad.toml").unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = DemoConfig::load(Some(Path::new("/nonexistent/crr.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigIo { .. }));
    }

    #[test]
    fn no_path_gives_defaults() {
        let cfg = DemoConfig::load(None).unwrap();
        assert_eq!(cfg.model, ModelParameters::default());
    }
}
