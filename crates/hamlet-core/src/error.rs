//! Error types for the few fallible edges of the core
//!
//! The per-tick pipeline is infallible. Only text parsing (input edge names,
//! RON presets) and preset validation can fail.

use thiserror::Error;

/// Failure to parse a named input edge such as `up-press`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown input edge '{0}' (expected e.g. 'up-press' or 'left-release')")]
pub struct ParseEdgeError(pub String);

/// Failure to load or validate a world generation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse world generation config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize world generation config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("unknown world generation preset '{0}'")]
    UnknownPreset(String),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
