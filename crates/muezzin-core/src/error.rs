//! Core error types for muezzin-core.
//!
//! This module defines the error hierarchy using thiserror. Validation
//! errors are fatal to the single call that produced them and are never
//! retried internally; provider errors belong to the external services.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for muezzin-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed input to the scheduler or event model
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Errors from the geocoding or prayer-time providers
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Malformed event sets, times-of-day, and user-supplied parameters.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// An event set must contain at least one event
    #[error("Event set is empty")]
    EmptyEventSet,

    /// Hour or minute outside the 24-hour clock
    #[error("Time of day out of range: {hour:02}:{minute:02}")]
    TimeOutOfRange { hour: u32, minute: u32 },

    /// Unparseable wire time such as "25:99" or "soon"
    #[error("Invalid time string: '{0}'")]
    BadTimeString(String),

    /// Date override that is not DD-MM-YYYY
    #[error("Invalid date: '{0}' (expected DD-MM-YYYY)")]
    BadDate(String),

    /// Calculation method name or id not recognised
    #[error("Unknown calculation method: '{0}'")]
    UnknownMethod(String),

    /// Timezone name not in the IANA database
    #[error("Unknown timezone: '{0}'")]
    UnknownTimezone(String),
}

/// Errors from the external geocoding and prayer-time providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, non-success status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Geocoder returned no results for the query
    #[error("No coordinates found for '{query}'")]
    LocationNotFound { query: String },

    /// Prayer-time API answered with a non-200 payload code
    #[error("Prayer-time API error {code}: {status}")]
    Api { code: u64, status: String },

    /// Response body did not match the expected shape
    #[error("Unexpected response shape: {0}")]
    Schema(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
