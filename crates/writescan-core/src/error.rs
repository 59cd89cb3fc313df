//! Error types for writescan-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input text is empty or whitespace-only.
    #[error("No text provided")]
    EmptyInput,

    /// The input text exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
