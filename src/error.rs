//! Error types for crate-level configuration.
//!
//! This module contains the error type returned by configuration
//! constructors and parsers.
//!
//! # Error Handling
//!
//! Configuration builders return `Result<T, ConfigError>` so that a missing
//! builder field fails at construction time. The *values* of the host and
//! credential are never validated: an empty host or token degrades to a
//! malformed upstream request and is observed as a fetch failure by the
//! caller, not as a local configuration error.

use thiserror::Error;

/// Errors that can occur while assembling configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required builder field was never set.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// An API version string does not have the `YYYY-MM` shape.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2023-07').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },
}
