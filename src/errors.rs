/*!
 * Error types for the dengon application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors from a single call to the translation endpoint.
///
/// All three variants are terminal for the call: the client never retries,
/// and the chain runner stops the chain on any of them.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection-level failure, including request timeouts
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success HTTP status
    #[error("Translation API error: {status_code} - {body}")]
    Transport {
        /// HTTP status code
        status_code: u16,
        /// Response body text, captured for diagnostics
        body: String,
    },

    /// The response body could not be parsed or lacks the expected field
    #[error("Failed to parse translation response: {0}")]
    Protocol(String),
}

/// Errors that stop a chain before any network activity
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The chain needs at least one intermediate language
    #[error("At least one intermediate language is required")]
    EmptyChain,

    /// The source text is empty or whitespace-only
    #[error("Source text must not be blank")]
    BlankSourceText,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the translation client
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Error from chain preconditions
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
