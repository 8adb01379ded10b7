/*!
 * Translator implementations for machine-translation backends.
 *
 * This module contains client implementations for translation services:
 * - LibreTranslate: self-hosted or public LibreTranslate-compatible endpoints
 * - Mock: scripted translator for tests, no network access
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ClientError;

/// Common trait for translation backends.
///
/// One call translates one piece of text between one language pair. Language
/// codes are treated as opaque tokens and passed through unchanged; the only
/// local requirement is that they are non-empty. No retry happens at this
/// level - a failed call is terminal and retry policy belongs to the caller.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate `text` from `source` to `target`
    ///
    /// # Returns
    /// * `Result<String, ClientError>` - The translated text or a terminal error
    async fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, ClientError>;

    /// Test the connection to the backend
    ///
    /// # Returns
    /// * `Result<(), ClientError>` - Ok if the backend is reachable, or an error
    async fn test_connection(&self) -> Result<(), ClientError>;
}

pub mod libre;
pub mod mock;
