/*!
 * # dengon - telephone-game translation over LibreTranslate
 *
 * A Rust library and CLI that routes Japanese text through an ordered chain
 * of intermediate languages and back to Japanese, one machine-translation
 * call per hop, reporting every intermediate step.
 *
 * ## Features
 *
 * - Hop derivation from an anchor language and an ordered intermediate list
 * - Strictly sequential chain execution with per-step progress callbacks
 * - Closed `Completed | Failed` outcome with the exact prefix of completed
 *   steps on failure
 * - LibreTranslate-compatible HTTP client with configurable timeout and
 *   optional API key
 * - Built-in supported-language table plus remote language-list fetch
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `chain`: Hop derivation and the chain runner
 * - `providers`: Translation backends:
 *   - `providers::libre`: LibreTranslate API client
 *   - `providers::mock`: scripted translator for tests
 * - `languages`: Supported-language table and name lookups
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod chain;
pub mod errors;
pub mod languages;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use chain::{build_hops, ChainOutcome, ChainRunner, Hop, StepResult, DEFAULT_ANCHOR};
pub use errors::{AppError, ClientError, ConfigurationError};
pub use providers::Translator;
