//! Creator Partner text-generation adapters.
//!
//! Implements the [`pipeline::TextGenerator`] port:
//!
//! - [`GeminiProvider`] calls Google's Gemini `generateContent` endpoint.
//! - [`MockGenerator`] answers from a script and records prompts; used by
//!   tests and by the CLI's dry-run mode.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP transport, request formatting, response parsing
//! and status-code classification live here. The [`pipeline`] crate sees
//! only [`pipeline::TextGenerator`] and [`pipeline::GenerationError`].

pub mod gemini;
pub mod mock;

use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use mock::MockGenerator;

/// Errors raised while constructing a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No credential was supplied.
    #[error("API key not configured for {provider}")]
    MissingApiKey { provider: &'static str },

    /// The HTTP client could not be initialised.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
