//! The text-generation port.
//!
//! The pipeline consumes the generation service as one opaque operation:
//! a prompt goes in, text comes out, or the call fails. Credentials,
//! transport, and request formatting belong to the implementation.

use async_trait::async_trait;

use crate::GenerationError;

/// Capability to turn a prompt into generated text.
///
/// Implementations must be shareable across concurrent runs. The core issues
/// exactly one call per stage and never retries.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short provider name for logs (e.g. `"gemini"`).
    fn name(&self) -> &str;

    /// Generates text for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
