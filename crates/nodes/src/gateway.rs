//! Single choke point for every call to the text-generation service.
//!
//! Adds a per-call timeout and structured logging around the
//! [`TextGenerator`] port. Failures, including an elapsed timeout, come back
//! as a [`GenerationError`]; there is no retry.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use pipeline::{ExpertRole, GenerationError, TextGenerator};

/// Wraps a [`TextGenerator`] with a timeout and call logging.
#[derive(Clone)]
pub struct LlmGateway {
    generator: Arc<dyn TextGenerator>,
    timeout: Option<Duration>,
}

impl fmt::Debug for LlmGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmGateway")
            .field("generator", &self.generator.name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl LlmGateway {
    /// Timeout applied when none is configured explicitly.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

    /// Creates a gateway with [`Self::DEFAULT_TIMEOUT`].
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            timeout: Some(Self::DEFAULT_TIMEOUT),
        }
    }

    /// Replaces the per-call timeout. `None` waits indefinitely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The per-call timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Name reported by the wrapped generator.
    pub fn provider_name(&self) -> &str {
        self.generator.name()
    }

    /// Issues one generation call on behalf of `role`.
    pub async fn call(&self, role: ExpertRole, prompt: &str) -> Result<String, GenerationError> {
        let started_at = Instant::now();

        tracing::debug!(
            role = %role,
            provider = self.generator.name(),
            prompt_chars = prompt.chars().count(),
            "Sending generation request"
        );

        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.generator.generate(prompt))
                .await
                .unwrap_or(Err(GenerationError::Timeout { after: limit })),
            None => self.generator.generate(prompt).await,
        };
        let elapsed_ms = started_at.elapsed().as_millis();

        match &result {
            Ok(text) => tracing::info!(
                role = %role,
                provider = self.generator.name(),
                response_chars = text.chars().count(),
                elapsed_ms,
                "Generation request completed"
            ),
            Err(error) => tracing::error!(
                role = %role,
                provider = self.generator.name(),
                error = %error,
                elapsed_ms,
                "Generation request failed"
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct Slow;

    #[async_trait]
    impl TextGenerator for Slow {
        fn name(&self) -> &str {
            "slow"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("late".into())
        }
    }

    struct Echo;

    #[async_trait]
    impl TextGenerator for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_timeout_becomes_generation_error() {
        let gateway = LlmGateway::new(Arc::new(Slow)).with_timeout(Some(Duration::from_secs(5)));
        let err = gateway.call(ExpertRole::Strategist, "hi").await.unwrap_err();
        assert_eq!(
            err,
            GenerationError::Timeout {
                after: Duration::from_secs(5)
            }
        );
    }

    #[tokio::test]
    async fn passes_text_through_unchanged() {
        let gateway = LlmGateway::new(Arc::new(Echo));
        let text = gateway.call(ExpertRole::Writer, "  exact text \n").await.unwrap();
        assert_eq!(text, "  exact text \n");
        assert_eq!(gateway.timeout(), Some(LlmGateway::DEFAULT_TIMEOUT));
        assert_eq!(gateway.provider_name(), "echo");
    }
}
