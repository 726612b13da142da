//! Scripted [`TextGenerator`] for tests and offline dry runs.
//!
//! # Example
//!
//! ```rust
//! use llm::MockGenerator;
//! use pipeline::TextGenerator;
//!
//! let mock = MockGenerator::scripted(["first", "second"]);
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! assert_eq!(rt.block_on(mock.generate("a")).unwrap(), "first");
//! assert_eq!(mock.prompts(), vec!["a".to_string()]);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use pipeline::{GenerationError, TextGenerator};

/// What the mock answers once its script is exhausted.
#[derive(Debug, Clone)]
enum Fallback {
    /// Return the prompt itself.
    Echo,
    /// Return a fixed reply.
    Fixed(String),
    /// Return a numbered placeholder.
    Numbered,
}

#[derive(Debug)]
struct MockState {
    script: VecDeque<String>,
    fallback: Fallback,
    failure: Option<(usize, GenerationError)>,
    prompts: Vec<String>,
}

/// In-memory generator that records every prompt it receives.
///
/// Clones share state, so a test can keep one handle for assertions while the
/// executor owns another.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::from_parts(VecDeque::new(), Fallback::Numbered)
    }
}

impl MockGenerator {
    fn from_parts(script: VecDeque<String>, fallback: Fallback) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                script,
                fallback,
                failure: None,
                prompts: Vec::new(),
            })),
        }
    }

    /// Answers with `responses` in order, then with numbered placeholders.
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_parts(
            responses.into_iter().map(Into::into).collect(),
            Fallback::Numbered,
        )
    }

    /// Answers every call with `response`.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::from_parts(VecDeque::new(), Fallback::Fixed(response.into()))
    }

    /// Answers every call with the prompt it was given.
    pub fn echo() -> Self {
        Self::from_parts(VecDeque::new(), Fallback::Echo)
    }

    /// Makes the call with zero-based index `call` fail with `error`.
    #[must_use]
    pub fn failing_on(self, call: usize, error: GenerationError) -> Self {
        self.lock().failure = Some((call, error));
        self
    }

    /// Every prompt received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.lock().prompts.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut state = self.lock();
        let index = state.prompts.len();
        state.prompts.push(prompt.to_string());

        if let Some((call, error)) = &state.failure {
            if *call == index {
                return Err(error.clone());
            }
        }

        if let Some(next) = state.script.pop_front() {
            return Ok(next);
        }

        Ok(match &state.fallback {
            Fallback::Echo => prompt.to_string(),
            Fallback::Fixed(text) => text.clone(),
            Fallback::Numbered => format!("mock response {}", index + 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn script_then_numbered_fallback() {
        let mock = MockGenerator::scripted(["one"]);
        assert_eq!(mock.generate("p1").await.unwrap(), "one");
        assert_eq!(mock.generate("p2").await.unwrap(), "mock response 2");
        assert_eq!(mock.prompts(), vec!["p1".to_string(), "p2".to_string()]);
    }

    #[tokio::test]
    async fn failure_hits_only_the_chosen_call() {
        let mock = MockGenerator::with_response("ok").failing_on(
            1,
            GenerationError::RateLimited {
                message: "quota".into(),
                retry_after: None,
            },
        );
        assert!(mock.generate("a").await.is_ok());
        assert!(matches!(
            mock.generate("b").await,
            Err(GenerationError::RateLimited { .. })
        ));
        assert_eq!(mock.generate("c").await.unwrap(), "ok");
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn echo_returns_prompt() {
        let mock = MockGenerator::echo();
        assert_eq!(mock.generate("same").await.unwrap(), "same");
    }

    #[tokio::test]
    async fn clones_share_recorded_prompts() {
        let mock = MockGenerator::default();
        let handle = mock.clone();
        mock.generate("shared").await.unwrap();
        assert_eq!(handle.prompts(), vec!["shared".to_string()]);
    }
}
