//! Error types for the Creator Partner pipeline domain.
//!
//! [`PipelineError`] is the only error the core itself produces. Whatever goes
//! wrong inside the generation service is reported through the
//! [`GenerationError`] cause it carries, so the taxonomy seen by callers stays
//! at a single kind.
//!
//! [`InputError`] belongs to the input boundary: it is raised before the core
//! is invoked, never by it.

use std::time::Duration;

use thiserror::Error;

use crate::ExpertRole;

// ---------------------------------------------------------------------------
// Port-level failures
// ---------------------------------------------------------------------------

/// Why a single call to the text-generation service failed.
///
/// Produced by [`crate::TextGenerator`] implementations and by the gateway's
/// timeout. Experts never inspect the variant; they wrap it unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// No response arrived within the configured limit.
    #[error("generation timed out after {after:?}")]
    Timeout {
        /// The limit that elapsed.
        after: Duration,
    },

    /// The service rejected the credential.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The service refused the call because a quota or rate limit was hit.
    #[error("rate limited: {message}")]
    RateLimited {
        message: String,
        /// Delay suggested by the service, if any. Informational only; the
        /// pipeline does not retry.
        retry_after: Option<Duration>,
    },

    /// The service answered, but the body could not be turned into text.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    /// The request never completed at the transport level.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The service returned an error status not covered above.
    #[error("provider error (HTTP {status}): {message}")]
    Provider { status: u16, message: String },
}

// ---------------------------------------------------------------------------
// Core errors
// ---------------------------------------------------------------------------

/// Errors returned by a pipeline run.
///
/// Any stage failure aborts the run: no partial result is returned and no
/// workflow log entry is committed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// The generation call issued by one expert failed.
    #[error("generation failed during the {stage} stage: {cause}")]
    GenerationFailed {
        /// The expert whose call failed.
        stage: ExpertRole,
        /// The underlying failure.
        #[source]
        cause: GenerationError,
    },
}

impl PipelineError {
    /// Returns the stage whose call failed.
    pub fn stage(&self) -> ExpertRole {
        match self {
            Self::GenerationFailed { stage, .. } => *stage,
        }
    }
}

// ---------------------------------------------------------------------------
// Input boundary
// ---------------------------------------------------------------------------

/// Errors raised by the input boundary before a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// One or more mandatory fields were absent or blank.
    #[error("missing required input: {}", fields.join(", "))]
    MissingRequiredInput {
        /// Names of the missing fields, in declaration order.
        fields: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_failed_names_stage_and_cause() {
        let err = PipelineError::GenerationFailed {
            stage: ExpertRole::Writer,
            cause: GenerationError::Timeout {
                after: Duration::from_secs(3),
            },
        };
        let text = err.to_string();
        assert!(text.contains("writer"), "{text}");
        assert!(text.contains("timed out"), "{text}");
        assert_eq!(err.stage(), ExpertRole::Writer);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn missing_input_lists_fields() {
        let err = InputError::MissingRequiredInput {
            fields: vec!["goals".into(), "target_audience".into()],
        };
        assert_eq!(err.to_string(), "missing required input: goals, target_audience");
    }
}
