//! Newtype domain identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies a single pipeline execution run.
///
/// Generated fresh for every call to the orchestrator's `run`; recorded in the
/// workflow log entry and propagated through tracing spans so all activity
/// from one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineRunId(Uuid);

impl PipelineRunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a [`PipelineRunId`] from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PipelineRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_distinct() {
        assert_ne!(PipelineRunId::new_random(), PipelineRunId::new_random());
    }

    #[test]
    fn round_trips_through_uuid() {
        let uuid = Uuid::new_v4();
        let id = PipelineRunId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
