//! Append-only audit record of completed pipeline runs.
//!
//! The log is owned by one orchestrator instance and lives as long as it
//! does. It is written only after all three stages succeed, so it never holds
//! a partially completed run. Nothing reads it for control flow.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::{ExpertRole, PipelineRunId, ServiceType, Timestamp};

/// One completed stage within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub role: ExpertRole,
    pub action: String,
}

impl WorkflowStep {
    /// The step recorded when `role`'s stage completes.
    pub fn completed(role: ExpertRole) -> Self {
        Self {
            role,
            action: role.action().to_string(),
        }
    }
}

/// Audit record of one successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowLogEntry {
    pub run_id: PipelineRunId,
    pub service_type: ServiceType,
    /// When the run started.
    pub timestamp: Timestamp,
    pub participants: Vec<ExpertRole>,
    pub steps: Vec<WorkflowStep>,
}

impl WorkflowLogEntry {
    /// Starts an entry listing every expert as a participant and no steps yet.
    pub fn begin(run_id: PipelineRunId, service_type: ServiceType) -> Self {
        Self {
            run_id,
            service_type,
            timestamp: Timestamp::now(),
            participants: ExpertRole::ALL.to_vec(),
            steps: Vec::with_capacity(ExpertRole::ALL.len()),
        }
    }

    /// Records that `role`'s stage completed.
    pub fn record(&mut self, role: ExpertRole) {
        self.steps.push(WorkflowStep::completed(role));
    }
}

/// Process-lifetime, append-only sequence of [`WorkflowLogEntry`] values.
///
/// Safe for concurrent appends from independent runs; readers see whole
/// entries only.
#[derive(Debug, Default)]
pub struct WorkflowLog {
    entries: RwLock<Vec<WorkflowLogEntry>>,
}

impl WorkflowLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed entry.
    pub fn append(&self, entry: WorkflowLogEntry) {
        tracing::debug!(
            run_id = %entry.run_id,
            service_type = %entry.service_type,
            steps = entry.steps.len(),
            "Appending workflow log entry"
        );
        // Entries are pushed whole, so a poisoned lock still guards a valid Vec.
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Number of completed runs recorded.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no run has completed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every entry, oldest first.
    pub fn entries(&self) -> Vec<WorkflowLogEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recently appended entry.
    pub fn last(&self) -> Option<WorkflowLogEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Serialises the current snapshot as pretty-printed JSON for debugging.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn complete_entry(service_type: ServiceType) -> WorkflowLogEntry {
        let mut entry = WorkflowLogEntry::begin(PipelineRunId::new_random(), service_type);
        for role in ExpertRole::ALL {
            entry.record(role);
        }
        entry
    }

    #[test]
    fn begin_lists_all_participants_without_steps() {
        let entry = WorkflowLogEntry::begin(PipelineRunId::new_random(), ServiceType::Blog);
        assert_eq!(entry.participants, ExpertRole::ALL.to_vec());
        assert!(entry.steps.is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let log = WorkflowLog::new();
        assert!(log.is_empty());
        log.append(complete_entry(ServiceType::YouTube));
        log.append(complete_entry(ServiceType::Instagram));

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].service_type, ServiceType::YouTube);
        assert_eq!(log.last().map(|e| e.service_type), Some(ServiceType::Instagram));
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let log = Arc::new(WorkflowLog::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        log.append(complete_entry(ServiceType::Blog));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(log.len(), 200);
        assert!(log.entries().iter().all(|e| e.steps.len() == 3));
    }

    #[test]
    fn json_dump_uses_snake_case_roles() {
        let log = WorkflowLog::new();
        log.append(complete_entry(ServiceType::Integrated));
        let json = log.to_json().unwrap();
        assert!(json.contains("\"platform_specialist\""));
        assert!(json.contains("\"finalization\""));
        assert!(json.contains("\"integrated\""));
    }

    #[test]
    fn json_dump_names_youtube_runs_plainly() {
        let log = WorkflowLog::new();
        log.append(complete_entry(ServiceType::YouTube));
        let json = log.to_json().unwrap();
        assert!(json.contains("\"youtube\""));
        assert!(!json.contains("you_tube"));
    }
}
