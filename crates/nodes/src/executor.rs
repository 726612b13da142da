//! The orchestrator: runs the three experts in sequence and records the run.

use std::sync::Arc;

use pipeline::{
    ExpertRole, InputFields, PipelineError, PipelineResult, PipelineRunId, ServiceType,
    WorkflowLog, WorkflowLogEntry,
};
use tracing::Instrument;

use crate::{Expert, LlmGateway};

/// Sequences strategist, writer and platform specialist, threading each
/// stage's output into the next stage's prompt.
///
/// Stage *n + 1* cannot start before stage *n* returns because its prompt
/// contains stage *n*'s text. A workflow log entry is appended only after all
/// three stages succeed.
#[derive(Debug)]
pub struct PipelineExecutor {
    strategist: Expert,
    writer: Expert,
    platform_specialist: Expert,
    log: Arc<WorkflowLog>,
}

impl PipelineExecutor {
    /// Creates an executor with a fresh, empty workflow log.
    pub fn new(gateway: LlmGateway) -> Self {
        Self::with_log(gateway, Arc::new(WorkflowLog::new()))
    }

    /// Creates an executor that appends to an existing workflow log.
    pub fn with_log(gateway: LlmGateway, log: Arc<WorkflowLog>) -> Self {
        Self {
            strategist: Expert::new(ExpertRole::Strategist, gateway.clone()),
            writer: Expert::new(ExpertRole::Writer, gateway.clone()),
            platform_specialist: Expert::new(ExpertRole::PlatformSpecialist, gateway),
            log,
        }
    }

    /// The log this executor appends to.
    pub fn workflow_log(&self) -> &Arc<WorkflowLog> {
        &self.log
    }

    /// The experts in pipeline order.
    pub fn experts(&self) -> [&Expert; 3] {
        [&self.strategist, &self.writer, &self.platform_specialist]
    }

    /// Runs the full pipeline for one request.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::GenerationFailed`] from the first stage whose
    /// call fails. Later stages are not attempted and the workflow log is left
    /// unchanged.
    pub async fn run(
        &self,
        service_type: ServiceType,
        fields: &InputFields,
    ) -> Result<PipelineResult, PipelineError> {
        let run_id = PipelineRunId::new_random();
        let span = tracing::info_span!(
            "pipeline_run",
            run_id = %run_id,
            service_type = %service_type
        );
        self.run_stages(run_id, service_type, fields)
            .instrument(span)
            .await
    }

    async fn run_stages(
        &self,
        run_id: PipelineRunId,
        service_type: ServiceType,
        fields: &InputFields,
    ) -> Result<PipelineResult, PipelineError> {
        let mut entry = WorkflowLogEntry::begin(run_id, service_type.clone());
        let service_type = &service_type;
        tracing::info!(fields = fields.len(), "Pipeline run started");

        let strategy = self.strategist.produce(None, service_type, fields).await?;
        entry.record(ExpertRole::Strategist);

        let content = self
            .writer
            .produce(Some(&strategy), service_type, fields)
            .await?;
        entry.record(ExpertRole::Writer);

        let platform = self
            .platform_specialist
            .produce(Some(&content), service_type, fields)
            .await?;
        entry.record(ExpertRole::PlatformSpecialist);

        self.log.append(entry);
        tracing::info!("Pipeline run completed");

        Ok(PipelineResult {
            strategy,
            content,
            platform,
        })
    }
}
