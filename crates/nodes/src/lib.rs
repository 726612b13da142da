//! Creator Partner expert stages and pipeline executor.
//!
//! This crate provides the three [`Expert`] stages, the [`LlmGateway`] that
//! wraps every generation call with a timeout and structured logging, and
//! the [`PipelineExecutor`] that runs the stages in order.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** Experts sequence calls between the domain in the
//! [`pipeline`] crate (personas, templates, workflow log) and the
//! [`pipeline::TextGenerator`] port. They contain no infrastructure code.

pub mod executor;
pub mod expert;
pub mod gateway;

pub use executor::PipelineExecutor;
pub use expert::{Expert, CONTEXT_END};
pub use gateway::LlmGateway;
