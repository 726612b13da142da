//! Core domain for Creator Partner.
//!
//! Three expert roles (strategist, writer, platform specialist) each turn a
//! user's content request into advice by prompting a single text-generation
//! service. This crate holds everything those stages share: the service-type
//! tag and input fields, the personas, the question templates, the workflow
//! audit log, and the [`TextGenerator`] port the orchestration layer calls.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | `ServiceType`, `InputFields`, `StageResult`, `PipelineResult`, `Timestamp` |
//! | [`personas`] | `ExpertRole` and the static `ExpertPersona` roster |
//! | [`templates`] | `PromptTemplateRegistry` and the 15 question templates |
//! | [`workflow`] | `WorkflowLog` and its entries |
//! | [`generator`] | The `TextGenerator` port |
//! | [`identifiers`] | `PipelineRunId` |
//! | [`errors`] | `GenerationError`, `PipelineError`, `InputError` |

pub mod errors;
pub mod generator;
pub mod identifiers;
pub mod personas;
pub mod templates;
pub mod types;
pub mod workflow;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{GenerationError, InputError, PipelineError};
pub use generator::TextGenerator;
pub use identifiers::PipelineRunId;
pub use personas::{ExpertPersona, ExpertRole};
pub use templates::{PromptTemplateRegistry, QuestionTemplate, TemplateFn};
pub use types::{InputFields, PipelineResult, ServiceType, StageResult, Timestamp};
pub use workflow::{WorkflowLog, WorkflowLogEntry, WorkflowStep};
