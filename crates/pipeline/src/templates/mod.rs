//! Question templates, one per (expert role, service type) pair.
//!
//! Each template lists the analytical sub-sections the generation service is
//! asked to cover and quotes the relevant user fields. Selection is an
//! exhaustive match on [`ExpertRole`] and [`ServiceType`]; the
//! [`ServiceType::Generic`] arm embeds the whole field map as plain text, so
//! every input produces some template.
//!
//! All functions here are pure.

mod builder;
mod creative;
mod platform;
mod strategy;

use std::fmt::Write as _;

pub use builder::QuestionTemplate;

use crate::{ExpertRole, InputFields, ServiceType};

/// Renders one role's template for a given service type.
pub type TemplateFn = fn(&ServiceType, &InputFields) -> String;

/// Dispatch table from `(role, service type)` to question template.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptTemplateRegistry;

impl PromptTemplateRegistry {
    /// Renders the question template for `role` and `service_type`.
    pub fn render(role: ExpertRole, service_type: &ServiceType, fields: &InputFields) -> String {
        (Self::for_role(role))(service_type, fields)
    }

    /// Returns the template-selection function bound to `role`.
    pub fn for_role(role: ExpertRole) -> TemplateFn {
        match role {
            ExpertRole::Strategist => strategist_template,
            ExpertRole::Writer => writer_template,
            ExpertRole::PlatformSpecialist => platform_template,
        }
    }
}

fn strategist_template(service_type: &ServiceType, fields: &InputFields) -> String {
    match service_type {
        ServiceType::YouTube => strategy::youtube(fields),
        ServiceType::Blog => strategy::blog(fields),
        ServiceType::Instagram => strategy::instagram(fields),
        ServiceType::Integrated => strategy::integrated(fields),
        ServiceType::Generic(label) => strategy::generic(label, fields),
    }
}

fn writer_template(service_type: &ServiceType, fields: &InputFields) -> String {
    match service_type {
        ServiceType::YouTube => creative::youtube(fields),
        ServiceType::Blog => creative::blog(fields),
        ServiceType::Instagram => creative::instagram(fields),
        ServiceType::Integrated => creative::integrated(fields),
        ServiceType::Generic(label) => creative::generic(label, fields),
    }
}

fn platform_template(service_type: &ServiceType, fields: &InputFields) -> String {
    match service_type {
        ServiceType::YouTube => platform::youtube(fields),
        ServiceType::Blog => platform::blog(fields),
        ServiceType::Instagram => platform::instagram(fields),
        ServiceType::Integrated => platform::integrated(fields),
        ServiceType::Generic(label) => platform::generic(label, fields),
    }
}

/// Unstructured `name: value` rendering of every field, used by the
/// fallback templates.
fn field_dump(fields: &InputFields) -> String {
    if fields.is_empty() {
        return "(no details provided)".to_string();
    }
    let mut out = String::new();
    for (name, value) in fields.iter() {
        let _ = writeln!(out, "{name}: {value}");
    }
    out
}
