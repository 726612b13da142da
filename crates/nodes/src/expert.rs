//! One pipeline stage: a persona, a template-selection function, and a
//! single generation call.
//!
//! The prompt an expert sends is composed of, in order:
//!
//! 1. the persona line and introduction,
//! 2. the previous stage's full output between delimiter lines (writer and
//!    platform specialist only),
//! 3. the role/service-type question template,
//! 4. role-specific closing instructions.
//!
//! Experts hold no mutable state and can be shared across concurrent runs.

use std::fmt::Write as _;

use pipeline::{
    ExpertPersona, ExpertRole, InputFields, PipelineError, PromptTemplateRegistry, ServiceType,
    StageResult, TemplateFn,
};

use crate::LlmGateway;

/// Closing delimiter placed after quoted prior context.
pub const CONTEXT_END: &str = "=== End of analysis ===";

/// A stage of the creative pipeline.
#[derive(Debug, Clone)]
pub struct Expert {
    persona: &'static ExpertPersona,
    template: TemplateFn,
    gateway: LlmGateway,
}

impl Expert {
    /// Binds `role`'s persona and template function to `gateway`.
    pub fn new(role: ExpertRole, gateway: LlmGateway) -> Self {
        Self {
            persona: ExpertPersona::for_role(role),
            template: PromptTemplateRegistry::for_role(role),
            gateway,
        }
    }

    /// The pipeline stage this expert runs.
    pub fn role(&self) -> ExpertRole {
        self.persona.role
    }

    /// The persona injected into every prompt.
    pub fn persona(&self) -> &'static ExpertPersona {
        self.persona
    }

    /// Builds the full prompt this expert would send. Pure.
    pub fn compose_prompt(
        &self,
        prior: Option<&StageResult>,
        service_type: &ServiceType,
        fields: &InputFields,
    ) -> String {
        let persona = self.persona;
        let mut prompt = String::new();

        let _ = writeln!(prompt, "You are '{}', a {}.", persona.display_name, persona.title);
        let _ = writeln!(prompt, "{}", persona.introduction);

        if let Some(prior) = prior {
            let (framing, heading) = context_framing(self.role());
            let _ = write!(
                prompt,
                "\n{framing}\n\n=== {heading} ===\n{}\n{CONTEXT_END}\n",
                prior.as_str()
            );
        }

        let _ = write!(prompt, "\n{}", (self.template)(service_type, fields));
        let _ = write!(prompt, "\n{}\n", closing_instructions(self.role()));
        prompt
    }

    /// Composes the prompt and issues exactly one generation call.
    ///
    /// The generated text is returned unmodified. Any failure of the call is
    /// reported as [`PipelineError::GenerationFailed`] for this expert's role.
    pub async fn produce(
        &self,
        prior: Option<&StageResult>,
        service_type: &ServiceType,
        fields: &InputFields,
    ) -> Result<StageResult, PipelineError> {
        let prompt = self.compose_prompt(prior, service_type, fields);
        self.gateway
            .call(self.role(), &prompt)
            .await
            .map(StageResult::new)
            .map_err(|cause| PipelineError::GenerationFailed {
                stage: self.role(),
                cause,
            })
    }
}

/// The sentence introducing quoted prior context, and the heading it sits under.
fn context_framing(role: ExpertRole) -> (&'static str, &'static str) {
    match role {
        ExpertRole::Writer => (
            "Review the content strategist's analysis below and build upon it from a creative \
             perspective:",
            "Content strategist's analysis",
        ),
        ExpertRole::PlatformSpecialist => (
            "Review the analysis below from the content strategist and the content writer, build \
             upon it, and bring it to its final form:",
            "Previous experts' analysis",
        ),
        // Stage 1 never receives prior context; kept so the match stays total.
        ExpertRole::Strategist => (
            "Review the prior expert's analysis below and build upon it:",
            "Prior expert's analysis",
        ),
    }
}

fn closing_instructions(role: ExpertRole) -> &'static str {
    match role {
        ExpertRole::Strategist => {
            "Your analysis must include trend analysis, target audience insights, and a content \
             differentiation strategy.\n\
             Present a strategy that is both professional and practical."
        }
        ExpertRole::Writer => {
            "You must include a compelling story structure, visual and audio (sensory) elements, \
             and emotional hooks that connect with the audience."
        }
        ExpertRole::PlatformSpecialist => {
            "Your advice must cover algorithm optimisation, a publishing cadence, and the KPIs to \
             track.\n\
             The final advice must integrate the perspectives of all three experts in balance:\n\
             1. Content strategist (strategy and direction)\n\
             2. Content writer (storytelling and creative elements)\n\
             3. Platform specialist (optimisation and distribution)\n\
             \n\
             Provide a concrete, actionable, step-by-step guide to producing and distributing the content."
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use pipeline::{GenerationError, TextGenerator};

    use super::*;

    struct Unreachable;

    #[async_trait]
    impl TextGenerator for Unreachable {
        fn name(&self) -> &str {
            "unreachable"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::Transport {
                message: "connection refused".into(),
            })
        }
    }

    fn expert(role: ExpertRole) -> Expert {
        Expert::new(role, LlmGateway::new(Arc::new(Unreachable)))
    }

    fn fields() -> InputFields {
        InputFields::new()
            .with("topic", "urban sketching")
            .with("goals", "sell prints")
            .with("target_audience", "travel lovers")
    }

    #[test]
    fn strategist_prompt_has_no_context_block() {
        let prompt = expert(ExpertRole::Strategist).compose_prompt(None, &ServiceType::Blog, &fields());
        assert!(prompt.starts_with("You are 'Jiwon Kim, Content Strategist'"));
        assert!(prompt.contains(ExpertPersona::for_role(ExpertRole::Strategist).introduction));
        assert!(!prompt.contains(CONTEXT_END));
        assert!(prompt.contains("trend analysis"));
    }

    #[test]
    fn prior_context_is_quoted_before_template() {
        let prior = StageResult::new("STRATEGY TEXT\nwith two lines");
        let prompt =
            expert(ExpertRole::Writer).compose_prompt(Some(&prior), &ServiceType::YouTube, &fields());

        let quoted = prompt.find("STRATEGY TEXT\nwith two lines").unwrap();
        let end = prompt.find(CONTEXT_END).unwrap();
        let template = prompt.find("creative development plan").unwrap();
        assert!(quoted < end && end < template);
        assert!(prompt.contains("=== Content strategist's analysis ==="));
        assert!(prompt.contains("emotional hooks"));
    }

    #[test]
    fn platform_closing_balances_three_perspectives() {
        let prior = StageResult::new("CONTENT TEXT");
        let prompt = expert(ExpertRole::PlatformSpecialist).compose_prompt(
            Some(&prior),
            &ServiceType::Instagram,
            &fields(),
        );
        assert!(prompt.contains("integrate the perspectives of all three experts"));
        assert!(prompt.contains("KPIs"));
        assert!(prompt.contains("=== Previous experts' analysis ===\nCONTENT TEXT\n"));
    }

    #[tokio::test]
    async fn failure_is_tagged_with_stage() {
        let err = expert(ExpertRole::Writer)
            .produce(Some(&StageResult::new("x")), &ServiceType::Blog, &fields())
            .await
            .unwrap_err();
        assert_eq!(err.stage(), ExpertRole::Writer);
        assert!(matches!(
            err,
            PipelineError::GenerationFailed {
                cause: GenerationError::Transport { .. },
                ..
            }
        ));
    }
}
