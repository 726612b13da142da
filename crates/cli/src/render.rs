//! Turns pipeline output into text for the terminal.

use std::fmt::Write as _;

use pipeline::{ExpertPersona, ExpertRole, PipelineResult, ServiceType};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StageView<'a> {
    role: ExpertRole,
    expert: &'a str,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct ResultView<'a> {
    service_type: &'a str,
    stages: Vec<StageView<'a>>,
}

fn stages(result: &PipelineResult) -> [(ExpertRole, &str); 3] {
    [
        (ExpertRole::Strategist, result.strategy.as_str()),
        (ExpertRole::Writer, result.content.as_str()),
        (ExpertRole::PlatformSpecialist, result.platform.as_str()),
    ]
}

/// One markdown section per expert; the last is the integrated advice.
pub fn markdown(service_type: &ServiceType, result: &PipelineResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {} content plan", service_type.label());

    for (role, text) in stages(result) {
        let name = role.persona().display_name;
        let heading = match role {
            ExpertRole::PlatformSpecialist => format!("{name} (integrated advice)"),
            _ => name.to_string(),
        };
        let _ = write!(out, "\n## {heading}\n\n{}\n", text.trim_end());
    }
    out
}

/// Pretty-printed JSON with one object per stage.
pub fn json(service_type: &ServiceType, result: &PipelineResult) -> serde_json::Result<String> {
    let view = ResultView {
        service_type: service_type.label(),
        stages: stages(result)
            .into_iter()
            .map(|(role, text)| StageView {
                role,
                expert: role.persona().display_name,
                text,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&view)
}

/// Profile cards for the whole roster.
pub fn roster_markdown(roster: &[&ExpertPersona]) -> String {
    let mut out = String::new();
    for persona in roster {
        let _ = writeln!(out, "## {}\n", persona.display_name);
        let _ = writeln!(out, "{}\n", persona.introduction);
        let _ = writeln!(out, "Specialties:");
        for item in persona.specialties {
            let _ = writeln!(out, "- {item}");
        }
        let _ = writeln!(out, "\nBackground:");
        for item in persona.background {
            let _ = writeln!(out, "- {item}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::StageResult;

    fn result() -> PipelineResult {
        PipelineResult {
            strategy: StageResult::new("strategy text\n"),
            content: StageResult::new("content text"),
            platform: StageResult::new("platform text"),
        }
    }

    #[test]
    fn markdown_has_a_section_per_expert_in_order() {
        let text = markdown(&ServiceType::Blog, &result());
        assert!(text.starts_with("# Blog content plan\n"));

        let positions: Vec<usize> = ExpertPersona::roster()
            .iter()
            .map(|p| text.find(p.display_name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(text.contains("## Seoyeon Park, Platform Specialist (integrated advice)"));
        assert!(text.contains("strategy text\n\n## Minho Lee"));
    }

    #[test]
    fn json_lists_stages_with_roles() {
        let value: serde_json::Value =
            serde_json::from_str(&json(&ServiceType::YouTube, &result()).unwrap()).unwrap();
        assert_eq!(value["service_type"], "YouTube");
        assert_eq!(value["stages"][0]["role"], "strategist");
        assert_eq!(value["stages"][2]["role"], "platform_specialist");
        assert_eq!(value["stages"][1]["text"], "content text");
    }

    #[test]
    fn roster_lists_specialties() {
        let text = roster_markdown(&ExpertPersona::roster());
        assert!(text.contains("## Jiwon Kim, Content Strategist"));
        assert!(text.contains("- Content market research"));
        assert!(text.contains("- Content performance analyst"));
    }
}
