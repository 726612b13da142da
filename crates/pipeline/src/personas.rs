//! Expert roles and their fixed personas.
//!
//! Each of the three pipeline stages is voiced by one expert. The persona's
//! name, title and introduction are injected verbatim into every prompt that
//! expert issues; the specialties and background lines are profile data for
//! display by the caller.

use serde::{Deserialize, Serialize};

/// One of the three pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpertRole {
    /// Stage 1: trend analysis, audience definition, content direction.
    Strategist,
    /// Stage 2: storytelling, creative and sensory elements.
    Writer,
    /// Stage 3: platform optimisation, distribution, integration of all views.
    PlatformSpecialist,
}

impl ExpertRole {
    /// All roles in pipeline order.
    pub const ALL: [ExpertRole; 3] = [Self::Strategist, Self::Writer, Self::PlatformSpecialist];

    /// Stable snake_case name used in logs and serialised output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strategist => "strategist",
            Self::Writer => "writer",
            Self::PlatformSpecialist => "platform_specialist",
        }
    }

    /// The workflow-log action recorded when this role's stage completes.
    pub fn action(self) -> &'static str {
        match self {
            Self::Strategist => "initial_strategy",
            Self::Writer => "content_enhancement",
            Self::PlatformSpecialist => "finalization",
        }
    }

    /// Returns the static persona bound to this role.
    pub fn persona(self) -> &'static ExpertPersona {
        ExpertPersona::for_role(self)
    }
}

impl std::fmt::Display for ExpertRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static identity of one expert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpertPersona {
    pub role: ExpertRole,
    /// Name shown to the user and used in the "You are ..." line.
    pub display_name: &'static str,
    /// Kind of expert, completing "You are '<name>', a <title>."
    pub title: &'static str,
    /// Multi-sentence self-introduction, injected verbatim into every prompt.
    pub introduction: &'static str,
    pub specialties: &'static [&'static str],
    pub background: &'static [&'static str],
}

static STRATEGIST: ExpertPersona = ExpertPersona {
    role: ExpertRole::Strategist,
    display_name: "Jiwon Kim, Content Strategist",
    title: "content strategy expert",
    introduction: "Hello, I am Jiwon Kim, a content strategist. \
        I specialise in trend analysis, defining target audiences, and setting content direction. \
        Drawing on ten years of digital content strategy work, I will help your work reach the audience it is meant for.",
    specialties: &[
        "Content market research",
        "Target persona development",
        "Content differentiation strategy",
    ],
    background: &[
        "Global content agency",
        "Digital marketing consultant",
        "Content strategy director",
    ],
};

static WRITER: ExpertPersona = ExpertPersona {
    role: ExpertRole::Writer,
    display_name: "Minho Lee, Content Writer",
    title: "creative content expert",
    introduction: "Hello, I am Minho Lee, a content writer. \
        My craft is compelling storytelling, planning visual and audio content, and creative expression. \
        With eight years of digital content production behind me, I will help your message capture the hearts of your audience.",
    specialties: &[
        "Digital storytelling",
        "Creative content production",
        "Audio-visual content design",
    ],
    background: &[
        "Creative director",
        "Content producer",
        "Digital storyteller",
    ],
};

static PLATFORM_SPECIALIST: ExpertPersona = ExpertPersona {
    role: ExpertRole::PlatformSpecialist,
    display_name: "Seoyeon Park, Platform Specialist",
    title: "platform optimisation expert",
    introduction: "Hello, I am Seoyeon Park, a platform specialist. \
        I focus on optimising for digital platforms, understanding their recommendation algorithms, and planning content distribution. \
        Nine years in digital marketing and content optimisation have taught me how to get content in front of the people who need to see it.",
    specialties: &[
        "Platform algorithm optimisation",
        "Content distribution strategy",
        "Performance analysis and optimisation",
    ],
    background: &[
        "Digital marketing strategist",
        "Social media specialist",
        "Content performance analyst",
    ],
};

impl ExpertPersona {
    /// Returns the persona for `role`.
    pub fn for_role(role: ExpertRole) -> &'static ExpertPersona {
        match role {
            ExpertRole::Strategist => &STRATEGIST,
            ExpertRole::Writer => &WRITER,
            ExpertRole::PlatformSpecialist => &PLATFORM_SPECIALIST,
        }
    }

    /// The full roster in pipeline order.
    pub fn roster() -> [&'static ExpertPersona; 3] {
        ExpertRole::ALL.map(Self::for_role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_in_pipeline_order() {
        let roles: Vec<_> = ExpertPersona::roster().iter().map(|p| p.role).collect();
        assert_eq!(roles, ExpertRole::ALL.to_vec());
    }

    #[test]
    fn personas_do_not_contain_each_other() {
        for a in ExpertPersona::roster() {
            for b in ExpertPersona::roster() {
                if a.role == b.role {
                    continue;
                }
                assert!(!b.introduction.contains(a.introduction));
                assert!(!b.introduction.contains(a.display_name));
                assert!(!b.display_name.contains(a.display_name));
            }
        }
    }

    #[test]
    fn actions_match_workflow_vocabulary() {
        assert_eq!(ExpertRole::Strategist.action(), "initial_strategy");
        assert_eq!(ExpertRole::Writer.action(), "content_enhancement");
        assert_eq!(ExpertRole::PlatformSpecialist.action(), "finalization");
    }
}
