//! Strategist templates: market, audience and differentiation analysis.

use super::{field_dump, QuestionTemplate};
use crate::InputFields;

pub(super) fn youtube(fields: &InputFields) -> String {
    QuestionTemplate::new("Please build a strategy for the following YouTube content idea:")
        .field("Topic/idea", fields.get_or_empty("topic"))
        .field("Goals/purpose", fields.get_or_empty("goals"))
        .field("Target viewers", fields.get_or_empty("target_audience"))
        .text("Provide a YouTube content strategy that covers:")
        .section("Content marketability and trend analysis", &[])
        .section("Detailed target viewer persona and needs", &[])
        .section("Analysis of similar content and differentiation strategy", &[])
        .section("Core message and value proposition", &[])
        .section("Proposed series/episode structure", &[])
        .section("Viewer engagement strategy", &[])
        .render()
}

pub(super) fn blog(fields: &InputFields) -> String {
    QuestionTemplate::new("Please build a strategy for the following blog content idea:")
        .field("Topic/field", fields.get_or_empty("topic"))
        .field("Goals/purpose", fields.get_or_empty("goals"))
        .field("Target readers", fields.get_or_empty("target_audience"))
        .text("Write a blog content strategy that covers:")
        .section("Blog market and niche analysis", &[])
        .section("Target reader persona and interests", &[])
        .section("Key competing blogs and points of differentiation", &[])
        .section("Core topic clusters and content pillars", &[])
        .section("Balance between evergreen and timely content", &[])
        .section("Direction for SEO and reader acquisition", &[])
        .render()
}

pub(super) fn instagram(fields: &InputFields) -> String {
    QuestionTemplate::new("Please build a strategy for the following Instagram content idea:")
        .field("Account topic/character", fields.get_or_empty("topic"))
        .field("Goals/purpose", fields.get_or_empty("goals"))
        .field("Target followers", fields.get_or_empty("target_audience"))
        .text("Present the Instagram content strategy in this structure:")
        .section(
            "Instagram trends and algorithm analysis",
            &[
                "Currently popular content types",
                "Latest Instagram algorithm considerations",
                "High-engagement content patterns",
            ],
        )
        .section(
            "Visual identity and branding strategy",
            &[
                "Colour palette and visual consistency",
                "Grid/feed composition concept",
                "How to use stories and reels",
            ],
        )
        .section(
            "Content pillars and topic categories",
            &[
                "Core content categories",
                "Recurring series ideas",
                "Engagement-driving content types",
            ],
        )
        .render()
}

pub(super) fn integrated(fields: &InputFields) -> String {
    QuestionTemplate::new(
        "Please build an integrated content strategy (YouTube, blog, Instagram) for the following:",
    )
    .field("Topic/brand", fields.get_or_empty("topic"))
    .field("Goals/purpose", fields.get_or_empty("goals"))
    .field("Target audience", fields.get_or_empty("target_audience"))
    .field("Primary platform", fields.get_or_empty("primary_platform"))
    .text("Present the integrated content strategy in this structure:")
    .section(
        "Cross-platform brand identity",
        &[
            "Consistent brand message and tone",
            "Per-platform branding variations",
            "Key points of differentiation",
        ],
    )
    .section(
        "Content ecosystem design",
        &[
            "Role of each platform",
            "Content repurposing strategy",
            "How the platforms link to each other",
        ],
    )
    .section(
        "Integrated audience journey",
        &[
            "Acquisition and conversion paths",
            "Target audience segment per platform",
            "Cross-promotion strategy",
        ],
    )
    .render()
}

pub(super) fn generic(label: &str, fields: &InputFields) -> String {
    QuestionTemplate::new(format!(
        "Please build a strategy for the following {label} content request:"
    ))
    .text(format!("Request details:\n{}", field_dump(fields)))
    .text(
        "Provide a comprehensive strategy that includes content market analysis, target audience \
         definition, differentiation strategy, and core content direction.",
    )
    .render()
}
