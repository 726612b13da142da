//! Platform specialist templates: algorithm optimisation, publishing, KPIs.

use super::{field_dump, QuestionTemplate};
use crate::InputFields;

pub(super) fn youtube(fields: &InputFields) -> String {
    QuestionTemplate::new(
        "Please propose a platform optimisation and distribution strategy for YouTube content:",
    )
    .section(
        "YouTube algorithm optimisation",
        &[
            "Title, description and tag optimisation",
            "Improving watch time and engagement",
            "Making use of the recommendation algorithm",
        ],
    )
    .section(
        "Publishing and promotion plan",
        &[
            "Best upload timing and cadence",
            "Driving early engagement",
            "Cross-promotion",
        ],
    )
    .section(
        "Data-driven improvement",
        &[
            "Key performance indicators (KPIs)",
            "Analytics monitoring and insight discovery",
            "A/B testing approach",
        ],
    )
    .section(
        "Community building and growth",
        &[
            "Comment management and viewer engagement",
            "Gaining and retaining subscribers",
            "Expanding the content ecosystem",
        ],
    )
    .field("Topic/idea", fields.get_or_empty("topic"))
    .field("Goals/purpose", fields.get_or_empty("goals"))
    .field("Target viewers", fields.get_or_empty("target_audience"))
    .field("Channel size", fields.get_or_empty("channel_size"))
    .render()
}

pub(super) fn blog(fields: &InputFields) -> String {
    QuestionTemplate::new(
        "Please propose a platform optimisation and distribution strategy for blog content:",
    )
    .section(
        "SEO optimisation",
        &[
            "Keyword research and usage",
            "On-page SEO elements",
            "Internal and external linking",
        ],
    )
    .section(
        "Publishing and distribution plan",
        &[
            "Best publishing timing and cadence",
            "Social media sharing strategy",
            "Email marketing and newsletters",
        ],
    )
    .section(
        "Analytics and performance optimisation",
        &[
            "Traffic and engagement metrics",
            "Conversion rate optimisation",
            "Updating and repurposing content",
        ],
    )
    .section(
        "Building a reader community",
        &[
            "Comment management and reader engagement",
            "Developing a loyal readership",
            "Collaborations and guest posts",
        ],
    )
    .field("Topic/field", fields.get_or_empty("topic"))
    .field("Goals/purpose", fields.get_or_empty("goals"))
    .field("Target readers", fields.get_or_empty("target_audience"))
    .field("Blog platform", fields.get_or_empty("blog_platform"))
    .render()
}

pub(super) fn instagram(fields: &InputFields) -> String {
    QuestionTemplate::new(
        "Please propose a platform optimisation and distribution strategy for Instagram content:",
    )
    .section(
        "Instagram algorithm optimisation",
        &[
            "Hashtag strategy and optimisation",
            "Caption and call-to-action (CTA) optimisation",
            "Improving Explore page exposure",
        ],
    )
    .section(
        "Posting and engagement strategy",
        &[
            "Best posting times and frequency",
            "Combining stories, reels and feed",
            "Tactics to raise engagement",
        ],
    )
    .section(
        "Growth and reach",
        &[
            "Gaining and retaining followers",
            "Collaborations and influencers",
            "Cross-promotion opportunities",
        ],
    )
    .section(
        "Analytics and optimisation framework",
        &[
            "Monitoring key performance indicators",
            "Insight-driven content adjustments",
            "Continuous experimentation",
        ],
    )
    .field("Account topic/character", fields.get_or_empty("topic"))
    .field("Goals/purpose", fields.get_or_empty("goals"))
    .field("Target followers", fields.get_or_empty("target_audience"))
    .field("Account size", fields.get_or_empty("account_size"))
    .render()
}

pub(super) fn integrated(fields: &InputFields) -> String {
    QuestionTemplate::new(
        "Please propose a platform optimisation and distribution strategy for integrated content (YouTube, blog, Instagram):",
    )
    .section(
        "Integrated publishing strategy",
        &[
            "Best publishing order and timing per platform",
            "Cross-platform promotion flow",
            "Distribution plan per content format",
        ],
    )
    .section(
        "Maximising cross-platform synergy",
        &[
            "Optimising traffic and audience movement",
            "Making the most of each platform's strengths",
            "Designing engagement and conversion paths",
        ],
    )
    .section(
        "Integrated analytics",
        &[
            "Measuring performance across platforms",
            "Shared KPIs and monitoring",
            "Data-driven resource allocation",
        ],
    )
    .section(
        "Long-term growth roadmap",
        &[
            "Staged growth goals and strategy",
            "Expanding the content ecosystem",
            "Mechanisms for channels to reinforce each other",
        ],
    )
    .field("Topic/brand", fields.get_or_empty("topic"))
    .field("Goals/purpose", fields.get_or_empty("goals"))
    .field("Target audience", fields.get_or_empty("target_audience"))
    .field("Primary platform", fields.get_or_empty("primary_platform"))
    .field("Current channel status", fields.get_or_empty("current_status"))
    .render()
}

pub(super) fn generic(label: &str, fields: &InputFields) -> String {
    QuestionTemplate::new(format!(
        "Please propose a platform optimisation and distribution strategy for the following {label} content request:"
    ))
    .text(format!("Request details:\n{}", field_dump(fields)))
    .text(
        "Describe concretely platform optimisation, publishing and distribution strategy, \
         performance measurement, and community building.",
    )
    .render()
}
