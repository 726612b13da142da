//! Writer templates: story structure, script, visual and audio planning.

use super::{field_dump, QuestionTemplate};
use crate::InputFields;

pub(super) fn youtube(fields: &InputFields) -> String {
    QuestionTemplate::new("Please propose a creative development plan for YouTube content:")
        .section(
            "Video composition and storyboard ideas",
            &[
                "Hook (opening) design",
                "Story structure and flow",
                "Key visual scenes",
            ],
        )
        .section(
            "Script and narration guide",
            &[
                "Script tone and style",
                "Key lines and expressions",
                "Audience engagement techniques",
            ],
        )
        .section(
            "Visual and audio elements",
            &[
                "Video style and editing techniques",
                "Music and sound design",
                "Graphics and animation",
            ],
        )
        .section(
            "Thumbnail and title planning",
            &[
                "Click-worthy thumbnail concepts",
                "Compelling title structures",
                "A/B test options",
            ],
        )
        .field("Topic/idea", fields.get_or_empty("topic"))
        .field("Goals/purpose", fields.get_or_empty("goals"))
        .field("Target viewers", fields.get_or_empty("target_audience"))
        .field("Channel style", fields.get_or_empty("channel_style"))
        .render()
}

pub(super) fn blog(fields: &InputFields) -> String {
    QuestionTemplate::new("Please propose a creative development plan for blog content:")
        .section(
            "Post structure and storytelling strategy",
            &[
                "Attention-grabbing introduction",
                "Information flow and logical structure",
                "Conclusion and call to action",
            ],
        )
        .section(
            "Content format and visual elements",
            &[
                "Section breaks and subheading strategy",
                "Use of images and graphics",
                "Infographic and visual aid ideas",
            ],
        )
        .section(
            "Reader engagement techniques",
            &[
                "Building empathy through storytelling",
                "Questions and interactive elements",
                "Insights worth sharing",
            ],
        )
        .section(
            "Title and meta content planning",
            &[
                "Click-worthy headline structures",
                "Subheadings and meta description",
                "Internal and external linking",
            ],
        )
        .field("Topic/field", fields.get_or_empty("topic"))
        .field("Goals/purpose", fields.get_or_empty("goals"))
        .field("Target readers", fields.get_or_empty("target_audience"))
        .field("Blog style", fields.get_or_empty("blog_style"))
        .render()
}

pub(super) fn instagram(fields: &InputFields) -> String {
    QuestionTemplate::new("Please propose a creative development plan for Instagram content:")
        .section(
            "Feed post creation strategy",
            &[
                "Eye-catching visual concepts",
                "Caption storytelling approach",
                "Emotional connection and empathy",
            ],
        )
        .section(
            "Story and reels content ideas",
            &[
                "Reels formats and composition",
                "Story sequences and interactive elements",
                "Use of audio and music",
            ],
        )
        .section(
            "Visual design guide",
            &[
                "Image style and editing approach",
                "Use of colour and visual elements",
                "Text overlays and graphics",
            ],
        )
        .section(
            "Engagement-driving content ideas",
            &[
                "Prompts for questions and discussion",
                "Hashtag and community participation strategy",
                "Highly shareable content types",
            ],
        )
        .field("Account topic/character", fields.get_or_empty("topic"))
        .field("Goals/purpose", fields.get_or_empty("goals"))
        .field("Target followers", fields.get_or_empty("target_audience"))
        .field("Visual style", fields.get_or_empty("visual_style"))
        .render()
}

pub(super) fn integrated(fields: &InputFields) -> String {
    QuestionTemplate::new(
        "Please propose a creative development plan for integrated content (YouTube, blog, Instagram):",
    )
    .section(
        "Core story and message",
        &[
            "A consistent storyline across platforms",
            "Per-platform variations",
            "Core message and thematic elements",
        ],
    )
    .section(
        "Per-platform creative adaptation",
        &[
            "Restructuring and repurposing content",
            "Playing to each platform's strengths",
            "Guide for visual and textual conversion",
        ],
    )
    .section(
        "Cross-platform visual identity",
        &[
            "Consistent visual elements and branding",
            "Per-platform visual variations",
            "Shared design asset ideas",
        ],
    )
    .section(
        "Content series and campaign structure",
        &[
            "Complementary series across platforms",
            "Staggered publishing and linking",
            "Integrated storytelling approach",
        ],
    )
    .field("Topic/brand", fields.get_or_empty("topic"))
    .field("Goals/purpose", fields.get_or_empty("goals"))
    .field("Target audience", fields.get_or_empty("target_audience"))
    .field("Primary platform", fields.get_or_empty("primary_platform"))
    .field("Brand style", fields.get_or_empty("brand_style"))
    .render()
}

pub(super) fn generic(label: &str, fields: &InputFields) -> String {
    QuestionTemplate::new(format!(
        "Please propose a creative development plan for the following {label} content request:"
    ))
    .text(format!("Request details:\n{}", field_dump(fields)))
    .text(
        "Describe concretely a compelling storytelling structure, visual and audio elements, an \
         emotional connection strategy, and ways to drive engagement.",
    )
    .render()
}
