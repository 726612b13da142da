//! Declarative builder for question templates.

use std::fmt::Write as _;

/// A structured question: a heading, labelled user fields, numbered analysis
/// sections, and an optional free-text request. Parts render in the order
/// they were added.
#[derive(Debug, Clone, Default)]
pub struct QuestionTemplate {
    blocks: Vec<Block>,
    section_count: usize,
}

#[derive(Debug, Clone)]
enum Block {
    Text(String),
    Fields(Vec<(String, String)>),
    Section {
        number: usize,
        title: String,
        points: Vec<String>,
    },
}

impl QuestionTemplate {
    /// Starts a template with the opening request line.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            blocks: vec![Block::Text(heading.into())],
            section_count: 0,
        }
    }

    /// Adds a labelled user field. Consecutive fields render as one block.
    #[must_use]
    pub fn field(mut self, label: &str, value: &str) -> Self {
        let entry = (label.to_string(), value.to_string());
        match self.blocks.last_mut() {
            Some(Block::Fields(fields)) => fields.push(entry),
            _ => self.blocks.push(Block::Fields(vec![entry])),
        }
        self
    }

    /// Adds the next numbered section with its bullet points.
    #[must_use]
    pub fn section(mut self, title: &str, points: &[&str]) -> Self {
        self.section_count += 1;
        self.blocks.push(Block::Section {
            number: self.section_count,
            title: title.to_string(),
            points: points.iter().map(|p| (*p).to_string()).collect(),
        });
        self
    }

    /// Adds a free-text paragraph.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Text(text.into()));
        self
    }

    /// Joins the blocks, separated by blank lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match block {
                Block::Text(text) => {
                    let _ = writeln!(out, "{text}");
                }
                Block::Fields(fields) => {
                    for (label, value) in fields {
                        let _ = writeln!(out, "{label}: {value}");
                    }
                }
                Block::Section {
                    number,
                    title,
                    points,
                } => {
                    let _ = writeln!(out, "{number}. {title}");
                    for point in points {
                        let _ = writeln!(out, "   - {point}");
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_blocks_in_insertion_order() {
        let rendered = QuestionTemplate::new("Plan this:")
            .field("Topic", "bread")
            .field("Goals", "sell more")
            .section("Market", &["size", "trend"])
            .section("Audience", &[])
            .text("Be concrete.")
            .render();

        assert_eq!(
            rendered,
            "Plan this:\n\nTopic: bread\nGoals: sell more\n\n1. Market\n   - size\n   - trend\n\n2. Audience\n\nBe concrete.\n"
        );
    }
}
