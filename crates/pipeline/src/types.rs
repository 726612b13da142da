//! Shared value types for the Creator Partner pipeline domain.
//!
//! These are the values that cross the core boundary: the service-type tag
//! and free-form input fields supplied by the caller, and the opaque stage
//! outputs handed back once all three experts have spoken.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::InputError;

// ---------------------------------------------------------------------------
// Service type
// ---------------------------------------------------------------------------

/// The kind of content the caller wants advice for.
///
/// Selects which template variant each expert renders. A label that matches
/// none of the known platforms is kept verbatim in [`ServiceType::Generic`]
/// so the fallback templates can still name it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Video content for a YouTube channel.
    #[serde(rename = "youtube")]
    YouTube,
    /// Long-form written content for a blog.
    Blog,
    /// Feed posts, stories and reels for an Instagram account.
    Instagram,
    /// A cross-platform plan covering YouTube, blog and Instagram together.
    Integrated,
    /// Any other request; carries the caller's raw label.
    Generic(String),
}

impl ServiceType {
    /// Maps a caller-supplied label onto a service type.
    ///
    /// Matching is case-insensitive and also accepts the Korean service labels
    /// (for example `유튜브`). Unknown labels never fail; they become
    /// [`ServiceType::Generic`].
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "youtube" | "유튜브" => Self::YouTube,
            "blog" | "블로그" => Self::Blog,
            "instagram" | "인스타그램" => Self::Instagram,
            "integrated" | "통합 콘텐츠" | "통합" => Self::Integrated,
            _ => Self::Generic(trimmed.to_string()),
        }
    }

    /// Returns the display label for this service type.
    pub fn label(&self) -> &str {
        match self {
            Self::YouTube => "YouTube",
            Self::Blog => "Blog",
            Self::Instagram => "Instagram",
            Self::Integrated => "Integrated",
            Self::Generic(label) => label,
        }
    }

    /// Returns `true` for the fallback variant.
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Generic(_))
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Input fields
// ---------------------------------------------------------------------------

/// Free-form named fields describing the caller's content request.
///
/// Nothing here is validated for content. Absent fields read as the empty
/// string. The map is ordered so the generic fallback template renders it
/// deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputFields(BTreeMap<String, String>);

impl InputFields {
    /// Subject of the content (idea, field, account character, or brand).
    pub const TOPIC: &'static str = "topic";
    /// What the creator wants to achieve.
    pub const GOALS: &'static str = "goals";
    /// Who the content is for.
    pub const TARGET_AUDIENCE: &'static str = "target_audience";

    /// Fields the input boundary must see before the core is invoked.
    pub const MANDATORY: [&'static str; 3] = [Self::TOPIC, Self::GOALS, Self::TARGET_AUDIENCE];

    /// Creates an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the value of `name`, or `""` when it is absent.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields supplied.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that every mandatory field is present and non-blank.
    ///
    /// This is the input boundary's check; the pipeline itself never calls it.
    pub fn require_mandatory(&self) -> Result<(), InputError> {
        let missing: Vec<String> = Self::MANDATORY
            .iter()
            .filter(|name| self.get(name).map_or(true, |v| v.trim().is_empty()))
            .map(|name| (*name).to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(InputError::MissingRequiredInput { fields: missing })
        }
    }
}

impl<K, V> FromIterator<(K, V)> for InputFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ---------------------------------------------------------------------------
// Stage outputs
// ---------------------------------------------------------------------------

/// Text returned by the generation service for one stage.
///
/// Never parsed or validated; it is only re-embedded verbatim in the next
/// stage's prompt and handed back to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageResult(String);

impl StageResult {
    /// Wraps generated text without altering it.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the stage text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the result, returning the owned text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for StageResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three stage outputs of one successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Content strategist's analysis (stage 1).
    pub strategy: StageResult,
    /// Content writer's creative development (stage 2).
    pub content: StageResult,
    /// Platform specialist's integrated final advice (stage 3).
    pub platform: StageResult,
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
