use crate::ChatResult;
use artifact_parser::{Artifact, ArtifactSyntax, Segment};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing metadata attached to an assistant message by the transport.
/// Timestamps are milliseconds since the Unix epoch. Both snake_case and
/// camelCase keys are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageMetadata {
    #[serde(alias = "reasoningStart", skip_serializing_if = "Option::is_none")]
    pub reasoning_start: Option<i64>,
    #[serde(alias = "reasoningEnd", skip_serializing_if = "Option::is_none")]
    pub reasoning_end: Option<i64>,
}

impl MessageMetadata {
    /// How long the model spent reasoning. `None` unless both timestamps are
    /// present and the end is not before the start.
    #[must_use]
    pub fn reasoning_duration(&self) -> Option<Duration> {
        let elapsed = self.reasoning_end?.checked_sub(self.reasoning_start?)?;
        u64::try_from(elapsed).ok().map(Duration::from_millis)
    }

    /// The reasoning duration in seconds with one decimal, e.g. `"2.4s"`.
    #[must_use]
    pub fn reasoning_time_label(&self) -> Option<String> {
        self.reasoning_duration()
            .map(|duration| format!("{:.1}s", duration.as_secs_f64()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A part of a chat message as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MessagePart {
    Text { text: String },
    Reasoning { text: String },
    /// Tool calls, tool results, sources and other parts this crate does not
    /// read.
    #[serde(other)]
    Other,
}

/// A chat message in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub parts: Vec<MessagePart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl ChatMessage {
    pub fn from_json(json: &str) -> ChatResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The text parts of the message, in order.
    pub fn text_parts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            MessagePart::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Segments of every text part, each part parsed on its own.
    #[must_use]
    pub fn segments(&self, syntax: &ArtifactSyntax) -> Vec<Vec<Segment>> {
        self.text_parts()
            .map(|text| syntax.parse_segments(text))
            .collect()
    }

    /// Completed artifacts across all text parts, in order.
    #[must_use]
    pub fn artifacts(&self, syntax: &ArtifactSyntax) -> Vec<Artifact> {
        let mut artifacts = Vec::new();
        for text in self.text_parts() {
            syntax.parse_segments_with(text, |artifact| artifacts.push(artifact.clone()));
        }
        artifacts
    }

    /// Words across the text parts.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text_parts().map(count_words).sum()
    }

    #[must_use]
    pub fn reasoning_time_label(&self) -> Option<String> {
        self.metadata.as_ref()?.reasoning_time_label()
    }
}

/// Counts whitespace-separated words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
