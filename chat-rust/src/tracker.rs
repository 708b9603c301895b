use crate::{ArtifactEvent, FinishedMessage, TrackerOptions};
use artifact_parser::{Artifact, ArtifactAttributes, ArtifactSyntax, PartialArtifact, Segment};

/// Follows the artifacts of one assistant message as its text streams in.
///
/// The whole accumulated text is re-parsed on every delta. The tracker only
/// remembers what it has already reported so that each transition is
/// emitted once.
#[derive(Debug, Clone)]
pub struct ArtifactTracker {
    options: TrackerOptions,
    text: String,
    detected: bool,
    /// Completed blocks reported so far, in document order.
    artifacts: Vec<Artifact>,
    last_partial: Option<(ArtifactAttributes, String)>,
}

impl ArtifactTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(TrackerOptions::default())
    }

    #[must_use]
    pub fn with_options(options: TrackerOptions) -> Self {
        Self {
            options,
            text: String::new(),
            detected: false,
            artifacts: Vec::new(),
            last_partial: None,
        }
    }

    /// Appends a text delta and returns the transitions it caused.
    pub fn push(&mut self, delta: &str) -> Vec<ArtifactEvent> {
        self.text.push_str(delta);

        let mut events = Vec::new();

        if !self.detected {
            if !self.syntax().detect_opening_tag(&self.text) {
                return events;
            }
            self.detected = true;
            tracing::debug!(
                tag_name = self.syntax().tag_name(),
                "artifact opening tag detected"
            );
            events.push(ArtifactEvent::Detected);
        }

        for artifact in self.collect_new_artifacts() {
            tracing::debug!(
                identifier = %artifact.attributes.identifier,
                kind = %artifact.attributes.kind,
                "artifact completed"
            );
            self.artifacts.push(artifact.clone());
            self.last_partial = None;
            events.push(ArtifactEvent::Completed { artifact });
        }

        if self.options.emit_partial {
            if let Some(event) = self.partial_event(!delta.is_empty()) {
                events.push(event);
            }
        }

        events
    }

    /// The text accumulated so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether an opening tag has been seen in this message.
    #[must_use]
    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// Completed artifacts in document order.
    #[must_use]
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// The state of the last block of the accumulated text.
    #[must_use]
    pub fn partial(&self) -> PartialArtifact {
        self.syntax().extract_partial(&self.text)
    }

    /// Segments of the accumulated text. An unclosed trailing block is part
    /// of the prose until its closing tag arrives.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        self.syntax().parse_segments(&self.text)
    }

    /// Ends tracking and returns the final segments and completed artifacts
    /// of the message.
    #[must_use]
    pub fn finish(self) -> FinishedMessage {
        FinishedMessage {
            segments: self.segments(),
            artifacts: self.artifacts,
        }
    }

    /// Forgets the accumulated text, e.g. when the message is regenerated.
    pub fn reset(&mut self) {
        self.text.clear();
        self.detected = false;
        self.artifacts.clear();
        self.last_partial = None;
    }

    fn syntax(&self) -> &ArtifactSyntax {
        &self.options.syntax
    }

    fn collect_new_artifacts(&self) -> Vec<Artifact> {
        let blocks = self.syntax().scan_blocks(&self.text);

        blocks
            .into_iter()
            .skip(self.artifacts.len())
            .map(|block| block.to_artifact(&self.text))
            .collect()
    }

    fn partial_event(&mut self, text_grew: bool) -> Option<ArtifactEvent> {
        let partial = self.syntax().extract_partial(&self.text);
        if !partial.is_inside_artifact || partial.is_closed {
            return None;
        }

        let attributes = partial.attributes?;
        let content = partial.streaming_content.unwrap_or_default();

        let repeat = self.options.emit_unchanged_partial && text_grew;
        let unchanged = !repeat
            && self
                .last_partial
                .as_ref()
                .is_some_and(|(last_attributes, last_content)| {
                    *last_attributes == attributes && *last_content == content
                });
        if unchanged {
            return None;
        }

        tracing::trace!(
            identifier = %attributes.identifier,
            content_len = content.len(),
            "artifact content streaming"
        );
        self.last_partial = Some((attributes.clone(), content.clone()));

        Some(ArtifactEvent::Partial {
            attributes,
            content,
        })
    }
}

impl Default for ArtifactTracker {
    fn default() -> Self {
        Self::new()
    }
}
