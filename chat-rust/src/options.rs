use crate::ChatResult;
use artifact_parser::ArtifactSyntax;

/// Options for tracking artifacts in a message.
/// # Default Values
/// - `syntax`: the `antArtifact` tag
/// - `emit_partial`: `true`
/// - `emit_unchanged_partial`: `false`
#[derive(Debug, Clone)]
pub struct TrackerOptions {
    /// The delimiters artifact blocks are written with.
    pub syntax: ArtifactSyntax,
    /// Whether to emit `Partial` events while a block is streaming. When
    /// disabled, only detection and completion are reported.
    pub emit_partial: bool,
    /// Whether a delta inside a streaming block emits a `Partial` event even
    /// when the trimmed content is unchanged, e.g. when only whitespace or
    /// part of the closing tag arrived.
    pub emit_unchanged_partial: bool,
}

impl TrackerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntax: ArtifactSyntax::default(),
            emit_partial: true,
            emit_unchanged_partial: false,
        }
    }

    #[must_use]
    pub fn with_syntax(mut self, syntax: ArtifactSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Uses artifact blocks written with a custom tag name.
    pub fn with_tag_name(self, tag_name: &str) -> ChatResult<Self> {
        Ok(self.with_syntax(ArtifactSyntax::new(tag_name)?))
    }

    #[must_use]
    pub fn with_emit_partial(mut self, emit_partial: bool) -> Self {
        self.emit_partial = emit_partial;
        self
    }

    #[must_use]
    pub fn with_emit_unchanged_partial(mut self, emit_unchanged_partial: bool) -> Self {
        self.emit_unchanged_partial = emit_unchanged_partial;
        self
    }
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self::new()
    }
}
