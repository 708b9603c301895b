use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Kind of content an artifact carries, as declared by the `type` attribute
/// of its opening tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArtifactKind {
    /// Source code. `application/vnd.ant.code`
    Code,
    /// A full HTML document. `text/html`
    HtmlDocument,
    /// `image/svg+xml`
    SvgImage,
    /// A Mermaid diagram. `application/vnd.ant.mermaid`
    Diagram,
    /// Markdown text. `text/markdown`
    FormattedText,
    /// A React component. `application/vnd.ant.react`
    InteractiveComponent,
    /// A `type` value that is not recognized, kept verbatim. A missing `type`
    /// attribute is represented as `Unknown` with an empty string.
    Unknown(String),
}

/// Attributes declared on an artifact opening tag.
/// Missing `identifier` and `title` default to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ArtifactAttributes {
    /// Stable key of the logical artifact within a message. Used to tell a
    /// revision of an existing artifact apart from a new one.
    pub identifier: String,
    /// Display label.
    pub title: String,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "utoipa", schema(value_type = String))]
    pub kind: ArtifactKind,
    /// The programming language of a code artifact. `None` when the
    /// attribute was not declared, `Some("")` when it was declared empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// An artifact block with its trimmed body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Artifact {
    #[serde(flatten)]
    pub attributes: ArtifactAttributes,
    /// The text between the opening and closing tags, with leading and
    /// trailing whitespace removed.
    pub content: String,
}

/// A contiguous span of a message classified as prose or as a completed
/// artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Segment {
    Text(TextSegment),
    Artifact(ArtifactSegment),
}

/// Conversational text outside any artifact block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct TextSegment {
    pub text: String,
    /// Byte range of the source text this segment was taken from, before
    /// trimming.
    #[serde(skip)]
    pub span: Range<usize>,
}

/// A completed artifact block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ArtifactSegment {
    pub artifact: Artifact,
    /// Byte range from the start of the opening tag to the end of the closing
    /// tag.
    #[serde(skip)]
    pub span: Range<usize>,
    /// Byte range of the untrimmed body between the tags.
    #[serde(skip)]
    pub body_span: Range<usize>,
}

/// The state of the last artifact block in a possibly incomplete message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct PartialArtifact {
    /// Whether a complete opening tag has been seen.
    pub is_inside_artifact: bool,
    /// Attributes of the last opening tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ArtifactAttributes>,
    /// The trimmed body received so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streaming_content: Option<String>,
    /// Whether the closing tag of the last block has already arrived.
    #[serde(default)]
    pub is_closed: bool,
}
