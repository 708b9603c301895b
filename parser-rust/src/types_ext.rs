use crate::{
    Artifact, ArtifactAttributes, ArtifactKind, ArtifactSegment, PartialArtifact, Segment,
    TextSegment,
};
use std::{fmt, ops::Range};

impl ArtifactKind {
    /// The MIME-like value used for this kind in the `type` attribute.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Code => "application/vnd.ant.code",
            Self::HtmlDocument => "text/html",
            Self::SvgImage => "image/svg+xml",
            Self::Diagram => "application/vnd.ant.mermaid",
            Self::FormattedText => "text/markdown",
            Self::InteractiveComponent => "application/vnd.ant.react",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Short label for the viewer badge. Code artifacts show their language
    /// when one is declared.
    #[must_use]
    pub fn display_name<'a>(&self, language: Option<&'a str>) -> &'a str {
        match self {
            Self::Code => match language {
                Some(language) if !language.is_empty() => language,
                _ => "Code",
            },
            Self::HtmlDocument => "HTML",
            Self::InteractiveComponent => "React Component",
            Self::SvgImage => "SVG",
            Self::Diagram => "Mermaid Diagram",
            Self::FormattedText => "Markdown",
            Self::Unknown(_) => "Artifact",
        }
    }

    /// Whether the content can be shown as a rendered preview rather than as
    /// source.
    #[must_use]
    pub fn is_previewable(&self) -> bool {
        matches!(
            self,
            Self::HtmlDocument | Self::SvgImage | Self::InteractiveComponent
        )
    }
}

impl Default for ArtifactKind {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<&str> for ArtifactKind {
    fn from(value: &str) -> Self {
        match value {
            "application/vnd.ant.code" => Self::Code,
            "text/html" => Self::HtmlDocument,
            "image/svg+xml" => Self::SvgImage,
            "application/vnd.ant.mermaid" => Self::Diagram,
            "text/markdown" => Self::FormattedText,
            "application/vnd.ant.react" => Self::InteractiveComponent,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ArtifactKind {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Unknown(_) => Self::Unknown(value),
            known => known,
        }
    }
}

impl From<ArtifactKind> for String {
    fn from(value: ArtifactKind) -> Self {
        match value {
            ArtifactKind::Unknown(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ArtifactAttributes {
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        kind: impl Into<ArtifactKind>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            kind: kind.into(),
            language: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Badge label for the viewer header.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.kind.display_name(self.language.as_deref())
    }
}

impl Artifact {
    pub fn new(attributes: ArtifactAttributes, content: impl Into<String>) -> Self {
        Self {
            attributes,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.attributes.identifier
    }
}

impl Segment {
    pub fn text(text: impl Into<String>, span: Range<usize>) -> Self {
        Self::Text(TextSegment {
            text: text.into(),
            span,
        })
    }

    pub fn artifact(artifact: Artifact, span: Range<usize>, body_span: Range<usize>) -> Self {
        Self::Artifact(ArtifactSegment {
            artifact,
            span,
            body_span,
        })
    }

    /// Byte range of the source text this segment covers.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Text(segment) => segment.span.clone(),
            Self::Artifact(segment) => segment.span.clone(),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(segment) => Some(segment.text.as_str()),
            Self::Artifact(_) => None,
        }
    }

    #[must_use]
    pub fn as_artifact(&self) -> Option<&Artifact> {
        match self {
            Self::Artifact(segment) => Some(&segment.artifact),
            Self::Text(_) => None,
        }
    }
}

impl PartialArtifact {
    /// The artifact as it looks so far. `None` when no opening tag was found.
    #[must_use]
    pub fn to_artifact(&self) -> Option<Artifact> {
        let attributes = self.attributes.clone()?;
        Some(Artifact {
            attributes,
            content: self.streaming_content.clone().unwrap_or_default(),
        })
    }
}
