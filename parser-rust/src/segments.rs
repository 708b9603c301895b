use crate::{attributes::parse_attributes, Artifact, ArtifactSyntax, Segment};
use std::ops::Range;

/// Byte ranges of one closed artifact block in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactBlock {
    /// The whole opening tag, `<` through `>`.
    pub opening_tag: Range<usize>,
    /// The attribute list inside the opening tag.
    pub attributes: Range<usize>,
    /// The untrimmed body between the tags.
    pub body: Range<usize>,
    /// The closing tag.
    pub closing_tag: Range<usize>,
}

impl ArtifactBlock {
    /// From the start of the opening tag to the end of the closing tag.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.opening_tag.start..self.closing_tag.end
    }

    /// Builds the artifact for this block. `text` must be the text the block
    /// was scanned from.
    #[must_use]
    pub fn to_artifact(&self, text: &str) -> Artifact {
        Artifact {
            attributes: parse_attributes(&text[self.attributes.clone()]),
            content: text[self.body.clone()].trim().to_string(),
        }
    }
}

impl ArtifactSyntax {
    /// Finds every closed artifact block in `text`, in document order.
    ///
    /// Blocks do not overlap. The first closing tag after an opening tag ends
    /// the block, so content cannot contain the literal closing tag.
    #[must_use]
    pub fn scan_blocks(&self, text: &str) -> Vec<ArtifactBlock> {
        let mut blocks = Vec::new();
        let mut cursor = 0;

        while let Some(captures) = self.opening_tag().captures_at(text, cursor) {
            let (Some(tag), Some(attributes)) = (captures.get(0), captures.get(1)) else {
                break;
            };
            // Any later opening tag would have no closing tag after it either.
            let Some(offset) = text[tag.end()..].find(self.closing_tag()) else {
                break;
            };

            let closing_start = tag.end() + offset;
            let closing_end = closing_start + self.closing_tag().len();
            blocks.push(ArtifactBlock {
                opening_tag: tag.range(),
                attributes: attributes.range(),
                body: tag.end()..closing_start,
                closing_tag: closing_start..closing_end,
            });
            cursor = closing_end;
        }

        blocks
    }

    /// Splits a message into prose and completed artifact segments.
    #[must_use]
    pub fn parse_segments(&self, text: &str) -> Vec<Segment> {
        self.parse_segments_with(text, |_| {})
    }

    /// Splits a message into prose and completed artifact segments, calling
    /// `on_artifact_found` for each artifact in document order before
    /// returning.
    ///
    /// Whitespace-only prose between blocks is dropped and the remaining prose
    /// is trimmed. A message without any closed block is returned as a single
    /// untrimmed prose segment, which includes the empty message.
    pub fn parse_segments_with<F>(&self, text: &str, mut on_artifact_found: F) -> Vec<Segment>
    where
        F: FnMut(&Artifact),
    {
        let blocks = self.scan_blocks(text);
        if blocks.is_empty() {
            return vec![Segment::text(text, 0..text.len())];
        }

        let mut segments = Vec::with_capacity(blocks.len() * 2 + 1);
        let mut last_index = 0;

        for block in blocks {
            push_prose(&mut segments, text, last_index..block.opening_tag.start);

            let artifact = block.to_artifact(text);
            tracing::trace!(
                identifier = %artifact.attributes.identifier,
                kind = %artifact.attributes.kind,
                content_len = artifact.content.len(),
                "artifact block closed"
            );

            on_artifact_found(&artifact);

            last_index = block.closing_tag.end;
            segments.push(Segment::artifact(artifact, block.span(), block.body));
        }

        push_prose(&mut segments, text, last_index..text.len());
        segments
    }
}

fn push_prose(segments: &mut Vec<Segment>, text: &str, span: Range<usize>) {
    let prose = text[span.clone()].trim();
    if !prose.is_empty() {
        segments.push(Segment::text(prose, span));
    }
}

/// [`ArtifactSyntax::scan_blocks`] with the default syntax.
#[must_use]
pub fn scan_blocks(text: &str) -> Vec<ArtifactBlock> {
    ArtifactSyntax::default_syntax().scan_blocks(text)
}

/// [`ArtifactSyntax::parse_segments`] with the default syntax.
#[must_use]
pub fn parse_segments(text: &str) -> Vec<Segment> {
    ArtifactSyntax::default_syntax().parse_segments(text)
}

/// [`ArtifactSyntax::parse_segments_with`] with the default syntax.
pub fn parse_segments_with<F>(text: &str, on_artifact_found: F) -> Vec<Segment>
where
    F: FnMut(&Artifact),
{
    ArtifactSyntax::default_syntax().parse_segments_with(text, on_artifact_found)
}
