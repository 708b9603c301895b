use crate::{attributes::parse_attributes, ArtifactSyntax, PartialArtifact};

impl ArtifactSyntax {
    /// Extracts the last artifact block of a message that may still be
    /// streaming.
    ///
    /// Only a complete opening tag (including its `>`) counts. The body runs
    /// to the first closing tag after it, or to the end of `text` when the
    /// block is still open. The content of an open block grows monotonically
    /// as `text` grows: a trailing fragment that could be the start of the
    /// closing tag is left out until it either completes or turns out to be
    /// content.
    #[must_use]
    pub fn extract_partial(&self, text: &str) -> PartialArtifact {
        let Some(captures) = self.opening_tag().captures_iter(text).last() else {
            return PartialArtifact::default();
        };
        let (Some(tag), Some(attribute_list)) = (captures.get(0), captures.get(1)) else {
            return PartialArtifact::default();
        };

        let body = &text[tag.end()..];
        let (body, is_closed) = match body.find(self.closing_tag()) {
            Some(end) => (&body[..end], true),
            None => (self.without_closing_fragment(body), false),
        };

        PartialArtifact {
            is_inside_artifact: true,
            attributes: Some(parse_attributes(attribute_list.as_str())),
            streaming_content: Some(body.trim().to_string()),
            is_closed,
        }
    }

    /// Strips the longest suffix of `body` that is a proper prefix of the
    /// closing tag.
    fn without_closing_fragment<'a>(&self, body: &'a str) -> &'a str {
        let closing_tag = self.closing_tag();
        (1..closing_tag.len())
            .rev()
            .find(|&len| body.ends_with(&closing_tag[..len]))
            .map_or(body, |len| &body[..body.len() - len])
    }
}

/// [`ArtifactSyntax::extract_partial`] with the default syntax.
#[must_use]
pub fn extract_partial(text: &str) -> PartialArtifact {
    ArtifactSyntax::default_syntax().extract_partial(text)
}
