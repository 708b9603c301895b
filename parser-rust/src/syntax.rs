use crate::{SyntaxError, SyntaxResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Tag name emitted by the upstream model for artifact blocks.
pub const DEFAULT_TAG_NAME: &str = "antArtifact";

static DEFAULT_SYNTAX: Lazy<ArtifactSyntax> = Lazy::new(|| {
    ArtifactSyntax::new(DEFAULT_TAG_NAME).expect("default artifact tag name is valid")
});

/// The delimiters that bound an artifact block, derived from a tag name.
///
/// An opening delimiter is `<` + tag name + whitespace + attribute list +
/// `>`. The closing delimiter is the literal `</` + tag name + `>`.
#[derive(Debug, Clone)]
pub struct ArtifactSyntax {
    tag_name: String,
    opening_tag: Regex,
    closing_tag: String,
}

impl ArtifactSyntax {
    /// Creates the syntax for a custom tag name.
    ///
    /// # Errors
    /// Returns an error if the tag name is empty, does not start with an
    /// ASCII letter, or contains characters other than ASCII alphanumerics,
    /// `-`, `_`, `:` and `.`.
    pub fn new(tag_name: &str) -> SyntaxResult<Self> {
        if !is_valid_tag_name(tag_name) {
            return Err(SyntaxError::InvalidTagName(tag_name.to_string()));
        }

        let opening_tag = Regex::new(&format!(r"<{}\s+([^>]*)>", regex::escape(tag_name)))?;
        tracing::debug!(tag_name, "compiled artifact syntax");

        Ok(Self {
            tag_name: tag_name.to_string(),
            opening_tag,
            closing_tag: format!("</{tag_name}>"),
        })
    }

    /// The shared syntax for [`DEFAULT_TAG_NAME`].
    #[must_use]
    pub fn default_syntax() -> &'static Self {
        &DEFAULT_SYNTAX
    }

    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    #[must_use]
    pub fn closing_tag(&self) -> &str {
        &self.closing_tag
    }

    pub(crate) fn opening_tag(&self) -> &Regex {
        &self.opening_tag
    }
}

impl Default for ArtifactSyntax {
    fn default() -> Self {
        Self::default_syntax().clone()
    }
}

fn is_valid_tag_name(tag_name: &str) -> bool {
    let mut chars = tag_name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        }
        _ => false,
    }
}
