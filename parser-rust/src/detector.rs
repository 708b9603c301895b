use crate::ArtifactSyntax;

impl ArtifactSyntax {
    /// Returns whether an opening tag appears anywhere in `text`, regardless
    /// of whether its block has been closed.
    #[must_use]
    pub fn detect_opening_tag(&self, text: &str) -> bool {
        self.opening_tag().is_match(text)
    }

    /// Like [`Self::detect_opening_tag`], and calls `on_detected` when an
    /// opening tag is found. The hook runs on every call that finds a tag.
    pub fn detect_opening_tag_with<F>(&self, text: &str, on_detected: F) -> bool
    where
        F: FnOnce(),
    {
        let detected = self.detect_opening_tag(text);
        if detected {
            on_detected();
        }
        detected
    }
}

/// [`ArtifactSyntax::detect_opening_tag`] with the default syntax.
#[must_use]
pub fn detect_opening_tag(text: &str) -> bool {
    ArtifactSyntax::default_syntax().detect_opening_tag(text)
}

/// [`ArtifactSyntax::detect_opening_tag_with`] with the default syntax.
pub fn detect_opening_tag_with<F>(text: &str, on_detected: F) -> bool
where
    F: FnOnce(),
{
    ArtifactSyntax::default_syntax().detect_opening_tag_with(text, on_detected)
}
