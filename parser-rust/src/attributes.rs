use crate::{ArtifactAttributes, ArtifactKind};
use once_cell::sync::Lazy;
use regex::Regex;

// Each name is looked up on its own, so a malformed neighbour cannot hide it.
// The name must start the source or follow whitespace, so `subtitle="x"`
// never satisfies a lookup for `title`.
fn attribute_pattern(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r#"(?:^|\s){}\s*=\s*"([^"]*)""#, regex::escape(name)))
}

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| attribute_pattern("identifier").expect("attribute pattern is valid"));
static TITLE: Lazy<Regex> =
    Lazy::new(|| attribute_pattern("title").expect("attribute pattern is valid"));
static TYPE: Lazy<Regex> =
    Lazy::new(|| attribute_pattern("type").expect("attribute pattern is valid"));
static LANGUAGE: Lazy<Regex> =
    Lazy::new(|| attribute_pattern("language").expect("attribute pattern is valid"));

fn captured_value<'a>(pattern: &Regex, source: &'a str) -> Option<&'a str> {
    pattern
        .captures(source)?
        .get(1)
        .map(|value| value.as_str())
}

/// Looks up the value of a double-quoted attribute by name.
/// The first declaration wins when a name is repeated. Attributes that are
/// not of the form `name="value"` are ignored.
#[must_use]
pub fn attribute_value<'a>(source: &'a str, name: &str) -> Option<&'a str> {
    match name {
        "identifier" => captured_value(&IDENTIFIER, source),
        "title" => captured_value(&TITLE, source),
        "type" => captured_value(&TYPE, source),
        "language" => captured_value(&LANGUAGE, source),
        _ => {
            let pattern = attribute_pattern(name).ok()?;
            captured_value(&pattern, source)
        }
    }
}

/// Parses the attribute list of an opening tag (the text between the tag
/// name and `>`). Declaration order does not matter.
#[must_use]
pub fn parse_attributes(source: &str) -> ArtifactAttributes {
    ArtifactAttributes {
        identifier: captured_value(&IDENTIFIER, source)
            .unwrap_or_default()
            .to_string(),
        title: captured_value(&TITLE, source)
            .unwrap_or_default()
            .to_string(),
        kind: captured_value(&TYPE, source)
            .map(ArtifactKind::from)
            .unwrap_or_default(),
        language: captured_value(&LANGUAGE, source).map(str::to_string),
    }
}
