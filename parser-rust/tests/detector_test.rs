use artifact_parser::*;

#[test]
fn detects_an_opening_tag_without_a_closing_tag() {
    assert!(detect_opening_tag(
        "I'll build that.\n<antArtifact identifier=\"todo\" type=\"text/html\" title=\"Todo\">"
    ));
}

#[test]
fn detects_a_complete_block() {
    assert!(detect_opening_tag(
        "<antArtifact identifier=\"a\">body</antArtifact>"
    ));
}

#[test]
fn ignores_text_without_a_complete_opening_tag() {
    for text in [
        "",
        "no markup here",
        "<antArtifact identifier=\"a\"",
        "<antArtifact>",
        "</antArtifact>",
        "<artifact identifier=\"a\">",
    ] {
        assert!(!detect_opening_tag(text), "detected in {text:?}");
    }
}

#[test]
fn hook_fires_only_on_detection() {
    let mut fired = 0;

    assert!(!detect_opening_tag_with("Thinking", || fired += 1));
    assert_eq!(fired, 0);

    let text = "Thinking <antArtifact identifier=\"a\">";
    assert!(detect_opening_tag_with(text, || fired += 1));
    assert!(detect_opening_tag_with(text, || fired += 1));
    assert_eq!(fired, 2);
}

#[test]
fn custom_syntax_detection() {
    let syntax = ArtifactSyntax::new("my-artifact").expect("valid tag name");

    assert!(syntax.detect_opening_tag("<my-artifact title=\"x\">"));
    assert!(!syntax.detect_opening_tag("<antArtifact title=\"x\">"));
    assert_eq!(syntax.tag_name(), "my-artifact");
}

#[test]
fn whitespace_before_the_bracket_opens_a_block_without_attributes() {
    let text = "<antArtifact >plain</antArtifact>";

    assert!(detect_opening_tag(text));
    let segments = parse_segments(text);
    assert_eq!(segments.len(), 1);
    let artifact = segments[0].as_artifact().expect("artifact segment");
    assert_eq!(artifact.attributes, ArtifactAttributes::default());
    assert_eq!(artifact.content, "plain");
    assert!(extract_partial("<antArtifact >pl").is_inside_artifact);
}
