use artifact_parser::*;
use serde_json::json;

#[test]
fn parses_attributes_in_any_order() {
    let expected = ArtifactAttributes::new("I", "T", "text/html");

    assert_eq!(parse_attributes(r#"identifier="I" title="T" type="text/html""#), expected);
    assert_eq!(parse_attributes(r#"type="text/html" title="T" identifier="I""#), expected);
    assert_eq!(parse_attributes("title=\"T\"\n  type=\"text/html\"\tidentifier=\"I\""), expected);
}

#[test]
fn names_are_matched_whole() {
    let attributes = parse_attributes(r#"subtitle="wrong" title="right" prototype="x""#);

    assert_eq!(attributes.title, "right");
    assert_eq!(attributes.kind, ArtifactKind::default());
}

#[test]
fn first_declaration_wins() {
    assert_eq!(
        attribute_value(r#"title="one" title="two""#, "title"),
        Some("one")
    );
}

#[test]
fn malformed_attributes_are_skipped() {
    let attributes = parse_attributes(r#"identifier=unquoted title = "Spaced" type="#);

    assert_eq!(attributes.identifier, "");
    assert_eq!(attributes.title, "Spaced");
    assert_eq!(attributes.kind.as_str(), "");
    assert_eq!(attributes.language, None);
}

#[test]
fn malformed_attribute_does_not_hide_its_neighbours() {
    let attributes = parse_attributes(r#"title="unterminated identifier="i" type="text/html""#);

    assert_eq!(attributes.identifier, "i");
    assert_eq!(attributes.kind, ArtifactKind::HtmlDocument);
    assert_eq!(
        attribute_value(r#"title=oops identifier="i""#, "identifier"),
        Some("i")
    );
    assert_eq!(
        attribute_value(r#"data-id="1" title=oops data-id="2""#, "data-id"),
        Some("1")
    );
}

#[test]
fn values_keep_inner_whitespace_and_symbols() {
    let attributes = parse_attributes(r#"title="  Tic-tac-toe: v2 / final  ""#);
    assert_eq!(attributes.title, "  Tic-tac-toe: v2 / final  ");
}

#[test]
fn kinds_map_from_declared_types() {
    let cases = [
        ("application/vnd.ant.code", ArtifactKind::Code),
        ("text/html", ArtifactKind::HtmlDocument),
        ("image/svg+xml", ArtifactKind::SvgImage),
        ("application/vnd.ant.mermaid", ArtifactKind::Diagram),
        ("text/markdown", ArtifactKind::FormattedText),
        ("application/vnd.ant.react", ArtifactKind::InteractiveComponent),
        ("application/pdf", ArtifactKind::Unknown("application/pdf".to_string())),
    ];

    for (declared, kind) in cases {
        assert_eq!(ArtifactKind::from(declared), kind);
        assert_eq!(kind.as_str(), declared);
    }
}

#[test]
fn display_names_follow_the_kind() {
    let code = ArtifactAttributes::new("a", "A", ArtifactKind::Code);
    assert_eq!(code.display_name(), "Code");
    assert_eq!(code.with_language("typescript").display_name(), "typescript");

    assert_eq!(ArtifactKind::HtmlDocument.display_name(None), "HTML");
    assert_eq!(ArtifactKind::InteractiveComponent.display_name(None), "React Component");
    assert_eq!(ArtifactKind::SvgImage.display_name(None), "SVG");
    assert_eq!(ArtifactKind::Diagram.display_name(None), "Mermaid Diagram");
    assert_eq!(ArtifactKind::FormattedText.display_name(None), "Markdown");
    assert_eq!(ArtifactKind::default().display_name(Some("rust")), "Artifact");
}

#[test]
fn only_rendered_kinds_are_previewable() {
    assert!(ArtifactKind::HtmlDocument.is_previewable());
    assert!(ArtifactKind::SvgImage.is_previewable());
    assert!(ArtifactKind::InteractiveComponent.is_previewable());
    assert!(!ArtifactKind::Code.is_previewable());
    assert!(!ArtifactKind::Diagram.is_previewable());
    assert!(!ArtifactKind::FormattedText.is_previewable());
}

#[test]
fn unknown_kinds_round_trip_through_json() {
    let artifact = Artifact::new(
        ArtifactAttributes::new("x", "X", "application/x-custom"),
        "data",
    );

    let value = serde_json::to_value(&artifact).expect("serialize artifact");
    assert_eq!(
        value,
        json!({
            "identifier": "x",
            "title": "X",
            "type": "application/x-custom",
            "content": "data"
        })
    );

    let parsed: Artifact = serde_json::from_value(value).expect("deserialize artifact");
    assert_eq!(parsed, artifact);
}
