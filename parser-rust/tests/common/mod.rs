#![allow(dead_code)]

use artifact_parser::Segment;

pub const CODE_MESSAGE: &str = "Here is a small program.\n\n<antArtifact identifier=\"hello-world\" type=\"application/vnd.ant.code\" language=\"rust\" title=\"Hello world\">\nfn main() {\n    println!(\"héllo, wörld\");\n}\n</antArtifact>\n\nRun it with `cargo run`.";

pub const CODE_CONTENT: &str = "fn main() {\n    println!(\"héllo, wörld\");\n}";

/// Builds a complete artifact block.
pub fn block(attributes: &str, body: &str) -> String {
    format!("<antArtifact {attributes}>{body}</antArtifact>")
}

/// Rebuilds the source text from segment spans, checking that everything
/// between spans is whitespace.
pub fn reconstruct(text: &str, segments: &[Segment]) -> String {
    let mut rebuilt = String::new();
    let mut cursor = 0;

    for segment in segments {
        let span = segment.span();
        let gap = &text[cursor..span.start];
        assert!(gap.trim().is_empty(), "non-whitespace gap dropped: {gap:?}");
        rebuilt.push_str(gap);
        rebuilt.push_str(&text[span.clone()]);
        cursor = span.end;
    }

    let tail = &text[cursor..];
    assert!(tail.trim().is_empty(), "non-whitespace tail dropped: {tail:?}");
    rebuilt.push_str(tail);
    rebuilt
}
