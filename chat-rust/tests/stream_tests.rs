use artifact_chat::{track_artifacts, ArtifactEvent, ChatError, TrackerOptions};
use futures::{stream, StreamExt, TryStreamExt};
use std::io;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn deltas(chunks: &[&str]) -> Vec<Result<String, io::Error>> {
    chunks.iter().map(|chunk| Ok((*chunk).to_string())).collect()
}

#[tokio::test]
async fn stream_yields_events_then_finished_segments() {
    init_tracing();

    let source = stream::iter(deltas(&[
        "Here you go.\n<antArtifact identifier=\"logo\" ",
        "type=\"image/svg+xml\" title=\"Logo\">",
        "\n<svg>",
        "</svg>\n</antArtifact>",
        "\nEnjoy!",
    ]));

    let events = track_artifacts(source, TrackerOptions::default())
        .try_collect::<Vec<_>>()
        .await
        .expect("collect stream");

    assert_eq!(events.len(), 5);
    assert_eq!(events[0], ArtifactEvent::Detected);
    assert!(matches!(
        &events[1],
        ArtifactEvent::Partial { content, .. } if content.is_empty()
    ));
    assert!(matches!(
        &events[2],
        ArtifactEvent::Partial { content, .. } if content == "<svg>"
    ));
    assert!(matches!(
        &events[3],
        ArtifactEvent::Completed { artifact } if artifact.content == "<svg></svg>"
    ));

    let ArtifactEvent::Finished { segments } = &events[4] else {
        panic!("expected finished event, got {:?}", events[4]);
    };
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].as_text(), Some("Here you go."));
    assert_eq!(
        segments[1].as_artifact().map(|artifact| artifact.identifier()),
        Some("logo")
    );
    assert_eq!(segments[2].as_text(), Some("Enjoy!"));
}

#[tokio::test]
async fn stream_without_artifacts_only_finishes() {
    let source = stream::iter(deltas(&["Just ", "a plain ", "answer."]));

    let events = track_artifacts(source, TrackerOptions::default())
        .try_collect::<Vec<_>>()
        .await
        .expect("collect stream");

    assert_eq!(events.len(), 1);
    let ArtifactEvent::Finished { segments } = &events[0] else {
        panic!("expected finished event");
    };
    assert_eq!(segments[0].as_text(), Some("Just a plain answer."));
}

#[tokio::test]
async fn source_errors_end_the_stream() {
    init_tracing();

    let source = stream::iter(vec![
        Ok("<antArtifact identifier=\"a\">partial".to_string()),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset")),
        Ok("</antArtifact>".to_string()),
    ]);

    let results = track_artifacts(source, TrackerOptions::default())
        .collect::<Vec<_>>()
        .await;

    assert_eq!(results.len(), 3);
    assert!(matches!(results[0], Ok(ArtifactEvent::Detected)));
    assert!(matches!(results[1], Ok(ArtifactEvent::Partial { .. })));
    match &results[2] {
        Err(ChatError::Source(err)) => assert_eq!(err.to_string(), "connection reset"),
        other => panic!("expected source error, got {other:?}"),
    }
}
