use crate::{
    opentelemetry::trace_artifact_stream, ArtifactEvent, ArtifactEventStream, ArtifactTracker,
    BoxedError, ChatError, TrackerOptions,
};
use futures::{pin_mut, Stream, StreamExt};

/// Follows the artifacts of a message whose text arrives as a stream of
/// deltas.
///
/// The returned stream yields the events of [`ArtifactTracker::push`] for
/// each delta, then a final [`ArtifactEvent::Finished`] once the source
/// ends. An error from the source is yielded as [`ChatError::Source`] and
/// ends the stream.
pub fn track_artifacts<S, E>(stream: S, options: TrackerOptions) -> ArtifactEventStream
where
    S: Stream<Item = Result<String, E>> + Send + 'static,
    E: Into<BoxedError> + Send + 'static,
{
    let tag_name = options.syntax.tag_name().to_string();

    let events = async_stream::try_stream! {
        let mut tracker = ArtifactTracker::with_options(options);
        let source = stream;
        pin_mut!(source);

        while let Some(delta) = source.next().await {
            let delta = delta.map_err(|err| ChatError::Source(err.into()))?;
            for event in tracker.push(&delta) {
                yield event;
            }
        }

        yield ArtifactEvent::Finished {
            segments: tracker.finish().segments,
        };
    };

    trace_artifact_stream(&tag_name, events)
}
