use crate::{ArtifactEvent, ArtifactEventStream, ChatError};
use async_stream::try_stream;
use futures::{pin_mut, StreamExt};
use opentelemetry::trace::Status;
use std::{error::Error, time::Instant};
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct ArtifactSpan {
    span: Span,
    start_time: Instant,
    time_to_detection: Option<f64>,
    partial_count: i64,
    completed_count: i64,
    ended: bool,
}

impl ArtifactSpan {
    pub fn new(tag_name: &str) -> Self {
        let span = info_span!("artifact_chat.track");
        span.set_attribute("artifact_chat.tag_name", tag_name.to_string());

        Self {
            span,
            start_time: Instant::now(),
            time_to_detection: None,
            partial_count: 0,
            completed_count: 0,
            ended: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn on_event(&mut self, event: &ArtifactEvent) {
        match event {
            ArtifactEvent::Detected => {
                if self.time_to_detection.is_none() {
                    self.time_to_detection = Some(self.start_time.elapsed().as_secs_f64());
                }
            }
            ArtifactEvent::Partial { .. } => self.partial_count += 1,
            ArtifactEvent::Completed { .. } => self.completed_count += 1,
            ArtifactEvent::Finished { .. } => {}
        }
    }

    pub fn on_error(&mut self, error: &(dyn Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        self.span
            .set_attribute("artifact_chat.partial_count", self.partial_count);
        self.span
            .set_attribute("artifact_chat.completed_count", self.completed_count);
        if let Some(time_to_detection) = self.time_to_detection {
            self.span
                .set_attribute("artifact_chat.time_to_detection", time_to_detection);
        }
    }
}

impl Drop for ArtifactSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}

pub fn trace_artifact_stream<S>(tag_name: &str, stream: S) -> ArtifactEventStream
where
    S: futures::Stream<Item = Result<ArtifactEvent, ChatError>> + Send + 'static,
{
    let artifact_span = ArtifactSpan::new(tag_name);
    let span_handle = artifact_span.span();

    let instrumented = try_stream! {
        let mut span = artifact_span;
        let stream_pin = stream;
        pin_mut!(stream_pin);

        while let Some(event_result) = stream_pin.next().await {
            match event_result {
                Ok(event) => {
                    span.on_event(&event);
                    yield event;
                }
                Err(err) => {
                    span.on_error(&err);
                    span.on_end();
                    Err(err)?;
                }
            }
        }

        span.on_end();
    }
    .instrument(span_handle);

    ArtifactEventStream::from_stream(instrumented)
}
