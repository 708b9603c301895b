use crate::ChatResult;
use artifact_parser::{Artifact, ArtifactAttributes, Segment};
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::{
    pin::Pin,
    task::{Context, Poll},
};

/// A change in the artifacts of a streaming assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ArtifactEvent {
    /// The first opening tag of the message arrived. Emitted once per
    /// message, possibly before any attribute or content is usable.
    Detected,
    /// The last block is still open and its content changed.
    Partial {
        attributes: ArtifactAttributes,
        content: String,
    },
    /// A block was closed. Emitted once per block, in document order.
    Completed { artifact: Artifact },
    /// The source stream ended. Carries the final segments of the message.
    Finished { segments: Vec<Segment> },
}

/// The outcome of tracking a whole message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinishedMessage {
    pub segments: Vec<Segment>,
    /// Completed artifacts in document order.
    pub artifacts: Vec<Artifact>,
}

pub struct ArtifactEventStream(Pin<Box<dyn Stream<Item = ChatResult<ArtifactEvent>> + Send>>);

impl ArtifactEventStream {
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = ChatResult<ArtifactEvent>> + Send + 'static,
    {
        Self(Box::pin(stream))
    }
}

impl Stream for ArtifactEventStream {
    type Item = ChatResult<ArtifactEvent>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.0.as_mut().poll_next(cx)
    }
}
