mod errors;
mod message;
mod opentelemetry;
mod options;
mod stream;
mod tracker;
mod types;

pub use errors::{BoxedError, ChatError, ChatResult};
pub use message::{count_words, ChatMessage, MessageMetadata, MessagePart, Role};
pub use crate::opentelemetry::{trace_artifact_stream, ArtifactSpan};
pub use options::TrackerOptions;
pub use stream::track_artifacts;
pub use tracker::ArtifactTracker;
pub use types::*;
