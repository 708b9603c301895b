mod attributes;
mod detector;
mod errors;
mod partial;
mod segments;
mod syntax;
mod types;
mod types_ext;

pub use attributes::{attribute_value, parse_attributes};
pub use detector::{detect_opening_tag, detect_opening_tag_with};
pub use errors::*;
pub use partial::extract_partial;
pub use segments::{parse_segments, parse_segments_with, scan_blocks, ArtifactBlock};
pub use syntax::{ArtifactSyntax, DEFAULT_TAG_NAME};
pub use types::*;
