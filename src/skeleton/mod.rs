//! Skeleton extraction: document structure with image anchors.
//!
//! The relationship resolver turns the main part's relationship table into
//! an immutable identifier → filename map. The extractor walks paragraphs
//! in order, emitting anchors for embedded images before each paragraph's
//! own line, so anchors in the text match the files in `media_source/`.
//!
//! Within one paragraph, anchors follow relationship-table order by default,
//! which may differ from visual order; [`AnchorOrder::Markup`] follows the
//! order of references in the markup instead.

mod extractor;
mod options;
mod resolver;
mod stats;

pub use extractor::{extract_skeleton, SkeletonExtractor, StyleRole};
pub use options::{AnchorOrder, SkeletonOptions, UnresolvedPolicy};
pub use resolver::RelationshipMap;
pub use stats::ExtractionStats;
