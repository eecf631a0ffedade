//! Document model types for package decomposition.
//!
//! These are the read-only views the decomposition core works on: paragraphs
//! with their raw markup, the relationship table of the main document part,
//! extracted image assets, and the skeleton lines produced from them.

mod asset;
mod document;
mod paragraph;
mod relationship;
mod skeleton;

pub use asset::{detect_mime_type, has_image_extension, ColorMode, ImageAsset, IMAGE_EXTENSIONS};
pub use document::Document;
pub(crate) use asset::{gif_has_transparency, png_has_palette_transparency};
pub use paragraph::{Paragraph, GRAPHIC_MARKER};
pub use relationship::{RelationshipEntry, RelationshipTable};
pub use skeleton::{
    SkeletonDocument, StructuralLine, ANCHOR_LABEL, LINE_SEPARATOR, UNRESOLVED_PREFIX,
};
