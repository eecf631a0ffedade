//! Document source abstraction layer.
//!
//! Provides a trait-based interface for the two read-only views the
//! decomposition core consumes, isolating the concrete package reader
//! (zip + XML parsing) from skeleton extraction.

use crate::model::{Paragraph, RelationshipTable};

/// Abstract interface for document access.
///
/// Any type that can produce an ordered paragraph sequence and the main
/// part's relationship table satisfies the skeleton extractor.
pub trait DocumentSource {
    /// Paragraphs in document order.
    fn paragraphs(&self) -> &[Paragraph];

    /// Relationship table of the main document part.
    fn relationships(&self) -> &RelationshipTable;
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn paragraphs(&self) -> &[Paragraph] {
        (**self).paragraphs()
    }

    fn relationships(&self) -> &RelationshipTable {
        (**self).relationships()
    }
}
