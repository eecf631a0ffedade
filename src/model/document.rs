//! Document-level types.

use super::{Paragraph, RelationshipTable};
use crate::parser::DocumentSource;
use serde::{Deserialize, Serialize};

/// A parsed DOCX document: its paragraphs and the main part's relationships.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,

    /// Relationship table of the main document part
    pub relationships: RelationshipTable,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.trimmed_text())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl DocumentSource for Document {
    fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    fn relationships(&self) -> &RelationshipTable {
        &self.relationships
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.paragraph_count(), 0);
    }

    #[test]
    fn test_plain_text_skips_empty() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text(" First "));
        doc.add_paragraph(Paragraph::with_text("   "));
        doc.add_paragraph(Paragraph::with_text("Second"));
        assert_eq!(doc.plain_text(), "First\n\nSecond");
    }
}
