//! Skeleton extraction statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during skeleton extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Paragraphs visited
    pub paragraph_count: u32,

    /// Paragraphs that emitted nothing
    pub empty_paragraph_count: u32,

    /// Heading lines emitted
    pub heading_count: u32,

    /// List item lines emitted
    pub list_item_count: u32,

    /// Plain text lines emitted
    pub text_count: u32,

    /// Image anchors for resolved references
    pub anchor_count: u32,

    /// Embed references that did not resolve
    pub unresolved_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add word counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.paragraph_count += other.paragraph_count;
        self.empty_paragraph_count += other.empty_paragraph_count;
        self.heading_count += other.heading_count;
        self.list_item_count += other.list_item_count;
        self.text_count += other.text_count;
        self.anchor_count += other.anchor_count;
        self.unresolved_count += other.unresolved_count;
        self.word_count += other.word_count;
    }
}
