//! Paragraph walk producing structural lines and image anchors.

use crate::model::{Paragraph, SkeletonDocument, StructuralLine};
use crate::parser::DocumentSource;

use super::{AnchorOrder, ExtractionStats, RelationshipMap, SkeletonOptions, UnresolvedPolicy};

/// Structural role of a paragraph, derived from its style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    /// Heading of depth 1-3
    Heading(u8),
    /// List item
    ListItem,
    /// Anything else
    Plain,
}

impl StyleRole {
    /// Classify a style name.
    ///
    /// Only the first three heading levels are recognized; "Heading 4" and
    /// deeper fall through to the list check and then to plain text.
    pub fn classify(style_name: &str) -> Self {
        if style_name.starts_with("Heading 1") {
            StyleRole::Heading(1)
        } else if style_name.starts_with("Heading 2") {
            StyleRole::Heading(2)
        } else if style_name.starts_with("Heading 3") {
            StyleRole::Heading(3)
        } else if style_name.contains("List") {
            StyleRole::ListItem
        } else {
            StyleRole::Plain
        }
    }

    /// Build the line for a paragraph's trimmed text.
    pub fn line(self, text: &str) -> StructuralLine {
        let text = text.to_string();
        match self {
            StyleRole::Heading(level) => StructuralLine::Heading { level, text },
            StyleRole::ListItem => StructuralLine::ListItem { text },
            StyleRole::Plain => StructuralLine::Text { text },
        }
    }
}

/// Skeleton extractor.
///
/// Holds the resolved relationship map for one document.
pub struct SkeletonExtractor<'a> {
    map: &'a RelationshipMap,
    options: SkeletonOptions,
}

impl<'a> SkeletonExtractor<'a> {
    /// Create an extractor over a resolved relationship map.
    pub fn new(map: &'a RelationshipMap, options: SkeletonOptions) -> Self {
        Self { map, options }
    }

    /// Walk the paragraphs and build the skeleton.
    pub fn extract(&self, paragraphs: &[Paragraph]) -> SkeletonDocument {
        self.extract_with_stats(paragraphs).0
    }

    /// Walk the paragraphs and build the skeleton along with statistics.
    pub fn extract_with_stats(&self, paragraphs: &[Paragraph]) -> (SkeletonDocument, ExtractionStats) {
        let mut skeleton = SkeletonDocument::new();
        let mut stats = ExtractionStats::new();

        for (index, para) in paragraphs.iter().enumerate() {
            stats.paragraph_count += 1;
            let before = skeleton.len();

            if para.has_graphic() {
                self.push_anchors(index, para, &mut skeleton, &mut stats);
            }

            let text = para.trimmed_text();
            if !text.is_empty() {
                let role = StyleRole::classify(&para.style_name);
                match role {
                    StyleRole::Heading(_) => stats.heading_count += 1,
                    StyleRole::ListItem => stats.list_item_count += 1,
                    StyleRole::Plain => stats.text_count += 1,
                }
                stats.count_text(text);
                skeleton.push(role.line(text));
            }

            if skeleton.len() == before {
                stats.empty_paragraph_count += 1;
            }
        }

        (skeleton, stats)
    }

    fn push_anchors(
        &self,
        index: usize,
        para: &Paragraph,
        skeleton: &mut SkeletonDocument,
        stats: &mut ExtractionStats,
    ) {
        let referenced = para.embed_references();
        let unresolved: Vec<&str> = referenced
            .iter()
            .copied()
            .filter(|id| !self.map.contains(id))
            .collect();

        let placeholders = self.options.unresolved == UnresolvedPolicy::Placeholder;

        match self.options.anchor_order {
            AnchorOrder::RelationshipTable => {
                for (rel_id, filename) in self.map.iter() {
                    if referenced.contains(&rel_id) {
                        skeleton.push(StructuralLine::anchor(filename));
                        stats.anchor_count += 1;
                    }
                }
                if placeholders {
                    for rel_id in &unresolved {
                        skeleton.push(StructuralLine::unresolved_anchor(rel_id));
                    }
                }
            }
            AnchorOrder::Markup => {
                for rel_id in &referenced {
                    match self.map.get(rel_id) {
                        Some(filename) => {
                            skeleton.push(StructuralLine::anchor(filename));
                            stats.anchor_count += 1;
                        }
                        None if placeholders => {
                            skeleton.push(StructuralLine::unresolved_anchor(rel_id));
                        }
                        None => {}
                    }
                }
            }
        }

        if !unresolved.is_empty() {
            stats.unresolved_count += unresolved.len() as u32;
            log::warn!(
                "Paragraph {} embeds unresolved image reference(s): {}",
                index,
                unresolved.join(", ")
            );
        }
    }
}

/// Extract the skeleton of any document source with the given options.
pub fn extract_skeleton<S: DocumentSource>(source: &S, options: &SkeletonOptions) -> SkeletonDocument {
    let map = RelationshipMap::resolve(source.relationships());
    SkeletonExtractor::new(&map, options.clone()).extract(source.paragraphs())
}
