//! Package relationship table.

use serde::{Deserialize, Serialize};

/// Relationship type URI suffix marking an image part.
const IMAGE_REL_SUFFIX: &str = "/image";

/// One `<Relationship>` of the main document part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEntry {
    /// Relationship identifier (e.g. "rId7")
    pub id: String,

    /// Target path relative to the source part (e.g. "media/image1.png")
    pub target: String,

    /// Relationship type URI, empty when absent
    pub rel_type: String,

    /// Whether the target lives outside the package (`TargetMode="External"`)
    pub external: bool,
}

impl RelationshipEntry {
    /// Create an internal relationship entry.
    pub fn new(id: impl Into<String>, target: impl Into<String>, rel_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            rel_type: rel_type.into(),
            external: false,
        }
    }

    /// Mark the entry as external.
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// Check if this relationship points at an embedded image resource.
    ///
    /// The relationship type decides; an untyped entry falls back to its target path.
    pub fn is_image(&self) -> bool {
        if self.external {
            return false;
        }
        if self.rel_type.is_empty() {
            self.target.contains("image")
        } else {
            self.rel_type.ends_with(IMAGE_REL_SUFFIX)
        }
    }

    /// Basename of the target path.
    pub fn target_basename(&self) -> &str {
        self.target
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.target.as_str())
    }
}

/// The ordered relationship table of a document part.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipTable {
    entries: Vec<RelationshipEntry>,
}

impl RelationshipTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping document order.
    pub fn push(&mut self, entry: RelationshipEntry) {
        self.entries.push(entry);
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = &RelationshipEntry> {
        self.entries.iter()
    }

    /// Look up an entry by identifier.
    pub fn get(&self, id: &str) -> Option<&RelationshipEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RelationshipEntry> for RelationshipTable {
    fn from_iter<I: IntoIterator<Item = RelationshipEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
