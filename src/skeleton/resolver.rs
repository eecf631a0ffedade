//! Relationship identifier → image filename resolution.

use std::collections::HashMap;

use crate::model::RelationshipTable;

/// Immutable mapping from relationship identifiers to image filenames.
///
/// Iteration follows the relationship table's order. Filenames may repeat
/// when two relationships target the same media part.
#[derive(Debug, Clone, Default)]
pub struct RelationshipMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl RelationshipMap {
    /// Build the mapping from every image relationship in the table.
    pub fn resolve(table: &RelationshipTable) -> Self {
        let mut map = Self::default();
        for rel in table.iter().filter(|rel| rel.is_image()) {
            // ids are unique in a well-formed part; keep the first on duplicates
            if map.index.contains_key(&rel.id) {
                log::debug!("Duplicate relationship id {} ignored", rel.id);
                continue;
            }
            map.index.insert(rel.id.clone(), map.entries.len());
            map.entries
                .push((rel.id.clone(), rel.target_basename().to_string()));
        }
        map
    }

    /// Filename for a relationship identifier.
    pub fn get(&self, rel_id: &str) -> Option<&str> {
        self.index
            .get(rel_id)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Check if an identifier resolves.
    pub fn contains(&self, rel_id: &str) -> bool {
        self.index.contains_key(rel_id)
    }

    /// Iterate (identifier, filename) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, f)| (id.as_str(), f.as_str()))
    }

    /// Number of resolved image relationships.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no image relationships were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
