//! Skeleton output types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator placed between serialized lines.
pub const LINE_SEPARATOR: &str = "\n\n";

/// Label used by image anchors. Downstream tooling parses this exact form.
pub const ANCHOR_LABEL: &str = "> **[INSERT IMAGE]** ID:";

/// Prefix carried by identifiers of anchors whose relationship did not resolve.
pub const UNRESOLVED_PREFIX: &str = "unresolved:";

/// A single emitted unit of the skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructuralLine {
    /// Heading of level 1 to 3
    Heading {
        /// Heading depth (1-3)
        level: u8,
        /// Trimmed paragraph text
        text: String,
    },
    /// List item
    ListItem {
        /// Trimmed paragraph text
        text: String,
    },
    /// Plain paragraph
    Text {
        /// Trimmed paragraph text
        text: String,
    },
    /// Image anchor standing in for an embedded image
    ImageAnchor {
        /// Image filename in `media_source/`
        id: String,
    },
}

impl StructuralLine {
    /// Create a heading line; the level is clamped to 1-3.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        StructuralLine::Heading {
            level: level.clamp(1, 3),
            text: text.into(),
        }
    }

    /// Create an image anchor line.
    pub fn anchor(id: impl Into<String>) -> Self {
        StructuralLine::ImageAnchor { id: id.into() }
    }

    /// Create an anchor for a relationship identifier that did not resolve.
    pub fn unresolved_anchor(rel_id: &str) -> Self {
        StructuralLine::ImageAnchor {
            id: format!("{}{}", UNRESOLVED_PREFIX, rel_id),
        }
    }

    /// Check if this is an image anchor.
    pub fn is_anchor(&self) -> bool {
        matches!(self, StructuralLine::ImageAnchor { .. })
    }

    /// Check if this anchor stands in for an unresolved reference.
    pub fn is_unresolved_anchor(&self) -> bool {
        matches!(self, StructuralLine::ImageAnchor { id } if id.starts_with(UNRESOLVED_PREFIX))
    }

    /// Text content for text-bearing lines.
    pub fn text(&self) -> Option<&str> {
        match self {
            StructuralLine::Heading { text, .. }
            | StructuralLine::ListItem { text }
            | StructuralLine::Text { text } => Some(text),
            StructuralLine::ImageAnchor { .. } => None,
        }
    }
}

impl fmt::Display for StructuralLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralLine::Heading { level, text } => {
                write!(f, "{} {}", "#".repeat(*level as usize), text)
            }
            StructuralLine::ListItem { text } => write!(f, "- {}", text),
            StructuralLine::Text { text } => write!(f, "{}", text),
            // anchors carry their own blank padding
            StructuralLine::ImageAnchor { id } => write!(f, "\n{} <<{}>>\n", ANCHOR_LABEL, id),
        }
    }
}

/// The ordered skeleton of one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkeletonDocument {
    /// Lines in document order
    pub lines: Vec<StructuralLine>,
}

impl SkeletonDocument {
    /// Create an empty skeleton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: StructuralLine) {
        self.lines.push(line);
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the skeleton is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over image anchor identifiers in order.
    pub fn anchors(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            StructuralLine::ImageAnchor { id } => Some(id.as_str()),
            _ => None,
        })
    }

    /// Count of anchors for unresolved references.
    pub fn unresolved_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_unresolved_anchor()).count()
    }

    /// Serialize the line sequence with blank-line separators.
    pub fn body(&self) -> String {
        self.lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }

    /// Render the full skeleton artifact: title, placeholder note, then the body.
    pub fn to_markdown(&self, document_name: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("# Document Skeleton: {}\n\n", document_name));
        output.push_str(
            "> This document was decomposed automatically. <<IMG_...>> marks an image placeholder.\n\n",
        );
        output.push_str(&self.body());
        output
    }

    /// Serialize the line sequence as pretty JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::Error::Other(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_display() {
        assert_eq!(StructuralLine::heading(2, "Scope").to_string(), "## Scope");
        assert_eq!(
            StructuralLine::ListItem { text: "item".into() }.to_string(),
            "- item"
        );
        assert_eq!(StructuralLine::Text { text: "body".into() }.to_string(), "body");
        assert_eq!(
            StructuralLine::anchor("image1.png").to_string(),
            "\n> **[INSERT IMAGE]** ID: <<image1.png>>\n"
        );
    }

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(StructuralLine::heading(9, "x").to_string(), "### x");
        assert_eq!(StructuralLine::heading(0, "x").to_string(), "# x");
    }

    #[test]
    fn test_body_joins_with_blank_lines() {
        let mut doc = SkeletonDocument::new();
        doc.push(StructuralLine::heading(1, "Title"));
        doc.push(StructuralLine::anchor("image1.png"));
        doc.push(StructuralLine::Text { text: "Caption".into() });

        assert_eq!(
            doc.body(),
            "# Title\n\n\n> **[INSERT IMAGE]** ID: <<image1.png>>\n\n\nCaption"
        );
        assert_eq!(doc.anchors().collect::<Vec<_>>(), vec!["image1.png"]);
    }

    #[test]
    fn test_to_markdown_header() {
        let doc = SkeletonDocument::new();
        let md = doc.to_markdown("report");
        assert!(md.starts_with("# Document Skeleton: report\n\n> This document"));
        assert!(md.ends_with("placeholder.\n\n"));
    }

    #[test]
    fn test_unresolved_anchor() {
        let line = StructuralLine::unresolved_anchor("rId12");
        assert!(line.is_anchor());
        assert!(line.is_unresolved_anchor());
        assert!(line.to_string().contains("<<unresolved:rId12>>"));
        assert!(!StructuralLine::anchor("image1.png").is_unresolved_anchor());
    }

    #[test]
    fn test_to_json_tags_variants() {
        let mut doc = SkeletonDocument::new();
        doc.push(StructuralLine::anchor("image1.png"));
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"type\": \"image_anchor\""));
        assert!(json.contains("\"id\": \"image1.png\""));
    }
}
