//! Paragraph view consumed by the skeleton extractor.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Marker present in the markup of paragraphs that carry a DrawingML graphic.
pub const GRAPHIC_MARKER: &str = "graphicData";

fn embed_refs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"r:embed\s*=\s*["']([^"']*)["']"#).expect("static pattern"))
}

/// A paragraph as seen by the skeleton extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Concatenated run text (untrimmed)
    pub text: String,

    /// User-visible style name (e.g. "Heading 2", "List Paragraph")
    pub style_name: String,

    /// Raw XML of the `<w:p>` element as stored in the package
    #[serde(skip_serializing)]
    pub raw_markup: String,

    /// `r:embed` values read from the parsed element, in document order
    #[serde(default, skip_serializing)]
    pub embed_ids: Vec<String>,
}

impl Paragraph {
    /// Create a paragraph with plain text and the "Normal" style.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_name: "Normal".to_string(),
            raw_markup: String::new(),
            embed_ids: Vec::new(),
        }
    }

    /// Set the style name.
    pub fn with_style(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = style_name.into();
        self
    }

    /// Set the raw markup.
    pub fn with_markup(mut self, raw_markup: impl Into<String>) -> Self {
        self.raw_markup = raw_markup.into();
        self
    }

    /// Set the `r:embed` values found when parsing the element.
    pub fn with_embeds<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.embed_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.trimmed_text().is_empty()
    }

    /// Check if the markup contains an embedded graphic.
    pub fn has_graphic(&self) -> bool {
        self.raw_markup.contains(GRAPHIC_MARKER)
    }

    /// Distinct relationship identifiers this paragraph embeds, in order of appearance.
    ///
    /// Parsed `embed_ids` take precedence; paragraphs built from markup alone
    /// are scanned for `r:embed` attributes with either quote style.
    pub fn embed_references(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        if self.embed_ids.is_empty() {
            embed_refs()
                .captures_iter(&self.raw_markup)
                .filter_map(|c| c.get(1).map(|m| m.as_str()))
                .filter(|id| seen.insert(*id))
                .collect()
        } else {
            self.embed_ids
                .iter()
                .map(String::as_str)
                .filter(|id| seen.insert(*id))
                .collect()
        }
    }

    /// Check if the paragraph embeds the given relationship identifier.
    pub fn embeds(&self, rel_id: &str) -> bool {
        self.embed_references().contains(&rel_id)
    }
}
