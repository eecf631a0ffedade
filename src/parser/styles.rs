//! Style sheet parsing (`word/styles.xml`).
//!
//! Only paragraph style names are needed: the skeleton classifies
//! paragraphs by the name a user sees in the style gallery.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::Result;

/// Package path of the style sheet.
pub const STYLES_PART: &str = "word/styles.xml";

/// Style name used when a package declares no default paragraph style.
pub const FALLBACK_STYLE_NAME: &str = "Normal";

/// Built-in paragraph styles assumed when a package has no style sheet.
const BUILTIN_STYLES: &[(&str, &str)] = &[
    ("Normal", "Normal"),
    ("Title", "Title"),
    ("Heading1", "Heading 1"),
    ("Heading2", "Heading 2"),
    ("Heading3", "Heading 3"),
    ("Heading4", "Heading 4"),
    ("Heading5", "Heading 5"),
    ("Heading6", "Heading 6"),
    ("Heading7", "Heading 7"),
    ("Heading8", "Heading 8"),
    ("Heading9", "Heading 9"),
    ("ListParagraph", "List Paragraph"),
];

/// Paragraph style names keyed by style id.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Style sheet of built-in paragraph styles, used for packages without `word/styles.xml`.
    pub fn builtin() -> Self {
        let mut sheet = Self::new();
        for (id, name) in BUILTIN_STYLES {
            sheet.insert(*id, *name);
        }
        sheet.set_default(FALLBACK_STYLE_NAME);
        sheet
    }

    /// Register a paragraph style.
    pub fn insert(&mut self, style_id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(style_id.into(), name.into());
    }

    /// Mark a style id as the default paragraph style.
    pub fn set_default(&mut self, style_id: impl Into<String>) {
        self.default_paragraph = Some(style_id.into());
    }

    /// Resolve the user-visible name for a paragraph's style id.
    ///
    /// A missing id, or one that names no paragraph style, resolves to the
    /// default paragraph style.
    pub fn resolve(&self, style_id: Option<&str>) -> String {
        style_id
            .and_then(|id| self.names.get(id))
            .cloned()
            .unwrap_or_else(|| self.default_name())
    }

    fn default_name(&self) -> String {
        self.default_paragraph
            .as_deref()
            .and_then(|id| self.names.get(id))
            .cloned()
            .unwrap_or_else(|| FALLBACK_STYLE_NAME.to_string())
    }

    /// Number of known paragraph styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no styles are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Map built-in lowercase style names to the casing shown in the UI.
pub fn ui_style_name(name: &str) -> String {
    let is_builtin = matches!(name, "caption" | "footer" | "header" | "normal" | "title")
        || name
            .strip_prefix("heading ")
            .is_some_and(|n| n.len() == 1 && n.as_bytes()[0].is_ascii_digit());

    if !is_builtin {
        return name.to_string();
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse a style sheet part.
pub fn parse_styles(xml: &str) -> Result<StyleSheet> {
    let mut sheet = StyleSheet::new();
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    // (style id, is default) of the paragraph style being read
    let mut current: Option<(String, bool)> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"style" => {
                current = paragraph_style_header(&e)?;
            }
            Event::Empty(e) if e.local_name().as_ref() == b"name" => {
                if let Some((id, is_default)) = current.as_ref() {
                    if let Some(name) = attr_value(&e, b"val")? {
                        sheet.insert(id.clone(), ui_style_name(&name));
                        if *is_default {
                            sheet.set_default(id.clone());
                        }
                    }
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"style" => current = None,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(sheet)
}

fn paragraph_style_header(e: &BytesStart<'_>) -> Result<Option<(String, bool)>> {
    let style_type = attr_value(e, b"type")?;
    if style_type.as_deref() != Some("paragraph") {
        return Ok(None);
    }
    let Some(id) = attr_value(e, b"styleId")? else {
        return Ok(None);
    };
    let is_default = matches!(attr_value(e, b"default")?.as_deref(), Some("1" | "true"));
    Ok(Some((id, is_default)))
}

/// Attribute value matched by local name, whatever prefix the package uses.
fn attr_value(e: &BytesStart<'_>, local: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == local {
            return Ok(Some(String::from_utf8_lossy(&attr.value).to_string()));
        }
    }
    Ok(None)
}
