//! DOCX package parsing module.

mod backend;
mod body;
mod docx_parser;
mod options;
mod relationships;
mod styles;

pub use backend::DocumentSource;
pub use body::{parse_body, W_NS};
pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions, DEFAULT_MEDIA_PREFIX};
pub use relationships::{parse_relationships, DOCUMENT_RELS_PART};
pub use styles::{parse_styles, ui_style_name, StyleSheet, STYLES_PART};
