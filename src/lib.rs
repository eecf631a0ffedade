//! # undocx
//!
//! Decomposes DOCX documents into three artifacts for review and
//! reassembly workflows:
//!
//! - every embedded image, extracted flat into `media_source/`
//! - labeled visual-reference PDFs, one page per image, in `visual_refs/`
//! - a markdown skeleton of headings, list items and text with an
//!   `> **[INSERT IMAGE]** ID: <<filename>>` anchor wherever an image sat
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::decompose_file;
//!
//! fn main() -> undocx::Result<()> {
//!     let report = decompose_file("report.docx", "pipeline_output")?;
//!     println!("{} images extracted", report.image_count());
//!     println!("skeleton at {}", report.skeleton_path().display());
//!     Ok(())
//! }
//! ```
//!
//! The skeleton alone can be produced without touching the filesystem:
//!
//! ```no_run
//! let markdown = undocx::to_skeleton_markdown("report.docx").unwrap();
//! println!("{}", markdown);
//! ```

pub mod decompose;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod skeleton;
pub mod sort;
pub mod visual;

// Re-export commonly used types
pub use decompose::{
    decompose_file, DecomposeOptions, Decomposer, DecompositionReport, DEFAULT_OUTPUT_ROOT,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, PackageFormat};
pub use error::{Error, Result};
pub use model::{
    Document, ImageAsset, Paragraph, RelationshipEntry, RelationshipTable, SkeletonDocument,
    StructuralLine,
};
pub use parser::{DocumentSource, DocxParser, ErrorMode, ParseOptions};
pub use skeleton::{
    extract_skeleton, AnchorOrder, ExtractionStats, RelationshipMap, SkeletonExtractor,
    SkeletonOptions, UnresolvedPolicy,
};
pub use sort::{natural_cmp, natural_sort};
pub use visual::{LabelFont, PageLayout, Paginator};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file into paragraphs and relationships.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_file;
///
/// let doc = parse_file("report.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocxParser::open(path)?.parse()
}

/// Parse a DOCX file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    DocxParser::open_with_options(path, options)?.parse()
}

/// Parse a DOCX package from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    DocxParser::from_bytes(data)?.parse()
}

/// Parse a DOCX package from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    DocxParser::from_reader(reader)?.parse()
}

/// Render the skeleton markdown of a DOCX file, header included.
///
/// # Example
///
/// ```no_run
/// use undocx::to_skeleton_markdown;
///
/// let markdown = to_skeleton_markdown("report.docx").unwrap();
/// std::fs::write("skeleton.md", markdown).unwrap();
/// ```
pub fn to_skeleton_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    Undocx::new().parse(path)?.to_markdown()
}

/// Builder for reading DOCX files and extracting their skeleton.
///
/// # Example
///
/// ```no_run
/// use undocx::Undocx;
///
/// let json = Undocx::new()
///     .lenient()
///     .with_placeholders()
///     .parse("report.docx")?
///     .to_json()?;
/// # Ok::<(), undocx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Undocx {
    parse_options: ParseOptions,
    skeleton_options: SkeletonOptions,
}

impl Undocx {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tolerate malformed relationship and style parts.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Also read paragraphs inside table cells.
    pub fn with_table_paragraphs(mut self) -> Self {
        self.parse_options = self.parse_options.with_table_paragraphs(true);
        self
    }

    /// Emit placeholder anchors for unresolved image references.
    pub fn with_placeholders(mut self) -> Self {
        self.skeleton_options = self.skeleton_options.with_placeholders();
        self
    }

    /// Set the anchor order within multi-image paragraphs.
    pub fn with_anchor_order(mut self, order: AnchorOrder) -> Self {
        self.skeleton_options = self.skeleton_options.with_anchor_order(order);
        self
    }

    /// Parse a DOCX file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UndocxResult> {
        let document = DocxParser::open_with_options(&path, self.parse_options)?.parse()?;
        Ok(UndocxResult::build(
            document,
            crate::decompose::document_name(path.as_ref()),
            &self.skeleton_options,
        ))
    }

    /// Parse a DOCX package from bytes; `name` titles the skeleton.
    pub fn parse_bytes(self, data: &[u8], name: &str) -> Result<UndocxResult> {
        let document = DocxParser::from_bytes_with_options(data, self.parse_options)?.parse()?;
        Ok(UndocxResult::build(
            document,
            name.to_string(),
            &self.skeleton_options,
        ))
    }
}

/// A parsed document together with its skeleton.
#[derive(Debug, Clone)]
pub struct UndocxResult {
    /// The parsed document
    pub document: Document,
    /// The extracted skeleton
    pub skeleton: SkeletonDocument,
    /// Extraction statistics
    pub stats: ExtractionStats,
    name: String,
}

impl UndocxResult {
    fn build(document: Document, name: String, options: &SkeletonOptions) -> Self {
        let map = RelationshipMap::resolve(&document.relationships);
        let (skeleton, stats) =
            SkeletonExtractor::new(&map, options.clone()).extract_with_stats(&document.paragraphs);
        Self {
            document,
            skeleton,
            stats,
            name,
        }
    }

    /// Skeleton markdown with the title header.
    pub fn to_markdown(&self) -> Result<String> {
        Ok(self.skeleton.to_markdown(&self.name))
    }

    /// Skeleton lines as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        self.skeleton.to_json()
    }

    /// Document title used in the skeleton header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
