//! DOCX package reader using zip.

use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::detect::{detect_format_from_bytes, MAIN_DOCUMENT_PART};
use crate::error::{Error, Result};
use crate::model::{has_image_extension, Document, ImageAsset, RelationshipTable};
use crate::sort::natural_sort;

use super::body::parse_body;
use super::options::{ErrorMode, ParseOptions};
use super::relationships::{parse_relationships, DOCUMENT_RELS_PART};
use super::styles::{parse_styles, StyleSheet, STYLES_PART};

/// DOCX package reader.
///
/// The whole package is held in memory.
pub struct DocxParser {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(data, options)
    }

    /// Read a package from bytes.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Read a package from bytes with custom options.
    pub fn from_bytes_with_options(data: impl Into<Vec<u8>>, options: ParseOptions) -> Result<Self> {
        let data = data.into();
        detect_format_from_bytes(&data)?;
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive, options })
    }

    /// Read a package from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Read a package from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(data, options)
    }

    /// Parse the main document part into paragraphs and relationships.
    pub fn parse(&mut self) -> Result<Document> {
        let relationships = self.relationships()?;
        let styles = self.styles()?;

        let xml = self
            .read_part(MAIN_DOCUMENT_PART)?
            .ok_or_else(|| Error::MissingPart(MAIN_DOCUMENT_PART.to_string()))?;
        let paragraphs = parse_body(&xml, &styles, self.options.include_table_paragraphs)?;

        log::debug!(
            "Parsed {} paragraphs, {} relationships, {} paragraph styles",
            paragraphs.len(),
            relationships.len(),
            styles.len()
        );

        Ok(Document {
            paragraphs,
            relationships,
        })
    }

    /// Read the main part's relationship table; a missing part yields an empty table.
    pub fn relationships(&mut self) -> Result<RelationshipTable> {
        let Some(xml) = self.read_part(DOCUMENT_RELS_PART)? else {
            return Ok(RelationshipTable::new());
        };
        match parse_relationships(&xml) {
            Ok(table) => Ok(table),
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Ignoring unreadable {}: {}", DOCUMENT_RELS_PART, e);
                Ok(RelationshipTable::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Read the paragraph style sheet; a missing part yields the built-in styles.
    pub fn styles(&mut self) -> Result<StyleSheet> {
        let Some(xml) = self.read_part(STYLES_PART)? else {
            log::debug!("No {}, using built-in paragraph styles", STYLES_PART);
            return Ok(StyleSheet::builtin());
        };
        match parse_styles(&xml) {
            Ok(sheet) => Ok(sheet),
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Ignoring unreadable {}: {}", STYLES_PART, e);
                Ok(StyleSheet::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Names of recognized image entries directly under the media folder, in natural order.
    pub fn media_names(&self) -> Vec<String> {
        let prefix = self.options.media_prefix.as_str();
        let mut names: Vec<String> = self
            .archive
            .file_names()
            .filter_map(|name| name.strip_prefix(prefix))
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
            .filter(|rest| has_image_extension(rest))
            .map(str::to_string)
            .collect();
        natural_sort(&mut names);
        names
    }

    /// Extract every recognized image under the media folder, in natural order.
    pub fn extract_media(&mut self) -> Result<Vec<ImageAsset>> {
        let names = self.media_names();
        let mut assets = Vec::with_capacity(names.len());

        for filename in names {
            let entry_name = format!("{}{}", self.options.media_prefix, filename);
            let mut entry = self.archive.by_name(&entry_name)?;
            if entry.is_dir() || entry.enclosed_name().is_none() {
                log::debug!("Skipping unsafe or directory entry {}", entry_name);
                continue;
            }
            let mut data = Vec::with_capacity(capacity_hint(entry.size()));
            entry.read_to_end(&mut data)?;
            assets.push(ImageAsset::new(filename, data));
        }

        Ok(assets)
    }

    /// Check if the package contains an entry.
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Read a package part as UTF-8 text, or `None` if absent.
    pub fn read_part(&mut self, name: &str) -> Result<Option<String>> {
        let mut entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .map_err(|e| Error::Xml(format!("{} is not valid UTF-8 text: {}", name, e)))?;
        Ok(Some(content))
    }

    /// Parse options in effect.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

/// Largest buffer reserved up front from an entry's declared size.
const MAX_PREALLOC: u64 = 1 << 24;

/// Preallocation for an archive entry; the declared size comes from the
/// header and is not trusted.
fn capacity_hint(declared: u64) -> usize {
    usize::try_from(declared.min(MAX_PREALLOC)).unwrap_or(0)
}
