//! Chunked visual-reference documents.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbImage;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::font::LabelFont;
use super::normalize::normalize;
use super::page::{build_reference_page, PageLayout};
use super::pdf::write_reference_pdf;

/// Default number of images per reference document.
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Source of raw image bytes by identifier.
pub trait ImageStore: Sync {
    /// Load the encoded bytes for `id`.
    fn load(&self, id: &str) -> Result<Vec<u8>>;
}

/// Images stored as files in one directory, keyed by filename.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store over `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the images.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageStore for DirectoryStore {
    fn load(&self, id: &str) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.root.join(id))?)
    }
}

impl ImageStore for HashMap<String, Vec<u8>> {
    fn load(&self, id: &str) -> Result<Vec<u8>> {
        self.get(id)
            .cloned()
            .ok_or_else(|| Error::Other(format!("No image stored for {}", id)))
    }
}

/// File name of the reference document for a 1-based part number.
pub fn part_file_name(doc_name: &str, part: usize) -> String {
    format!("{}_VisualRef_Part{}.pdf", doc_name, part)
}

/// An image left out of the visual references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedImage {
    /// Image identifier
    pub id: String,
    /// Why it was skipped
    pub reason: String,
}

/// One written reference document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePart {
    /// 1-based chunk index
    pub part: usize,
    /// Written file
    pub path: PathBuf,
    /// Number of pages in the file
    pub pages: usize,
}

/// Outcome of a pagination run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationReport {
    /// Documents written, in part order
    pub parts: Vec<ReferencePart>,
    /// Images that could not be rendered
    pub skipped: Vec<SkippedImage>,
    /// Chunks that produced no file because every image failed
    pub empty_chunks: Vec<usize>,
}

impl PaginationReport {
    /// Paths of every written document.
    pub fn files(&self) -> Vec<PathBuf> {
        self.parts.iter().map(|p| p.path.clone()).collect()
    }

    /// Total pages across all documents.
    pub fn page_count(&self) -> usize {
        self.parts.iter().map(|p| p.pages).sum()
    }
}

/// Splits an ordered list of images into labeled multi-page PDFs.
#[derive(Debug)]
pub struct Paginator {
    layout: PageLayout,
    font: LabelFont,
    chunk_size: usize,
    parallel: bool,
}

impl Paginator {
    /// Create a paginator with the default chunk size.
    pub fn new(layout: PageLayout, font: LabelFont) -> Self {
        Self {
            layout,
            font,
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel: true,
        }
    }

    /// Set the maximum number of images per document.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Enable or disable parallel page rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Page layout in use.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Render every image in `ids` order and write one PDF per chunk into `out_dir`.
    pub fn paginate<S: ImageStore + ?Sized>(
        &self,
        ids: &[String],
        store: &S,
        out_dir: &Path,
        doc_name: &str,
    ) -> Result<PaginationReport> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidOption(
                "chunk size must be at least 1".to_string(),
            ));
        }

        let mut report = PaginationReport::default();

        for (index, chunk) in ids.chunks(self.chunk_size).enumerate() {
            let part = index + 1;
            let rendered = self.render_chunk(chunk, store);

            let mut pages = Vec::with_capacity(rendered.len());
            for (id, result) in chunk.iter().zip(rendered) {
                match result {
                    Ok(page) => pages.push(page),
                    Err(e) => {
                        log::warn!("Skipping {}: {}", id, e);
                        report.skipped.push(SkippedImage {
                            id: id.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
            }

            if pages.is_empty() {
                log::warn!("Part {} has no renderable images; no file written", part);
                report.empty_chunks.push(part);
                continue;
            }

            let path = out_dir.join(part_file_name(doc_name, part));
            write_reference_pdf(&pages, &self.layout, &path)?;
            log::info!("Created {} ({} pages)", path.display(), pages.len());
            report.parts.push(ReferencePart {
                part,
                path,
                pages: pages.len(),
            });
        }

        Ok(report)
    }

    fn render_chunk<S: ImageStore + ?Sized>(
        &self,
        chunk: &[String],
        store: &S,
    ) -> Vec<Result<RgbImage>> {
        if self.parallel {
            chunk.par_iter().map(|id| self.render_one(id, store)).collect()
        } else {
            chunk.iter().map(|id| self.render_one(id, store)).collect()
        }
    }

    fn render_one<S: ImageStore + ?Sized>(&self, id: &str, store: &S) -> Result<RgbImage> {
        let data = store.load(id)?;
        let image = normalize(id, &data)?;
        Ok(build_reference_page(&image, id, &self.layout, &self.font))
    }
}
