//! Full decomposition of one DOCX file into its output tree.
//!
//! The output for `report.docx` under root `out/` is:
//!
//! ```text
//! out/report/
//!   media_source/                    extracted images, flat
//!   visual_refs/report_VisualRef_PartN.pdf
//!   skeleton.md
//! ```
//!
//! The document tree is deleted and rebuilt on every run, so repeated runs
//! over the same input produce identical media and skeleton files.
//!
//! # Example
//!
//! ```no_run
//! use undocx::decompose::{DecomposeOptions, Decomposer};
//!
//! fn main() -> undocx::Result<()> {
//!     let report = Decomposer::new(DecomposeOptions::default().with_chunk_size(20))
//!         .decompose("report.docx", "pipeline_output")?;
//!     println!("{} images, {} reference PDFs", report.image_count(), report.visual_refs.len());
//!     Ok(())
//! }
//! ```

mod options;
mod report;

pub use options::{DecomposeOptions, DEFAULT_OUTPUT_ROOT};
pub use report::{DecompositionReport, OutputLayout, MEDIA_DIR, SKELETON_FILE, VISUAL_REFS_DIR};

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::ImageAsset;
use crate::parser::DocxParser;
use crate::skeleton::{RelationshipMap, SkeletonExtractor};
use crate::visual::{DirectoryStore, LabelFont, PaginationReport, Paginator};

/// Runs the decomposition pipeline.
#[derive(Debug, Clone, Default)]
pub struct Decomposer {
    options: DecomposeOptions,
}

impl Decomposer {
    /// Create a decomposer with the given options.
    pub fn new(options: DecomposeOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &DecomposeOptions {
        &self.options
    }

    /// Decompose `input` into `<output_root>/<input stem>/`.
    ///
    /// Nothing under `output_root` is touched until the input has been
    /// found, opened and parsed.
    pub fn decompose<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output_root: Q,
    ) -> Result<DecompositionReport> {
        let input = input.as_ref();
        let output_root = output_root.as_ref();

        if !input.is_file() {
            return Err(Error::InputNotFound(input.to_path_buf()));
        }
        self.options.validate()?;

        let document_name = document_name(input);
        log::info!("Decomposing {}", input.display());

        let mut parser = DocxParser::open_with_options(input, self.options.parse.clone())?;
        let document = parser.parse()?;
        let assets = parser.extract_media()?;

        let layout = OutputLayout::new(output_root, &document_name);
        reset_output(&layout)?;

        let images = write_media(&assets, &layout.media_dir())?;
        log::info!("Extracted {} images", images.len());

        let pagination = if images.is_empty() {
            log::info!("No images found; skipping visual references");
            PaginationReport::default()
        } else {
            let font = LabelFont::load(self.options.font_path.as_deref());
            let paginator = Paginator::new(self.options.layout, font)
                .with_chunk_size(self.options.chunk_size)
                .with_parallel(self.options.parallel);
            let store = DirectoryStore::new(layout.media_dir());
            paginator.paginate(&images, &store, &layout.visual_refs_dir(), &document_name)?
        };

        let map = RelationshipMap::resolve(&document.relationships);
        let extractor = SkeletonExtractor::new(&map, self.options.skeleton.clone());
        let (skeleton, stats) = extractor.extract_with_stats(&document.paragraphs);
        fs::write(layout.skeleton_path(), skeleton.to_markdown(&document_name))?;
        log::info!(
            "Wrote skeleton with {} lines and {} anchors",
            skeleton.len(),
            stats.anchor_count
        );

        Ok(DecompositionReport {
            document_name,
            visual_refs: pagination.files(),
            skipped_images: pagination.skipped,
            layout,
            images,
            stats,
        })
    }
}

/// Input file stem used to name the output tree.
pub fn document_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

fn reset_output(layout: &OutputLayout) -> Result<()> {
    if layout.document_dir.exists() {
        log::debug!("Removing previous output {}", layout.document_dir.display());
        fs::remove_dir_all(&layout.document_dir)?;
    }
    fs::create_dir_all(layout.media_dir())?;
    fs::create_dir_all(layout.visual_refs_dir())?;
    Ok(())
}

fn write_media(assets: &[ImageAsset], media_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(assets.len());
    for asset in assets {
        fs::write(media_dir.join(&asset.filename), &asset.data)?;
        log::debug!("Extracted {} ({} bytes)", asset.filename, asset.size());
        names.push(asset.filename.clone());
    }
    Ok(names)
}

/// Decompose a file with default options.
pub fn decompose_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_root: Q,
) -> Result<DecompositionReport> {
    Decomposer::default().decompose(input, output_root)
}
