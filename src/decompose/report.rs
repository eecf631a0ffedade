//! Decomposition results.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::skeleton::ExtractionStats;
use crate::visual::SkippedImage;

/// Directory holding extracted images.
pub const MEDIA_DIR: &str = "media_source";

/// Directory holding reference PDFs.
pub const VISUAL_REFS_DIR: &str = "visual_refs";

/// File name of the skeleton artifact.
pub const SKELETON_FILE: &str = "skeleton.md";

/// Paths of one document's output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLayout {
    /// `<root>/<stem>`
    pub document_dir: PathBuf,
}

impl OutputLayout {
    /// Output tree for `document_name` under `output_root`.
    pub fn new(output_root: &Path, document_name: &str) -> Self {
        Self {
            document_dir: output_root.join(document_name),
        }
    }

    /// Flat directory of extracted images.
    pub fn media_dir(&self) -> PathBuf {
        self.document_dir.join(MEDIA_DIR)
    }

    /// Directory of reference PDFs.
    pub fn visual_refs_dir(&self) -> PathBuf {
        self.document_dir.join(VISUAL_REFS_DIR)
    }

    /// Skeleton markdown path.
    pub fn skeleton_path(&self) -> PathBuf {
        self.document_dir.join(SKELETON_FILE)
    }
}

/// Summary of one decomposition run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompositionReport {
    /// Input file stem
    pub document_name: String,

    /// Output tree
    pub layout: OutputLayout,

    /// Extracted image filenames in natural order
    pub images: Vec<String>,

    /// Reference PDFs written
    pub visual_refs: Vec<PathBuf>,

    /// Images left out of the reference PDFs
    pub skipped_images: Vec<SkippedImage>,

    /// Skeleton extraction statistics
    pub stats: ExtractionStats,
}

impl DecompositionReport {
    /// Number of extracted images.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Number of image anchors in the skeleton.
    pub fn anchor_count(&self) -> u32 {
        self.stats.anchor_count
    }

    /// Number of embed references that did not resolve.
    pub fn unresolved_count(&self) -> u32 {
        self.stats.unresolved_count
    }

    /// Skeleton markdown path.
    pub fn skeleton_path(&self) -> PathBuf {
        self.layout.skeleton_path()
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::Error::Other(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = OutputLayout::new(Path::new("out"), "report");
        assert_eq!(layout.media_dir(), Path::new("out/report/media_source"));
        assert_eq!(layout.visual_refs_dir(), Path::new("out/report/visual_refs"));
        assert_eq!(layout.skeleton_path(), Path::new("out/report/skeleton.md"));
    }

    #[test]
    fn test_report_json() {
        let report = DecompositionReport {
            document_name: "report".into(),
            layout: OutputLayout::new(Path::new("out"), "report"),
            images: vec!["image1.png".into()],
            visual_refs: vec![],
            skipped_images: vec![],
            stats: ExtractionStats::default(),
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("\"document_name\": \"report\""));
        assert!(json.contains("image1.png"));
        assert_eq!(report.image_count(), 1);
    }
}
