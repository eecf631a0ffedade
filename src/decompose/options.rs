//! Decomposition options.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::parser::ParseOptions;
use crate::skeleton::SkeletonOptions;
use crate::visual::{PageLayout, DEFAULT_CHUNK_SIZE};

/// Output root used when none is given.
pub const DEFAULT_OUTPUT_ROOT: &str = "pipeline_output";

/// Options for a full decomposition run.
#[derive(Debug, Clone)]
pub struct DecomposeOptions {
    /// Package reading options
    pub parse: ParseOptions,

    /// Skeleton extraction options
    pub skeleton: SkeletonOptions,

    /// Reference page geometry
    pub layout: PageLayout,

    /// Maximum images per reference document
    pub chunk_size: usize,

    /// Label font to try before system fonts
    pub font_path: Option<PathBuf>,

    /// Render reference pages in parallel
    pub parallel: bool,
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            skeleton: SkeletonOptions::default(),
            layout: PageLayout::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            font_path: None,
            parallel: true,
        }
    }
}

impl DecomposeOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set package reading options.
    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Set skeleton extraction options.
    pub fn with_skeleton_options(mut self, skeleton: SkeletonOptions) -> Self {
        self.skeleton = skeleton;
        self
    }

    /// Set the page layout.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the number of images per reference document.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the label font path.
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Render pages on the current thread only.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check option values.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidOption(
                "chunk size must be at least 1".to_string(),
            ));
        }
        if self.layout.width <= 2 * self.layout.margin
            || self.layout.height <= 3 * self.layout.margin
        {
            return Err(Error::InvalidOption(format!(
                "margin {} leaves no room on a {}x{} page",
                self.layout.margin, self.layout.width, self.layout.height
            )));
        }
        Ok(())
    }
}
