//! Label fonts for reference pages.
//!
//! Fonts are rasterized with `ab_glyph`. A caller-supplied or system font is
//! preferred; DejaVu Sans Mono is compiled into the binary so labels are
//! always drawable.

use std::path::{Path, PathBuf};

use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::error::{Error, Result};

/// Font compiled into the binary, used when nothing else loads.
const EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

/// Well-known locations of a sans-serif TrueType font.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A font used to draw page labels.
#[derive(Clone)]
pub struct LabelFont {
    font: FontArc,
    /// File the font was read from; `None` for the embedded font
    source: Option<PathBuf>,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(path) => f.debug_tuple("LabelFont").field(path).finish(),
            None => f.write_str("LabelFont(embedded)"),
        }
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        LabelFont::load(None)
    }
}

impl LabelFont {
    /// Load the best available font.
    ///
    /// Tries `explicit` first, then the system candidates, then the embedded
    /// font. Never fails.
    pub fn load(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            match Self::from_path(path) {
                Ok(font) => return font,
                Err(e) => log::warn!("{}; trying system fonts", e),
            }
        }

        for candidate in SYSTEM_FONT_CANDIDATES {
            let path = Path::new(candidate);
            if !path.is_file() {
                continue;
            }
            if let Ok(font) = Self::from_path(path) {
                log::debug!("Using label font {}", path.display());
                return font;
            }
        }

        log::debug!("No system font found, using embedded DejaVu Sans Mono");
        LabelFont::embedded()
    }

    /// Load a font from a TrueType/OpenType file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| Error::Font(format!("{}: {}", path.display(), e)))?;
        let font = FontArc::try_from_vec(data)
            .map_err(|e| Error::Font(format!("{}: {}", path.display(), e)))?;
        Ok(LabelFont {
            font,
            source: Some(path.to_path_buf()),
        })
    }

    /// The font compiled into the binary.
    pub fn embedded() -> Self {
        let font = FontArc::try_from_slice(EMBEDDED_FONT).expect("embedded font is a valid TTF");
        LabelFont { font, source: None }
    }

    /// Check if this is the embedded font.
    pub fn is_embedded(&self) -> bool {
        self.source.is_none()
    }

    /// File the font was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Rendered (width, height) of `text` at `size` pixels.
    pub fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        text_size(PxScale::from(size), &self.font, text)
    }

    /// Draw `text` with its top-left corner at (`x`, `y`).
    pub fn draw(&self, canvas: &mut RgbImage, text: &str, x: i32, y: i32, size: f32, color: Rgb<u8>) {
        draw_text_mut(canvas, color, x, y, PxScale::from(size), &self.font, text);
    }
}
