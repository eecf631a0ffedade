//! Image normalization to opaque RGB.

use image::{DynamicImage, Rgb, RgbImage, RgbaImage};

use crate::error::{Error, Result};
use crate::model::{gif_has_transparency, png_has_palette_transparency, ColorMode};

/// A decoded image flattened to opaque RGB.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    /// Opaque RGB pixels
    pub image: RgbImage,

    /// Color mode of the source before flattening
    pub source_mode: ColorMode,
}

impl NormalizedImage {
    /// Pixel width.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Pixel height.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Determine how a decoded image carries transparency.
pub fn detect_color_mode(data: &[u8], decoded: &DynamicImage) -> ColorMode {
    if png_has_palette_transparency(data) || gif_has_transparency(data) {
        ColorMode::PaletteTransparency
    } else if decoded.color().has_alpha() {
        ColorMode::Alpha
    } else {
        ColorMode::Opaque
    }
}

/// Decode raw image bytes and flatten them onto a white background.
///
/// `id` only labels the error when decoding fails.
pub fn normalize(id: &str, data: &[u8]) -> Result<NormalizedImage> {
    let decoded = image::load_from_memory(data).map_err(|e| Error::ImageDecode {
        id: id.to_string(),
        reason: e.to_string(),
    })?;

    let source_mode = detect_color_mode(data, &decoded);
    log::trace!(
        "Decoded {} ({}x{}, {})",
        id,
        decoded.width(),
        decoded.height(),
        source_mode
    );

    let image = if source_mode.needs_compositing() {
        // palette images decode to RGBA with the tRNS entries applied
        composite_over_white(&decoded.to_rgba8())
    } else {
        decoded.to_rgb8()
    };

    Ok(NormalizedImage { image, source_mode })
}

/// Alpha-composite RGBA pixels over opaque white.
pub fn composite_over_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        Rgb([blend(r, a), blend(g, a), blend(b, a)])
    })
}

#[inline]
fn blend(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}
