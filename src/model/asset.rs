//! Image assets extracted from a document package.

use serde::{Deserialize, Serialize};

/// File extensions recognized as extractable images (lowercase, no dot).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

/// Check whether a filename carries a recognized image extension (case-insensitive).
pub fn has_image_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.iter().any(|e| *e == ext)
        }
        _ => false,
    }
}

/// An image file extracted from the document's media folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Filename, unique within a document (basename of the archive entry)
    pub filename: String,

    /// Raw encoded bytes as stored in the package
    #[serde(skip_serializing)]
    pub data: Vec<u8>,

    /// MIME type sniffed from the data, if recognized
    pub mime_type: Option<String>,
}

impl ImageAsset {
    /// Create an asset from its filename and raw bytes.
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        let mime_type = detect_mime_type(&data).map(str::to_string);
        Self {
            filename: filename.into(),
            data,
            mime_type,
        }
    }

    /// Get the size of the asset data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Lowercase extension of the filename, if any.
    pub fn extension(&self) -> Option<String> {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

/// Color mode of a source image, as it matters for normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// No transparency information
    Opaque,
    /// Carries an alpha channel
    Alpha,
    /// Palette image with a transparent entry
    PaletteTransparency,
}

impl ColorMode {
    /// Whether the image must be composited over a background.
    pub fn needs_compositing(self) -> bool {
        !matches!(self, ColorMode::Opaque)
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Opaque => write!(f, "opaque"),
            ColorMode::Alpha => write!(f, "alpha"),
            ColorMode::PaletteTransparency => write!(f, "palette+transparency"),
        }
    }
}

/// Detect MIME type from data magic bytes.
pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
    if data.len() < 8 {
        return None;
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }

    if data.starts_with(PNG_SIGNATURE) {
        return Some("image/png");
    }

    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }

    // TIFF: little-endian or big-endian byte order mark
    if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
    {
        return Some("image/tiff");
    }

    if data.starts_with(b"BM") {
        return Some("image/bmp");
    }

    None
}

pub(crate) const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Inspect a PNG stream for an indexed-color header with a `tRNS` chunk.
pub(crate) fn png_has_palette_transparency(data: &[u8]) -> bool {
    if !data.starts_with(PNG_SIGNATURE) {
        return false;
    }

    let mut pos = PNG_SIGNATURE.len();
    let mut indexed = false;
    while pos + 8 <= data.len() {
        let len = u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
            as usize;
        let kind = &data[pos + 4..pos + 8];
        let body = pos + 8;
        match kind {
            // color type byte sits at offset 9 of IHDR
            b"IHDR" => indexed = data.get(body + 9) == Some(&3),
            b"tRNS" => return indexed,
            b"IDAT" | b"IEND" => return false,
            _ => {}
        }
        pos = body.saturating_add(len).saturating_add(4);
    }
    false
}

/// Inspect a GIF stream for a graphic control extension with the transparency flag set.
pub(crate) fn gif_has_transparency(data: &[u8]) -> bool {
    if !(data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a")) {
        return false;
    }
    data.windows(4)
        .any(|w| w[0] == 0x21 && w[1] == 0xF9 && w[2] == 0x04 && w[3] & 0x01 == 0x01)
}
