//! Labeled reference pages.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use super::font::LabelFont;
use super::normalize::NormalizedImage;

/// Page geometry for reference pages, in pixels (1 px = 1 PDF point).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page width
    pub width: u32,
    /// Page height
    pub height: u32,
    /// Margin on every side
    pub margin: u32,
    /// Gap between the label and the image
    pub label_gap: u32,
    /// Label font size in pixels
    pub font_size: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            width: 595,
            height: 842,
            margin: 50,
            label_gap: 20,
            font_size: 24.0,
        }
    }
}

impl PageLayout {
    /// A4 at 72 dpi with the default margins.
    pub fn a4() -> Self {
        Self::default()
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the label font size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Largest image box that fits below a label of height `label_height`.
    pub fn image_box(&self, label_height: u32) -> (u32, u32) {
        let width = self.width.saturating_sub(2 * self.margin);
        let height = self
            .height
            .saturating_sub(3 * self.margin)
            .saturating_sub(label_height);
        (width, height)
    }
}

/// Format the label text for an image identifier.
pub fn label_text(id: &str) -> String {
    format!("ID: {}", id)
}

/// Dimensions after fitting (`w`, `h`) into (`max_w`, `max_h`) without enlarging.
pub fn fit_within(w: u32, h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if w == 0 || h == 0 {
        return (w, h);
    }
    let scale = (max_w as f64 / w as f64)
        .min(max_h as f64 / h as f64)
        .min(1.0);
    if scale >= 1.0 {
        return (w, h);
    }
    let fw = ((w as f64 * scale).floor() as u32).max(1);
    let fh = ((h as f64 * scale).floor() as u32).max(1);
    (fw, fh)
}

/// Render one reference page: white background, centered label, then the
/// image centered horizontally beneath it, downscaled to fit.
pub fn build_reference_page(
    image: &NormalizedImage,
    id: &str,
    layout: &PageLayout,
    font: &LabelFont,
) -> RgbImage {
    let mut page = RgbImage::from_pixel(layout.width, layout.height, Rgb([255, 255, 255]));

    let label = label_text(id);
    let (text_w, text_h) = font.measure(&label, layout.font_size);
    let text_x = (layout.width as i64 - text_w as i64) / 2;
    font.draw(
        &mut page,
        &label,
        text_x as i32,
        layout.margin as i32,
        layout.font_size,
        Rgb([0, 0, 0]),
    );

    let (max_w, max_h) = layout.image_box(text_h);
    let (w, h) = fit_within(image.width(), image.height(), max_w, max_h);
    if w == 0 || h == 0 {
        return page;
    }

    let scaled;
    let pixels = if (w, h) == (image.width(), image.height()) {
        &image.image
    } else {
        scaled = imageops::resize(&image.image, w, h, FilterType::Lanczos3);
        &scaled
    };

    let x = (layout.width as i64 - w as i64) / 2;
    let y = (layout.margin + text_h + layout.label_gap) as i64;
    imageops::replace(&mut page, pixels, x, y);
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorMode;

    fn solid(w: u32, h: u32) -> NormalizedImage {
        NormalizedImage {
            image: RgbImage::from_pixel(w, h, Rgb([200, 0, 0])),
            source_mode: ColorMode::Opaque,
        }
    }

    #[test]
    fn test_default_layout() {
        let layout = PageLayout::default();
        assert_eq!((layout.width, layout.height, layout.margin), (595, 842, 50));
        assert_eq!(layout.image_box(21), (495, 842 - 150 - 21));
    }

    #[test]
    fn test_fit_never_enlarges() {
        assert_eq!(fit_within(100, 50, 495, 600), (100, 50));
        assert_eq!(fit_within(1000, 500, 500, 600), (500, 250));
        assert_eq!(fit_within(10000, 1, 500, 600), (500, 1));
    }

    #[test]
    fn test_page_geometry_and_placement() {
        let layout = PageLayout::default();
        let font = LabelFont::embedded();
        let page = build_reference_page(&solid(100, 40), "image1.png", &layout, &font);
        assert_eq!(page.dimensions(), (595, 842));

        let (_, text_h) = font.measure("ID: image1.png", 24.0);
        let x = (595 - 100) / 2;
        let y = 50 + text_h + 20;
        assert_eq!(page.get_pixel(x, y), &Rgb([200, 0, 0]));
        assert_eq!(page.get_pixel(x + 99, y + 39), &Rgb([200, 0, 0]));
        assert_eq!(page.get_pixel(x - 1, y), &Rgb([255, 255, 255]));
        assert_eq!(page.get_pixel(x, y + 40), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_large_image_downscaled_inside_margins() {
        let layout = PageLayout::default();
        let font = LabelFont::embedded();
        let page = build_reference_page(&solid(2000, 3000), "big.png", &layout, &font);
        assert_eq!(page.dimensions(), (595, 842));
        // bottom margin stays blank
        assert_eq!(page.get_pixel(297, 842 - 10), &Rgb([255, 255, 255]));
        // left margin stays blank
        assert_eq!(page.get_pixel(10, 400), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_label_text() {
        assert_eq!(label_text("image3.jpeg"), "ID: image3.jpeg");
    }
}
