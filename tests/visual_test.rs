//! Integration tests for visual reference generation.

mod common;

use std::collections::HashMap;

use common::{png, transparent_png};
use image::Rgb;
use undocx::model::ColorMode;
use undocx::visual::{
    build_reference_page, normalize, reference_pdf_bytes, LabelFont, PageLayout, Paginator,
};

#[test]
fn test_transparency_flattened_to_white() {
    let normalized = normalize("image1.png", &transparent_png(8, 4, [12, 34, 56])).unwrap();
    assert_eq!(normalized.source_mode, ColorMode::Alpha);

    for (x, _, pixel) in normalized.image.enumerate_pixels() {
        if x < 4 {
            assert_eq!(pixel, &Rgb([12, 34, 56]));
        } else {
            assert_eq!(pixel, &Rgb([255, 255, 255]));
        }
    }
}

#[test]
fn test_reference_page_keeps_label_area_above_image() {
    let layout = PageLayout::default();
    let font = LabelFont::embedded();
    let image = normalize("tall.png", &png(100, 5000, [0, 0, 0])).unwrap();

    let page = build_reference_page(&image, "tall.png", &layout, &font);
    let (_, label_h) = font.measure("ID: tall.png", layout.font_size);

    // gap row between label and image is blank across the page
    let gap_row = layout.margin + label_h + layout.label_gap / 2;
    assert!((0..layout.width).all(|x| page.get_pixel(x, gap_row) == &Rgb([255, 255, 255])));

    // image starts right after the gap
    let top = layout.margin + label_h + layout.label_gap;
    assert_eq!(page.get_pixel(layout.width / 2, top), &Rgb([0, 0, 0]));
}

#[test]
fn test_pdf_pages_follow_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let ids: Vec<String> = ["b.png", "a.png", "c.png"].iter().map(|s| s.to_string()).collect();
    let store: HashMap<String, Vec<u8>> = ids
        .iter()
        .map(|id| (id.clone(), png(3, 3, [9, 9, 9])))
        .collect();

    let report = Paginator::new(PageLayout::default(), LabelFont::embedded())
        .paginate(&ids, &store, dir.path(), "order")
        .unwrap();
    assert_eq!(report.parts.len(), 1);
    assert_eq!(report.page_count(), 3);

    let doc = lopdf::Document::load(&report.parts[0].path).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
}

#[test]
fn test_pdf_bytes_parse_back() {
    let layout = PageLayout::default();
    let font = LabelFont::embedded();
    let image = normalize("x.png", &png(10, 10, [255, 0, 0])).unwrap();
    let page = build_reference_page(&image, "x.png", &layout, &font);

    let bytes = reference_pdf_bytes(&[page], &layout).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}
