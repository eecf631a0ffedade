//! Writes reference pages as a multi-page PDF.
//!
//! Each page carries its raster as one Flate-compressed DeviceRGB image
//! painted over the full MediaBox.

use std::io::Write;
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::RgbImage;
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::error::{Error, Result};

use super::page::PageLayout;

/// Build a PDF from rendered pages and return its bytes.
pub fn reference_pdf_bytes(pages: &[RgbImage], layout: &PageLayout) -> Result<Vec<u8>> {
    let mut doc = build_document(pages, layout)?;
    let mut buf = Vec::new();
    doc.save_to(&mut buf)?;
    Ok(buf)
}

/// Build a PDF from rendered pages and write it to `path`.
pub fn write_reference_pdf(pages: &[RgbImage], layout: &PageLayout, path: &Path) -> Result<()> {
    let mut doc = build_document(pages, layout)?;
    doc.save(path)?;
    log::debug!("Wrote {} page(s) to {}", pages.len(), path.display());
    Ok(())
}

fn build_document(pages: &[RgbImage], layout: &PageLayout) -> Result<Document> {
    if pages.is_empty() {
        return Err(Error::Pdf("no pages to write".to_string()));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(layout.width as i64),
        Object::Integer(layout.height as i64),
    ];

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(pages.len());
    for page in pages {
        let image_id = doc.add_object(image_stream(page)?);

        let content = format!(
            "q {} 0 0 {} 0 0 cm /Im0 Do Q",
            layout.width, layout.height
        );
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box.clone(),
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => image_id },
            },
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(page_ids.len() as i64),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

fn image_stream(page: &RgbImage) -> Result<Stream> {
    let (width, height) = page.dimensions();

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(page.as_raw())?;
    let data = encoder.finish()?;

    let mut stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => Object::Integer(width as i64),
            "Height" => Object::Integer(height as i64),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => Object::Integer(8),
            "Filter" => "FlateDecode",
        },
        data,
    );
    // already compressed
    stream.allows_compression = false;
    Ok(stream)
}
