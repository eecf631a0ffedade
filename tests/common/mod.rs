//! Synthetic DOCX packages for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use zip::write::SimpleFileOptions;

pub const IMAGE_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
pub const STYLES_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading3"><w:name w:val="heading 3"/></w:style>
  <w:style w:type="paragraph" w:styleId="ListParagraph"><w:name w:val="List Paragraph"/></w:style>
</w:styles>"#;

/// Builds a `.docx` package in memory.
#[derive(Default)]
pub struct DocxBuilder {
    paragraphs: Vec<String>,
    relationships: Vec<(String, String, String)>,
    media: Vec<(String, Vec<u8>)>,
    extra: Vec<(String, Vec<u8>)>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph with a style id and text.
    pub fn paragraph(mut self, style_id: Option<&str>, text: &str) -> Self {
        let ppr = style_id
            .map(|id| format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, id))
            .unwrap_or_default();
        let run = if text.is_empty() {
            String::new()
        } else {
            format!(r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#, text)
        };
        self.paragraphs.push(format!("<w:p>{}{}</w:p>", ppr, run));
        self
    }

    /// Raw body-level markup (tables, section properties).
    pub fn raw(mut self, markup: &str) -> Self {
        self.paragraphs.push(markup.to_string());
        self
    }

    pub fn heading(self, level: u8, text: &str) -> Self {
        let id = format!("Heading{}", level);
        self.paragraph(Some(&id), text)
    }

    /// Paragraph holding inline pictures for each relationship id, then text.
    pub fn picture(mut self, rel_ids: &[&str], text: &str) -> Self {
        let mut body = String::new();
        for rel_id in rel_ids {
            body.push_str(&drawing(rel_id));
        }
        if !text.is_empty() {
            body.push_str(&format!("<w:r><w:t>{}</w:t></w:r>", text));
        }
        self.paragraphs.push(format!("<w:p>{}</w:p>", body));
        self
    }

    pub fn relationship(mut self, id: &str, target: &str, rel_type: &str) -> Self {
        self.relationships
            .push((id.to_string(), target.to_string(), rel_type.to_string()));
        self
    }

    /// Image relationship plus the matching media entry.
    pub fn image(self, rel_id: &str, filename: &str, data: Vec<u8>) -> Self {
        self.relationship(rel_id, &format!("media/{}", filename), IMAGE_REL)
            .media(filename, data)
    }

    /// Media entry without a relationship.
    pub fn media(mut self, filename: &str, data: Vec<u8>) -> Self {
        self.media.push((filename.to_string(), data));
        self
    }

    /// Arbitrary archive entry.
    pub fn entry(mut self, name: &str, data: &[u8]) -> Self {
        self.extra.push((name.to_string(), data.to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(self.document_xml().as_bytes()).unwrap();

        writer.start_file("word/styles.xml", options).unwrap();
        writer.write_all(STYLES.as_bytes()).unwrap();

        writer
            .start_file("word/_rels/document.xml.rels", options)
            .unwrap();
        writer.write_all(self.rels_xml().as_bytes()).unwrap();

        for (name, data) in &self.media {
            writer
                .start_file(format!("word/media/{}", name), options)
                .unwrap();
            writer.write_all(data).unwrap();
        }
        for (name, data) in &self.extra {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(data).unwrap();
        }

        writer.finish().unwrap().into_inner()
    }

    /// Write the package to `dir/name`.
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }

    fn document_xml(&self) -> String {
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#,
                r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
                r#" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing""#,
                r#" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#,
                r#" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture">"#,
                "<w:body>{}</w:body></w:document>"
            ),
            self.paragraphs.concat()
        )
    }

    fn rels_xml(&self) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        xml.push_str(&format!(
            r#"<Relationship Id="rIdStyles" Type="{}" Target="styles.xml"/>"#,
            STYLES_REL
        ));
        for (id, target, rel_type) in &self.relationships {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                id, rel_type, target
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}

fn drawing(rel_id: &str) -> String {
    format!(
        concat!(
            "<w:r><w:drawing><wp:inline><a:graphic>",
            r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture">"#,
            r#"<pic:pic><pic:blipFill><a:blip r:embed="{}"/></pic:blipFill></pic:pic>"#,
            "</a:graphicData></a:graphic></wp:inline></w:drawing></w:r>"
        ),
        rel_id
    )
}

/// Opaque PNG of a single color.
pub fn png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color))),
        ImageFormat::Png,
    )
}

/// PNG whose left half is opaque `color` and right half fully transparent.
pub fn transparent_png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([color[0], color[1], color[2], 255])
        } else {
            Rgba([color[0], color[1], color[2], 0])
        }
    });
    encode(DynamicImage::ImageRgba8(img), ImageFormat::Png)
}

/// Opaque JPEG.
pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([40, 90, 160]))),
        ImageFormat::Jpeg,
    )
}

fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

/// Sorted file names in a directory.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
