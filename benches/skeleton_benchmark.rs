//! Benchmarks for undocx hot paths.
//!
//! Run with: cargo bench
//!
//! Documents are built in memory so the numbers exclude archive I/O.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};

use undocx::model::{Document, Paragraph, RelationshipEntry};
use undocx::visual::{build_reference_page, LabelFont, NormalizedImage, PageLayout};
use undocx::{extract_skeleton, natural_sort, SkeletonOptions};

const IMAGE_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Creates a document where every fifth paragraph holds an image.
fn create_test_document(paragraph_count: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..paragraph_count {
        let para = if i % 5 == 0 {
            let rel_id = format!("rId{}", i + 100);
            doc.relationships.push(RelationshipEntry::new(
                rel_id.clone(),
                format!("media/image{}.png", i),
                IMAGE_REL,
            ));
            Paragraph::with_text(format!("Figure {}", i)).with_markup(format!(
                r#"<w:p><w:r><w:drawing><a:graphicData><a:blip r:embed="{}"/></a:graphicData></w:drawing></w:r></w:p>"#,
                rel_id
            ))
        } else if i % 7 == 0 {
            Paragraph::with_text(format!("Section {}", i)).with_style("Heading 2")
        } else {
            Paragraph::with_text("Benchmark body text for skeleton extraction throughput.")
        };
        doc.add_paragraph(para);
    }
    doc
}

/// Benchmark natural sort of media names.
fn bench_natural_sort(c: &mut Criterion) {
    let names: Vec<String> = (0..500).rev().map(|i| format!("image{}.png", i)).collect();

    c.bench_function("natural_sort_500", |b| {
        b.iter(|| {
            let mut names = names.clone();
            natural_sort(black_box(names.as_mut_slice()));
        });
    });
}

/// Benchmark skeleton extraction at various sizes.
fn bench_skeleton_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("skeleton_extraction");

    for paragraph_count in [100, 1000, 5000].iter() {
        let doc = create_test_document(*paragraph_count);
        let options = SkeletonOptions::default();

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| extract_skeleton(black_box(&doc), &options).body());
        });
    }

    group.finish();
}

/// Benchmark rendering one reference page.
fn bench_reference_page(c: &mut Criterion) {
    let layout = PageLayout::default();
    let font = LabelFont::embedded();
    let image = NormalizedImage {
        image: RgbImage::from_pixel(1200, 900, Rgb([30, 60, 90])),
        source_mode: undocx::model::ColorMode::Opaque,
    };

    c.bench_function("reference_page_1200x900", |b| {
        b.iter(|| build_reference_page(black_box(&image), "image1.png", &layout, &font));
    });
}

criterion_group!(
    benches,
    bench_natural_sort,
    bench_skeleton_extraction,
    bench_reference_page,
);
criterion_main!(benches);
