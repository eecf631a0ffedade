//! Visual reference generation.
//!
//! Every extracted image is flattened to opaque RGB, drawn on a labeled A4
//! page, and the pages are grouped into numbered PDF documents. A single
//! image failing to decode is logged and left out; it never aborts the batch.

mod font;
mod normalize;
mod page;
mod paginate;
mod pdf;

pub use font::LabelFont;
pub use normalize::{composite_over_white, detect_color_mode, normalize, NormalizedImage};
pub use page::{build_reference_page, fit_within, label_text, PageLayout};
pub use paginate::{
    part_file_name, DirectoryStore, ImageStore, PaginationReport, Paginator, ReferencePart,
    SkippedImage, DEFAULT_CHUNK_SIZE,
};
pub use pdf::{reference_pdf_bytes, write_reference_pdf};
