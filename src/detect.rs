//! DOCX package detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Package format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFormat {
    /// Whether the archive has no entries at all
    pub empty: bool,
}

impl std::fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.empty {
            write!(f, "ZIP package (empty)")
        } else {
            write!(f, "ZIP package")
        }
    }
}

/// ZIP local file header magic: PK\x03\x04
const LOCAL_HEADER_MAGIC: &[u8] = b"PK\x03\x04";
/// ZIP end-of-central-directory magic, first record of an empty archive
const EMPTY_ARCHIVE_MAGIC: &[u8] = b"PK\x05\x06";
const MAGIC_LEN: usize = 4;

/// Part every word-processing package must contain.
pub const MAIN_DOCUMENT_PART: &str = "word/document.xml";

/// Detect package format from a file path.
///
/// # Example
/// ```no_run
/// use undocx::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.docx").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PackageFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; MAGIC_LEN];
    match reader.read_exact(&mut header) {
        Ok(()) => detect_format_from_bytes(&header),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Err(Error::NotAPackage),
        Err(e) => Err(e.into()),
    }
}

/// Detect package format from the leading bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PackageFormat> {
    if data.len() < MAGIC_LEN {
        return Err(Error::NotAPackage);
    }

    if data.starts_with(LOCAL_HEADER_MAGIC) {
        return Ok(PackageFormat { empty: false });
    }
    if data.starts_with(EMPTY_ARCHIVE_MAGIC) {
        return Ok(PackageFormat { empty: true });
    }

    Err(Error::NotAPackage)
}

/// Check if bytes start like a ZIP package.
pub fn is_package_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

/// Check if a file is a word-processing package: a ZIP archive with a main document part.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if detect_format_from_path(path).is_err() {
        return false;
    }

    let Ok(file) = File::open(path) else {
        return false;
    };
    let Ok(mut archive) = zip::ZipArchive::new(file) else {
        return false;
    };
    let found = archive.by_name(MAIN_DOCUMENT_PART).is_ok();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_local_header() {
        let data = b"PK\x03\x04\x14\x00\x06\x00";
        let format = detect_format_from_bytes(data).unwrap();
        assert!(!format.empty);
    }

    #[test]
    fn test_detect_empty_archive() {
        let data = b"PK\x05\x06\x00\x00\x00\x00";
        let format = detect_format_from_bytes(data).unwrap();
        assert!(format.empty);
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = detect_format_from_bytes(b"%PDF-1.7");
        assert!(matches!(result, Err(Error::NotAPackage)));
    }

    #[test]
    fn test_detect_too_short() {
        let result = detect_format_from_bytes(b"PK");
        assert!(matches!(result, Err(Error::NotAPackage)));
    }

    #[test]
    fn test_is_package_bytes() {
        assert!(is_package_bytes(b"PK\x03\x04rest"));
        assert!(!is_package_bytes(b"Not a zip"));
        assert!(!is_package_bytes(b""));
    }

    #[test]
    fn test_is_docx_rejects_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.docx");
        std::fs::write(&path, b"plain text").unwrap();
        assert!(!is_docx(&path));
    }
}
