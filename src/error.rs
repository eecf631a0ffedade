//! Error types for undocx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decomposing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document does not exist.
    #[error("Input document not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The file is not a ZIP-based document package.
    #[error("Unknown file format: not a valid DOCX package")]
    NotAPackage,

    /// Error reading the package archive.
    #[error("Archive error: {0}")]
    Archive(String),

    /// A required part is missing from the package.
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// Malformed XML inside a package part.
    #[error("XML error: {0}")]
    Xml(String),

    /// A single image could not be decoded or normalized.
    #[error("Image decoding error for {id}: {reason}")]
    ImageDecode {
        /// Identifier (filename) of the failing image
        id: String,
        /// Underlying decoder message
        reason: String,
    },

    /// Error loading a label font.
    #[error("Font error: {0}")]
    Font(String),

    /// Error writing a visual-reference PDF.
    #[error("PDF writing error: {0}")]
    Pdf(String),

    /// An option value is out of range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the error only affects a single image and the batch may continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ImageDecode { .. })
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::InvalidArchive(_) => Error::NotAPackage,
            zip::result::ZipError::FileNotFound => Error::MissingPart(err.to_string()),
            _ => Error::Archive(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            _ => Error::Other(format!("Image error: {}", err)),
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}
