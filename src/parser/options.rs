//! Parsing options and configuration.

/// Archive folder holding the main document's media.
pub const DEFAULT_MEDIA_PREFIX: &str = "word/media/";

/// Options for reading DOCX packages.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Also yield paragraphs nested in table cells
    pub include_table_paragraphs: bool,

    /// Archive folder scanned for images (with trailing slash)
    pub media_prefix: String,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (tolerate malformed auxiliary parts).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Include paragraphs from table cells.
    pub fn with_table_paragraphs(mut self, include: bool) -> Self {
        self.include_table_paragraphs = include;
        self
    }

    /// Set the media folder prefix.
    pub fn with_media_prefix(mut self, prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        self.media_prefix = prefix;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            include_table_paragraphs: false,
            media_prefix: DEFAULT_MEDIA_PREFIX.to_string(),
        }
    }
}

/// Error handling mode during parsing.
///
/// Only auxiliary parts (relationships, styles) are affected; a malformed
/// main document part always fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Fall back to empty tables for unreadable auxiliary parts
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .lenient()
            .with_table_paragraphs(true)
            .with_media_prefix("word/images");

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.include_table_paragraphs);
        assert_eq!(options.media_prefix, "word/images/");
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(!options.include_table_paragraphs);
        assert_eq!(options.media_prefix, "word/media/");
    }
}
