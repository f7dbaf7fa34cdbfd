//! Error types for document text extraction.

use thiserror::Error;

/// Main error type for the extraction crate.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input claimed to be plain text but is not valid UTF-8
    #[error("file is not valid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// PDF parsing error
    #[error("failed to read PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    /// DOCX container error
    #[error("failed to read DOCX archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// DOCX archive is missing its document part
    #[error("DOCX archive has no {0}")]
    DocxMissingPart(&'static str),

    /// DOCX document XML error
    #[error("failed to parse DOCX document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Neither the file name nor the content identified a supported format
    #[error("unsupported document format for `{0}`, expected PDF, DOCX or plain text")]
    UnsupportedFormat(String),

    /// I/O error while reading document bytes
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
