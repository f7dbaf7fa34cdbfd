//! toknum-extract - "obtain a text string" from an uploaded document
//!
//! The tokenizer core consumes plain strings; this crate turns an uploaded
//! file (plain text, PDF or DOCX) into one. Format detection goes by file
//! extension first and magic bytes second.
//!
//! # Example
//!
//! ```rust
//! use toknum_extract::extract;
//!
//! let text = extract("notes.txt", b"the cat sat")?;
//! assert_eq!(text, "the cat sat");
//! # Ok::<(), toknum_extract::ExtractError>(())
//! ```

pub mod error;
pub use error::{ExtractError, Result};

mod docx;
mod pdf;

pub mod format;
pub use format::DocumentFormat;

/// Extract text from `bytes` in the given format.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Text => Ok(String::from_utf8(bytes.to_vec())?),
        DocumentFormat::Pdf => pdf::extract(bytes),
        DocumentFormat::Docx => docx::extract(bytes),
    }
}

/// Detect the format of a named upload and extract its text.
pub fn extract(name: &str, bytes: &[u8]) -> Result<String> {
    let format = DocumentFormat::detect(name, bytes)?;
    tracing::debug!(name, ?format, "extracting uploaded document");
    extract_text(bytes, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let text = extract("input.txt", "caf\u{e9} au lait".as_bytes()).unwrap();
        assert_eq!(text, "caf\u{e9} au lait");
    }

    #[test]
    fn invalid_utf8_text_is_rejected() {
        let err = extract("input.txt", &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUtf8(_)));
    }

    #[test]
    fn unnamed_zip_bytes_route_to_docx() {
        // sniffed as a zip container, then rejected for the missing part
        let err = extract("upload", b"PK\x03\x04notreal").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Zip(_) | ExtractError::DocxMissingPart(_)
        ));
    }
}
