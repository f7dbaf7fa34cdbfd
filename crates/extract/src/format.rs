//! Document format detection.
//!
//! Uploads arrive as a file name plus raw bytes; the name's extension is
//! authoritative, magic bytes are the fallback for inputs with no useful
//! extension.

use crate::error::{ExtractError, Result};

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Plain UTF-8 text
    Text,
    /// PDF document
    Pdf,
    /// Word document (OOXML)
    Docx,
}

impl DocumentFormat {
    /// Detect the format from a file name's extension.
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())?;
        match ext.as_str() {
            "txt" | "text" => Some(Self::Text),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Detect the format from leading magic bytes.
    ///
    /// A DOCX file is a zip archive, so the `PK` signature is taken to mean
    /// DOCX here; `extract_text` rejects archives without a document part.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"%PDF-") {
            Some(Self::Pdf)
        } else if bytes.starts_with(b"PK\x03\x04") {
            Some(Self::Docx)
        } else {
            None
        }
    }

    /// Detect by extension first, then by content, then give up.
    pub fn detect(name: &str, bytes: &[u8]) -> Result<Self> {
        Self::from_name(name)
            .or_else(|| Self::sniff(bytes))
            .ok_or_else(|| ExtractError::UnsupportedFormat(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_by_extension() {
        assert_eq!(DocumentFormat::from_name("notes.txt"), Some(DocumentFormat::Text));
        assert_eq!(DocumentFormat::from_name("Report.PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_name("cv.docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_name("archive.tar.gz"), None);
        assert_eq!(DocumentFormat::from_name("no_extension"), None);
    }

    #[test]
    fn detect_by_magic_bytes() {
        assert_eq!(DocumentFormat::sniff(b"%PDF-1.7 rest"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::sniff(b"PK\x03\x04zipdata"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::sniff(b"just some text"), None);
    }

    #[test]
    fn extension_wins_over_content() {
        // a text file that happens to start with %PDF- stays text
        let format = DocumentFormat::detect("pdf_notes.txt", b"%PDF- is a magic prefix").unwrap();
        assert_eq!(format, DocumentFormat::Text);
    }

    #[test]
    fn unknown_input_is_an_error() {
        let err = DocumentFormat::detect("blob.bin", b"\x00\x01\x02").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(name) if name == "blob.bin"));
    }
}
