//! PDF text extraction.

use crate::error::Result;
use lopdf::Document;

/// Extract the text of every page, joined with newlines.
///
/// A page whose content cannot be decoded contributes an empty string
/// instead of failing the whole document.
pub fn extract(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes)?;

    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    tracing::debug!(pages = pages.len(), "extracting PDF text");

    let page_texts: Vec<String> = pages
        .iter()
        .map(|&number| doc.extract_text(&[number]).unwrap_or_default())
        .collect();

    Ok(page_texts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn garbage_bytes_are_a_pdf_error() {
        let err = extract(b"%PDF- but not actually a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
