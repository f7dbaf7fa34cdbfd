//! DOCX text extraction.
//!
//! A DOCX file is a zip archive whose main text lives in
//! `word/document.xml`. Text runs (`w:t`) are concatenated, paragraph ends
//! (`w:p`) become newlines and tab elements (`w:tab`) become tabs.

use crate::error::{ExtractError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the document text from DOCX bytes.
pub fn extract(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| ExtractError::DocxMissingPart(DOCUMENT_PART))?
        .read_to_string(&mut xml)?;

    tracing::debug!(xml_bytes = xml.len(), "extracting DOCX text");
    document_text(&xml)
}

/// Walk the document XML and collect the visible text.
fn document_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run = true,
            Event::End(e) if e.name().as_ref() == b"w:t" => in_run = false,
            Event::Text(e) if in_run => text.push_str(&e.unescape()?),
            Event::End(e) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Event::Empty(e) if e.name().as_ref() == b"w:tab" => text.push('\t'),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn docx_with_document(xml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn paragraphs_and_runs() {
        let xml = r#"<?xml version="1.0"?>
            <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>the cat</w:t></w:r><w:r><w:t xml:space="preserve"> sat</w:t></w:r></w:p>
                <w:p><w:r><w:t>on the</w:t></w:r><w:tab/><w:r><w:t>mat</w:t></w:r></w:p>
              </w:body>
            </w:document>"#;
        let bytes = docx_with_document(xml);
        let text = extract(&bytes).unwrap();
        assert_eq!(text, "the cat sat\non the\tmat\n");
    }

    #[test]
    fn escaped_entities_are_unescaped() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:r><w:t>a &amp; b &lt; c</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let bytes = docx_with_document(xml);
        assert_eq!(extract(&bytes).unwrap(), "a & b < c\n");
    }

    #[test]
    fn archive_without_document_part_is_rejected() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract(&bytes).unwrap_err();
        assert!(matches!(err, ExtractError::DocxMissingPart(_)));
    }

    #[test]
    fn non_zip_bytes_are_rejected() {
        let err = extract(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, ExtractError::Zip(_)));
    }
}
