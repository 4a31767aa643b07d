//! Text Extractor — converts an uploaded PDF or DOCX buffer into plain text.
//!
//! No OCR: image-only documents fall below the minimum-length gate and are
//! rejected before any model call is made.

use std::io::{Cursor, Read};

use anyhow::anyhow;

use crate::errors::AppError;

/// Minimum extracted text length. Anything shorter is treated as a corrupt
/// or image-only document.
pub const MIN_TEXT_LEN: usize = 100;

/// Accepted upload formats, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Case-insensitive extension check. Anything but `.pdf` / `.docx` is
    /// rejected with `UnsupportedFormat`.
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(FileKind::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(FileKind::Docx)
        } else {
            Err(AppError::UnsupportedFormat)
        }
    }
}

/// Extracts plain text from the uploaded bytes and enforces the minimum
/// content gate.
pub fn extract_text(data: &[u8], kind: FileKind) -> Result<String, AppError> {
    let text = match kind {
        FileKind::Pdf => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Validation(format!("Failed to read PDF document: {e}")))?,
        FileKind::Docx => extract_docx_text(data)?,
    };

    if text.trim().len() < MIN_TEXT_LEN {
        return Err(AppError::InsufficientContent);
    }

    Ok(text)
}

/// DOCX is a zip archive; the body lives in `word/document.xml`. Paragraph
/// closes become newlines, all other tags are dropped.
fn extract_docx_text(data: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| AppError::Validation(format!("Failed to read DOCX archive: {e}")))?;

    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|_| AppError::Validation("DOCX is missing word/document.xml".to_string()))?;

    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|e| AppError::Internal(anyhow!("Failed to read DOCX body: {e}")))?;

    Ok(strip_xml_tags(&xml))
}

/// Drops XML tags, keeping text content. `</w:p>` is mapped to a newline so
/// paragraphs survive as line breaks.
fn strip_xml_tags(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len() / 4);
    let mut in_tag = false;
    let mut tag = String::new();

    for ch in xml.chars() {
        match ch {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' => {
                in_tag = false;
                if tag == "/w:p" {
                    out.push('\n');
                }
            }
            _ if in_tag => tag.push(ch),
            _ => out.push(ch),
        }
    }

    decode_entities(&out)
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
