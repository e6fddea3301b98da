//! PDF text extraction using `lopdf`.
//!
//! Text is pulled page by page in page-number order; page texts are joined
//! with a newline. Scanned pages without a text layer contribute an empty
//! block. Password-protected documents that cannot be opened with an empty
//! password are rejected.

use lopdf::Document;
use std::path::Path;

use crate::error::{HarvestError, Result};

pub fn read_pdf_file(path: impl AsRef<Path>) -> Result<String> {
    let document = Document::load(path.as_ref())?;
    extract_pages(&document)
}

/// Same as [`read_pdf_file`], for a PDF already in memory.
pub fn read_pdf_bytes(bytes: &[u8]) -> Result<String> {
    let document = Document::load_mem(bytes)?;
    extract_pages(&document)
}

fn extract_pages(document: &Document) -> Result<String> {
    // lopdf decrypts on load when the empty user password works; the trailer
    // keeps its /Encrypt entry either way.
    if document.is_encrypted() && document.encryption_state.is_none() {
        return Err(HarvestError::extraction("PDF is password-protected"));
    }

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    let mut blocks = Vec::with_capacity(page_numbers.len());

    for page_number in page_numbers {
        let text = document.extract_text(&[page_number]).map_err(|e| {
            HarvestError::extraction(format!("Text extraction failed on page {}: {}", page_number, e))
        })?;
        blocks.push(text);
    }

    Ok(blocks.join("\n"))
}
