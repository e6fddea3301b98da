//! DOCX (Microsoft Word) paragraph extraction.
//!
//! Reads `word/document.xml` out of the package with `zip` and walks it with
//! `roxmltree`. Only paragraphs that are direct children of `w:body` are
//! emitted, one per line; table cells, headers and footers are not included.
//! A paragraph's text is built from its runs (including runs inside
//! hyperlinks): `w:t` contributes its text, `w:tab`/`w:ptab` a tab,
//! `w:cr` and text-wrapping `w:br` a newline, `w:noBreakHyphen` a hyphen.

use roxmltree::{Document, Node};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

use crate::error::{HarvestError, Result};

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";

/// Extract a `.docx` file as one line per body paragraph.
pub fn read_docx_file(path: impl AsRef<Path>) -> Result<String> {
    let file = File::open(path.as_ref())?;
    extract_paragraphs(file)
}

/// Extract body paragraphs from a DOCX package held by any seekable reader.
pub fn extract_paragraphs<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive = ZipArchive::new(reader)?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| HarvestError::extraction_with_source(format!("Missing {} in DOCX package", DOCUMENT_PART), e))?
        .read_to_string(&mut xml)
        .map_err(|e| HarvestError::extraction_with_source(format!("Failed to read {}", DOCUMENT_PART), e))?;

    let document = Document::parse(&xml)?;
    let body = document
        .root_element()
        .children()
        .find(|n| n.has_tag_name((WORD_NS, "body")))
        .ok_or_else(|| HarvestError::extraction("DOCX document has no body"))?;

    let paragraphs: Vec<String> = body
        .children()
        .filter(|n| n.has_tag_name((WORD_NS, "p")))
        .map(paragraph_text)
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: Node) -> String {
    let mut text = String::new();

    for child in paragraph.children().filter(Node::is_element) {
        if child.has_tag_name((WORD_NS, "r")) {
            push_run_text(child, &mut text);
        } else if child.has_tag_name((WORD_NS, "hyperlink")) {
            for run in child.children().filter(|n| n.has_tag_name((WORD_NS, "r"))) {
                push_run_text(run, &mut text);
            }
        }
    }

    text
}

fn push_run_text(run: Node, text: &mut String) {
    for item in run.children().filter(Node::is_element) {
        if item.tag_name().namespace() != Some(WORD_NS) {
            continue;
        }
        match item.tag_name().name() {
            "t" => text.push_str(item.text().unwrap_or_default()),
            "tab" | "ptab" => text.push('\t'),
            "cr" => text.push('\n'),
            "br" => match item.attribute((WORD_NS, "type")) {
                None | Some("textWrapping") => text.push('\n'),
                Some(_) => {}
            },
            "noBreakHyphen" => text.push('-'),
            _ => {}
        }
    }
}
