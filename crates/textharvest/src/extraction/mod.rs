//! Format-specific extraction functions.
//!
//! Each function takes a path and returns the file's text. The choice of
//! function is made by [`crate::core::extractor::extract_file`].

pub mod delimited;
pub mod docx;
pub mod excel;
pub mod pdf;
pub mod text;

pub use delimited::{read_delimited, read_delimited_file};
pub use docx::{extract_paragraphs, read_docx_file};
pub use excel::read_spreadsheet_file;
pub use pdf::{read_pdf_bytes, read_pdf_file};
pub use text::read_text_or_placeholder;
