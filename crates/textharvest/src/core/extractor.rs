//! Per-file extraction entry points.
//!
//! [`extract_file`] classifies a path with [`FormatKind`] and calls the
//! matching function from [`crate::extraction`]. Adding a format means adding
//! a `FormatKind` variant and one arm here.

use std::path::Path;

use crate::Result;
use crate::core::formats::FormatKind;
use crate::extraction;
use crate::types::FileRecord;

/// Extract the text of a single file.
///
/// # Errors
///
/// Any failure to read, decode or parse the file. These are per-file errors;
/// the aggregator turns them into error records.
///
/// # Example
///
/// ```rust,no_run
/// use textharvest::extract_file;
///
/// # fn main() -> textharvest::Result<()> {
/// let text = extract_file("data/table.csv")?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
pub fn extract_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let kind = FormatKind::from_path(path);
    tracing::debug!("Extracting {} as {}", path.display(), kind.name());

    match kind {
        FormatKind::DelimitedTable => extraction::read_delimited_file(path),
        FormatKind::Spreadsheet => extraction::read_spreadsheet_file(path),
        FormatKind::WordDocument => extraction::read_docx_file(path),
        FormatKind::Pdf => extraction::read_pdf_file(path),
        FormatKind::Fallback => extraction::read_text_or_placeholder(path),
    }
}

/// Extract a file and wrap the outcome in a [`FileRecord`].
///
/// Never fails: extraction errors become error records carrying the message.
pub fn extract_record(path: impl AsRef<Path>) -> FileRecord {
    let path = path.as_ref();
    match extract_file(path) {
        Ok(content) => FileRecord::text(path, content),
        Err(e) => FileRecord::error(path, e.to_string()),
    }
}
