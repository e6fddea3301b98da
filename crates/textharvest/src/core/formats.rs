//! Extension-based format classification.
//!
//! Every path maps to exactly one [`FormatKind`]. The extension is compared
//! lowercased; anything unrecognised falls through to `Fallback`, which is
//! resolved later by the binary check.

use std::path::Path;

/// Closed set of extraction strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// `.csv`
    DelimitedTable,
    /// `.xlsx`, `.xls`
    Spreadsheet,
    /// `.docx`
    WordDocument,
    /// `.pdf`
    Pdf,
    /// Any other extension, or none at all
    Fallback,
}

impl FormatKind {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => FormatKind::DelimitedTable,
            "xlsx" | "xls" => FormatKind::Spreadsheet,
            "docx" => FormatKind::WordDocument,
            "pdf" => FormatKind::Pdf,
            _ => FormatKind::Fallback,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FormatKind::Fallback)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::DelimitedTable => "delimited-table",
            FormatKind::Spreadsheet => "spreadsheet",
            FormatKind::WordDocument => "word-document",
            FormatKind::Pdf => "pdf",
            FormatKind::Fallback => "fallback",
        }
    }
}
