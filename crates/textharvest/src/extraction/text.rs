//! Fallback extraction for files no format reader claims.

use std::path::Path;

use crate::core::io::{is_binary, read_utf8_sync};
use crate::error::Result;
use crate::types::BINARY_PLACEHOLDER;

/// Return the file's UTF-8 content verbatim, or the binary placeholder when
/// the binary check fires.
///
/// # Errors
///
/// Returns `HarvestError::Extraction` for text that is not valid UTF-8 and
/// `HarvestError::Io` when the file cannot be read.
pub fn read_text_or_placeholder(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if is_binary(path) {
        return Ok(BINARY_PLACEHOLDER.to_string());
    }
    read_utf8_sync(path)
}
