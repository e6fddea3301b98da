//! File I/O utilities: reading and binary classification.

use crate::{HarvestError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected by [`is_binary`].
pub const BINARY_PROBE_LEN: u64 = 1024;

/// Read a file synchronously.
///
/// # Errors
///
/// Returns `HarvestError::Io` for I/O errors (these always bubble up).
pub fn read_file_sync(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    std::fs::read(path.as_ref()).map_err(HarvestError::Io)
}

/// Read a file as UTF-8 text, byte for byte.
///
/// # Errors
///
/// Returns `HarvestError::Extraction` when the content is not valid UTF-8.
/// Invalid sequences are never replaced.
pub fn read_utf8_sync(path: impl AsRef<Path>) -> Result<String> {
    let bytes = read_file_sync(path.as_ref())?;
    String::from_utf8(bytes).map_err(|e| {
        HarvestError::extraction_with_source(
            format!("File is not valid UTF-8: {}", path.as_ref().display()),
            e.utf8_error(),
        )
    })
}

/// Best-effort check for binary content.
///
/// Reads at most [`BINARY_PROBE_LEN`] bytes and reports `true` if a NUL byte
/// is among them. A file that cannot be opened or read is treated as binary.
/// This is a heuristic, not a MIME detector.
pub fn is_binary(path: impl AsRef<Path>) -> bool {
    match read_prefix(path.as_ref(), BINARY_PROBE_LEN) {
        Ok(prefix) => memchr::memchr(0, &prefix).is_some(),
        Err(e) => {
            tracing::debug!("Treating unreadable file as binary: {}: {}", path.as_ref().display(), e);
            true
        }
    }
}

fn read_prefix(path: &Path, limit: u64) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut prefix = Vec::with_capacity(limit as usize);
    file.take(limit).read_to_end(&mut prefix)?;
    Ok(prefix)
}
