//! Delimited-table (CSV) extraction.
//!
//! Rows are parsed with the `csv` crate and each row's fields are rejoined
//! with `,`. Quoting is not reapplied, so a quoted field containing a comma
//! comes back unquoted. A blank line is a row with no fields and comes out as
//! an empty line.

use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Extract a CSV file as one line per row.
pub fn read_delimited_file(path: impl AsRef<Path>) -> Result<String> {
    let file = File::open(path.as_ref())?;
    read_delimited(file)
}

/// Extract CSV from any reader as one line per row.
///
/// There is no header row and rows may have different lengths. Non-UTF-8
/// content is an extraction error.
pub fn read_delimited<R: Read>(mut reader: R) -> Result<String> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut lines = Vec::new();
    let mut record = StringRecord::new();
    let mut after_cr = false;

    loop {
        let start = csv_reader.position().byte() as usize;
        let more = csv_reader.read_record(&mut record)?;
        let end = csv_reader.position().byte() as usize;

        // The reader drops blank lines before a record (or before EOF); the
        // consumed bytes tell how many there were.
        let blanks = count_blank_lines(&data[start..end], after_cr);
        lines.extend(std::iter::repeat_n(String::new(), blanks));

        if !more {
            break;
        }
        lines.push(record.iter().collect::<Vec<_>>().join(","));
        after_cr = end > 0 && data[end - 1] == b'\r';
    }

    Ok(lines.join("\n"))
}

/// Line breaks in the terminator run at the start of `consumed`. `\r\n`, `\r`
/// and `\n` each count once; a leading `\n` that completes the previous
/// record's `\r\n` does not count.
fn count_blank_lines(consumed: &[u8], after_cr: bool) -> usize {
    let mut bytes = consumed.iter().copied().take_while(|b| matches!(b, b'\r' | b'\n')).peekable();
    if after_cr && bytes.peek() == Some(&b'\n') {
        bytes.next();
    }

    let mut count = 0;
    while let Some(byte) = bytes.next() {
        if byte == b'\r' && bytes.peek() == Some(&b'\n') {
            bytes.next();
        }
        count += 1;
    }
    count
}
