//! Spreadsheet extraction using `calamine`.
//!
//! Workbooks are read values-only (cached results, no formulas or styles).
//! For each sheet, in workbook order, the output has a `Sheet: <name>` line
//! followed by one line per row. A row line joins its non-empty cell values
//! with `,`. Rows above the first used row are emitted as empty lines so
//! line positions follow the sheet's row numbers.
//!
//! # Example
//!
//! ```rust,no_run
//! use textharvest::extraction::excel::read_spreadsheet_file;
//!
//! # fn example() -> textharvest::Result<()> {
//! let text = read_spreadsheet_file("budget.xlsx")?;
//! assert!(text.starts_with("Sheet: "));
//! # Ok(())
//! # }
//! ```
use calamine::{Data, ExcelDateTime, Range, Reader, open_workbook_auto};
use std::path::Path;

use crate::error::{HarvestError, Result};

pub fn read_spreadsheet_file(path: impl AsRef<Path>) -> Result<String> {
    let mut workbook = open_workbook_auto(path.as_ref())?;
    let sheet_names = workbook.sheet_names();

    let mut lines = Vec::new();
    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| HarvestError::extraction_with_source(format!("Failed to read sheet '{}'", name), e))?;

        lines.push(format!("Sheet: {}", name));
        push_sheet_rows(&range, &mut lines);
    }

    Ok(lines.join("\n"))
}

fn push_sheet_rows(range: &Range<Data>, lines: &mut Vec<String>) {
    let Some((start_row, _)) = range.start() else {
        return;
    };

    lines.extend(std::iter::repeat_n(String::new(), start_row as usize));

    for row in range.rows() {
        let values: Vec<String> = row.iter().filter_map(format_cell).collect();
        lines.push(values.join(","));
    }
}

/// Render one cell, or `None` when it counts as empty.
fn format_cell(data: &Data) -> Option<String> {
    match data {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(format_float(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) => Some(format_datetime(dt)),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => Some(e.to_string()),
    }
}

// Serials below 1 carry no date part and render as a bare time of day.
// Duration-formatted cells (`[h]:mm:ss`) render like an elapsed time,
// e.g. `1 day, 2:30:00`.
fn format_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return match dt.as_duration() {
            Some(duration) => format_elapsed(duration.num_seconds()),
            None => dt.as_f64().to_string(),
        };
    }

    let time_only = (0.0..1.0).contains(&dt.as_f64());
    match dt.as_datetime() {
        Some(datetime) if time_only => datetime.format("%H:%M:%S").to_string(),
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.as_f64().to_string(),
    }
}

fn format_elapsed(total_seconds: i64) -> String {
    let days = total_seconds.div_euclid(86_400);
    let rest = total_seconds.rem_euclid(86_400);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{} day, {}", days, clock),
        _ => format!("{} days, {}", days, clock),
    }
}

// Integral values are written without a fractional part, matching how the
// workbook stores whole numbers.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
