use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Content written for files classified as binary.
pub const BINARY_PLACEHOLDER: &str = "[Binary file, content not included]";

/// Content written for files whose extraction failed.
pub const ERROR_PLACEHOLDER: &str = "[Error reading file]";

/// Outcome of extracting a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Text(String),
    Error(String),
}

/// One discovered file and what came out of it.
///
/// Created once per path and consumed once when its record block is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub outcome: ExtractionOutcome,
}

impl FileRecord {
    pub fn text(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            outcome: ExtractionOutcome::Text(content),
        }
    }

    pub fn error(path: impl Into<PathBuf>, message: String) -> Self {
        Self {
            path: path.into(),
            outcome: ExtractionOutcome::Error(message),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, ExtractionOutcome::Error(_))
    }

    /// Write this record's block to the output artifact.
    ///
    /// Successful records use `CONTENT:` on its own line followed by the text;
    /// failed records put the error placeholder on the label line. Every block
    /// ends with a blank line.
    pub fn write_block<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        match &self.outcome {
            ExtractionOutcome::Text(content) => {
                write!(writer, "PATH: {}\nCONTENT:\n{}\n\n", self.path.display(), content)
            }
            ExtractionOutcome::Error(_) => {
                write!(
                    writer,
                    "PATH: {}\nCONTENT: {}\n\n",
                    self.path.display(),
                    ERROR_PLACEHOLDER
                )
            }
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Every discovered file was processed.
    Completed,
    /// No files survived filtering; no artifact was written.
    EmptyResult,
    /// The cancel flag was raised between two files.
    Cancelled,
}

/// Counts returned to the caller at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub processed_count: usize,
    pub error_count: usize,
    pub output_path: PathBuf,
    pub status: RunStatus,
}

impl RunSummary {
    pub fn attempted(&self) -> usize {
        self.processed_count + self.error_count
    }

    pub fn is_empty_result(&self) -> bool {
        self.status == RunStatus::EmptyResult
    }
}
