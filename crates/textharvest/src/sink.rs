//! Run events and the sinks that receive them.
//!
//! The aggregator never prints. It hands each significant event to a
//! [`LogSink`] and the caller decides where the event goes: a terminal, a
//! GUI log pane, `tracing`, or a buffer in tests.

use parking_lot::Mutex;
use std::fmt;
use std::path::PathBuf;

use crate::types::RunSummary;

/// Something worth telling the caller about during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    MissingRoot,
    Started { root: PathBuf, output_dir: PathBuf },
    FileFailed { path: PathBuf, cause: String },
    EmptyResult,
    Cancelled { processed: usize },
    Completed(RunSummary),
    Aborted { cause: String },
}

impl RunEvent {
    /// The event rendered as individual log lines.
    pub fn lines(&self) -> Vec<String> {
        self.to_string().lines().map(str::to_string).collect()
    }
}

impl fmt::Display for RunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunEvent::MissingRoot => write!(f, "Please select an input folder."),
            RunEvent::Started { root, output_dir } => write!(
                f,
                "Processing files in: {}\nOutput folder: {}",
                root.display(),
                output_dir.display()
            ),
            RunEvent::FileFailed { path, cause } => write!(f, "Error processing {}: {}", path.display(), cause),
            RunEvent::EmptyResult => write!(f, "No files found to process."),
            RunEvent::Cancelled { processed } => write!(f, "Cancelled after {} files.", processed),
            RunEvent::Completed(summary) => write!(
                f,
                "Processed {} files.\nEncountered {} errors.\nOutput written to: {}",
                summary.processed_count,
                summary.error_count,
                summary.output_path.display()
            ),
            RunEvent::Aborted { cause } => write!(f, "An error occurred: {}", cause),
        }
    }
}

/// Receiver for run events.
pub trait LogSink: Send + Sync {
    fn record(&self, event: &RunEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, event: &RunEvent) {
        match event {
            RunEvent::MissingRoot | RunEvent::FileFailed { .. } | RunEvent::Cancelled { .. } => {
                tracing::warn!("{}", event)
            }
            RunEvent::Aborted { .. } => tracing::error!("{}", event),
            _ => tracing::info!("{}", event),
        }
    }
}

/// Keeps every rendered line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
    events: Mutex<Vec<RunEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn events(&self) -> Vec<RunEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
        self.events.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn record(&self, event: &RunEvent) {
        self.lines.lock().extend(event.lines());
        self.events.lock().push(event.clone());
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn record(&self, _event: &RunEvent) {}
}
