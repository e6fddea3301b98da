//! Run orchestration: walk, extract, write.
//!
//! A run walks the root, extracts every discovered file in order and streams
//! one record block per file into `<output_dir>/<root name>_files.txt`. The
//! artifact is flushed after each block, so an interrupted run leaves a
//! valid prefix of complete records.
//!
//! Only configuration and root-level failures abort a run. A file that fails
//! to extract is written as an error record, reported to the sink and
//! counted; the next file is processed as usual.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::config::HarvestConfig;
use crate::core::extractor::extract_file;
use crate::discovery::walk;
use crate::sink::{LogSink, RunEvent, TracingSink};
use crate::types::{FileRecord, RunStatus, RunSummary};
use crate::{HarvestError, Result};

/// Suffix appended to the root's name to form the artifact's file name.
pub const OUTPUT_SUFFIX: &str = "_files.txt";

/// Drives one or more runs with a fixed configuration and sink.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use textharvest::{HarvestConfig, Harvester, MemorySink};
///
/// # fn main() -> textharvest::Result<()> {
/// let sink = Arc::new(MemorySink::new());
/// let harvester = Harvester::new(HarvestConfig::default()).with_sink(sink.clone());
/// let summary = harvester.run("./my-project")?;
/// println!("{} files, {} errors", summary.processed_count, summary.error_count);
/// # Ok(())
/// # }
/// ```
pub struct Harvester {
    config: HarvestConfig,
    sink: Arc<dyn LogSink>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Harvester {
    pub fn new(config: HarvestConfig) -> Self {
        Self {
            config,
            sink: Arc::new(TracingSink),
            cancel: None,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Stop the run before the next file once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Harvest `root` into its text artifact.
    ///
    /// # Errors
    ///
    /// - `HarvestError::Config` if `root` is empty or a glob is invalid
    /// - `HarvestError::Traversal` if `root` is missing or not a directory
    /// - `HarvestError::Io` if the artifact cannot be created or written
    ///
    /// An empty `root` is reported to the sink as [`RunEvent::MissingRoot`];
    /// every other failure as [`RunEvent::Aborted`].
    /// Finding no files is not an error: the summary's status is
    /// [`RunStatus::EmptyResult`] and no artifact is written.
    pub fn run(&self, root: impl AsRef<Path>) -> Result<RunSummary> {
        let root = root.as_ref();
        if root.as_os_str().is_empty() {
            self.sink.record(&RunEvent::MissingRoot);
            return Err(HarvestError::config(RunEvent::MissingRoot.to_string()));
        }

        self.execute(root).inspect_err(|e| {
            self.sink.record(&RunEvent::Aborted { cause: e.to_string() });
        })
    }

    fn execute(&self, root: &Path) -> Result<RunSummary> {
        let filter = self.config.filter_set()?;
        let output_dir = self
            .config
            .output_dir
            .clone()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| root.to_path_buf());
        let output_path = output_dir.join(output_file_name(root));

        self.sink.record(&RunEvent::Started {
            root: root.to_path_buf(),
            output_dir: output_dir.clone(),
        });

        let mut paths = walk(root, &filter)?;
        drop_output_artifact(&mut paths, &output_path);

        if paths.is_empty() {
            self.sink.record(&RunEvent::EmptyResult);
            return Ok(RunSummary {
                processed_count: 0,
                error_count: 0,
                output_path,
                status: RunStatus::EmptyResult,
            });
        }

        tracing::info!("Harvesting {} file(s) into {}", paths.len(), output_path.display());

        let file = File::create(&output_path)?;
        let mut writer = BufWriter::new(file);
        let mut processed_count = 0;
        let mut error_count = 0;

        for path in &paths {
            if self.is_cancelled() {
                self.sink.record(&RunEvent::Cancelled {
                    processed: processed_count + error_count,
                });
                return Ok(RunSummary {
                    processed_count,
                    error_count,
                    output_path,
                    status: RunStatus::Cancelled,
                });
            }

            let record = match extract_file(path) {
                Ok(content) => {
                    processed_count += 1;
                    FileRecord::text(path, content)
                }
                Err(e) => {
                    error_count += 1;
                    tracing::warn!("Failed to extract {}: {}", path.display(), e);
                    self.sink.record(&RunEvent::FileFailed {
                        path: path.clone(),
                        cause: e.to_string(),
                    });
                    FileRecord::error(path, e.to_string())
                }
            };

            record.write_block(&mut writer)?;
            writer.flush()?;
        }

        let summary = RunSummary {
            processed_count,
            error_count,
            output_path,
            status: RunStatus::Completed,
        };
        self.sink.record(&RunEvent::Completed(summary.clone()));
        Ok(summary)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Harvest `root` with explicit filters; the narrow form of [`Harvester::run`].
///
/// `output_dir` of `None` writes next to the files, inside `root`.
pub fn run(
    root: impl AsRef<Path>,
    output_dir: Option<&Path>,
    file_exclude_globs: &[String],
    dir_excludes: &[String],
    sink: Arc<dyn LogSink>,
) -> Result<RunSummary> {
    let config = HarvestConfig {
        file_exclude_globs: file_exclude_globs.to_vec(),
        dir_excludes: dir_excludes.to_vec(),
        output_dir: output_dir.map(Path::to_path_buf),
    };
    Harvester::new(config).with_sink(sink).run(root)
}

/// `<root name>_files.txt`, using the canonical name when `root` has no
/// final component (`.`, `..`).
pub fn output_file_name(root: &Path) -> String {
    let base = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|name| name.to_string_lossy().into_owned()))
        })
        .unwrap_or_default();

    format!("{}{}", base, OUTPUT_SUFFIX)
}

// A previous run's artifact inside the root must not be harvested again.
fn drop_output_artifact(paths: &mut Vec<PathBuf>, output_path: &Path) {
    let Some(output_name) = output_path.file_name() else {
        return;
    };
    let canonical_output = output_path.canonicalize().ok();

    paths.retain(|path| {
        if path.file_name() != Some(output_name) {
            return true;
        }
        if path == output_path {
            return false;
        }
        match (&canonical_output, path.canonicalize()) {
            (Some(output), Ok(candidate)) => &candidate != output,
            _ => true,
        }
    });
}
