//! textharvest - flatten a directory tree into one text file.
//!
//! textharvest walks a directory, skips excluded directories and file names,
//! pulls readable text out of every remaining file and writes it all into a
//! single artifact, one `PATH:`/`CONTENT:` block per file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use textharvest::{HarvestConfig, Harvester};
//!
//! # fn main() -> textharvest::Result<()> {
//! let summary = Harvester::new(HarvestConfig::default()).run("./my-project")?;
//! println!("Output written to: {}", summary.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Discovery** (`discovery`): exclusion rules and the sorted tree walk
//! - **Extraction** (`extraction`): CSV, spreadsheet, DOCX, PDF and plain-text readers
//! - **Core** (`core`): format dispatch, binary check, config loading and the run loop
//! - **Sinks** (`sink`): where run events (start, per-file failures, completion) go
//!
//! Everything runs sequentially on the calling thread.

#![deny(unsafe_code)]

pub mod core;
pub mod discovery;
pub mod error;
pub mod extraction;
pub mod sink;
pub mod types;

pub use error::{HarvestError, Result};
pub use types::*;

pub use core::config::{DEFAULT_DIR_EXCLUDES, DEFAULT_FILE_EXCLUDES, HarvestConfig, parse_pattern_list};
pub use core::extractor::{extract_file, extract_record};
pub use core::formats::FormatKind;
pub use core::harvest::{Harvester, output_file_name, run};
pub use core::io::is_binary;
pub use discovery::{FilterSet, should_exclude_dir, should_exclude_file, walk};
pub use sink::{LogSink, MemorySink, NullSink, RunEvent, TracingSink};
