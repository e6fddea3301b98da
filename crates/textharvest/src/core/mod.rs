//! Core orchestration: configuration, format dispatch, I/O and the run loop.

pub mod config;
pub mod extractor;
pub mod formats;
pub mod harvest;
pub mod io;

pub use config::HarvestConfig;
pub use extractor::{extract_file, extract_record};
pub use formats::FormatKind;
pub use harvest::{Harvester, run};
pub use io::is_binary;
