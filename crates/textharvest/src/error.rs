//! Error types for textharvest.
//!
//! All fallible operations return [`HarvestError`]. The variants follow the
//! run-level taxonomy:
//!
//! - `Config` - missing or invalid root, unreadable config files, bad globs (fatal)
//! - `Traversal` - the root does not exist or is not a directory (fatal)
//! - `Extraction` - a single file could not be read, decoded or parsed (per-file)
//! - `Io` - raw I/O errors, which bubble up unchanged
//! - `Cancelled` - the run was stopped through its cancel flag
//!
//! Only `Config`, `Traversal` and output-side `Io` errors abort a run. Everything
//! raised while extracting a single file is turned into an error record by the
//! aggregator and the run continues with the next file.
//!
//! # Example
//!
//! ```rust
//! use textharvest::{HarvestError, Result};
//!
//! fn require_root(root: &str) -> Result<&str> {
//!     if root.trim().is_empty() {
//!         return Err(HarvestError::config("Please select an input folder."));
//!     }
//!     Ok(root)
//! }
//!
//! assert!(require_root("").is_err());
//! ```
use thiserror::Error;

/// Result type alias using `HarvestError`.
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Main error type for all textharvest operations.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Traversal error: {message}")]
    Traversal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Extraction error: {message}")]
    Extraction {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Run cancelled")]
    Cancelled,
}

impl From<calamine::Error> for HarvestError {
    fn from(err: calamine::Error) -> Self {
        match err {
            calamine::Error::Io(io_err) => HarvestError::Io(io_err),
            other => HarvestError::Extraction {
                message: format!("Failed to parse spreadsheet: {}", other),
                source: Some(Box::new(other)),
            },
        }
    }
}

// lopdf errors are flattened to text; only their I/O variant keeps its type.
impl From<lopdf::Error> for HarvestError {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(io_err) => HarvestError::Io(io_err),
            other => HarvestError::extraction(format!("Invalid PDF: {}", other)),
        }
    }
}

impl From<zip::result::ZipError> for HarvestError {
    fn from(err: zip::result::ZipError) -> Self {
        HarvestError::Extraction {
            message: format!("Failed to open document archive: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<roxmltree::Error> for HarvestError {
    fn from(err: roxmltree::Error) -> Self {
        HarvestError::Extraction {
            message: format!("Malformed document XML: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<csv::Error> for HarvestError {
    fn from(err: csv::Error) -> Self {
        HarvestError::Extraction {
            message: format!("Failed to parse delimited file: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<globset::Error> for HarvestError {
    fn from(err: globset::Error) -> Self {
        HarvestError::Config {
            message: format!("Invalid glob pattern: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl HarvestError {
    error_constructor!(config, Config);
    error_constructor!(traversal, Traversal);
    error_constructor!(extraction, Extraction);

    /// Whether this error aborts a whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HarvestError::Config { .. } | HarvestError::Traversal { .. })
    }
}
