//! File discovery: exclusion rules and the tree walker.

pub mod filter;
pub mod walker;

pub use filter::{FilterSet, should_exclude_dir, should_exclude_file};
pub use walker::walk;
