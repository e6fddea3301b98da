//! Exclusion rules for directories and files.
//!
//! Directory rules are exact, case-sensitive names compared against a single
//! path segment. File rules are shell-style globs (`*`, `?`, `[...]`) compared
//! against the base name only, compiled once into a [`GlobSet`].

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;

use crate::Result;

/// Compiled exclusion rules for one traversal.
#[derive(Debug, Clone)]
pub struct FilterSet {
    file_globs: GlobSet,
    file_patterns: Vec<String>,
    dir_excludes: HashSet<String>,
}

impl FilterSet {
    /// Compile file globs and directory names.
    ///
    /// Entries are trimmed and blank ones are discarded before compiling.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Config` if a glob pattern is invalid.
    pub fn new<F, D>(file_globs: &[F], dir_excludes: &[D]) -> Result<Self>
    where
        F: AsRef<str>,
        D: AsRef<str>,
    {
        let file_patterns = clean_patterns(file_globs);
        let mut builder = GlobSetBuilder::new();

        for pattern in &file_patterns {
            let glob = GlobBuilder::new(pattern)
                .case_insensitive(cfg!(windows))
                .backslash_escape(false)
                .literal_separator(false)
                .build()?;
            builder.add(glob);
        }

        Ok(Self {
            file_globs: builder.build()?,
            file_patterns,
            dir_excludes: clean_patterns(dir_excludes).into_iter().collect(),
        })
    }

    /// A filter that excludes nothing.
    pub fn empty() -> Self {
        Self {
            file_globs: GlobSet::empty(),
            file_patterns: Vec::new(),
            dir_excludes: HashSet::new(),
        }
    }

    pub fn is_dir_excluded(&self, name: &str) -> bool {
        self.dir_excludes.contains(name)
    }

    pub fn is_file_excluded(&self, basename: &str) -> bool {
        self.file_globs.is_match(basename)
    }

    pub fn file_patterns(&self) -> &[String] {
        &self.file_patterns
    }

    pub fn dir_excludes(&self) -> impl Iterator<Item = &str> {
        self.dir_excludes.iter().map(String::as_str)
    }
}

/// True iff `name` is one of the excluded directory names.
pub fn should_exclude_dir(name: &str, filter: &FilterSet) -> bool {
    filter.is_dir_excluded(name)
}

/// True iff `basename` matches any excluded file glob.
pub fn should_exclude_file(basename: &str, filter: &FilterSet) -> bool {
    filter.is_file_excluded(basename)
}

fn clean_patterns<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
