//! The file line cache interface.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Supplies a file's contents split into lines, 1-based.
///
/// Implemented by the caller's file reader; the engine uses it solely to
/// resolve raw character offsets into tab-expanded columns.
pub trait LineCache {
    /// Returns line `line_no` (1-based) of `file`, without the trailing
    /// newline, or `None` when the file or line is unknown.
    fn line(&self, file: &Path, line_no: usize) -> Option<&str>;
}

/// In-memory [`LineCache`] for embedders and tests.
#[derive(Debug, Default)]
pub struct MemoryLines {
    files: HashMap<PathBuf, Vec<String>>,
}

impl MemoryLines {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `content` for `file`, split into lines.
    pub fn insert(&mut self, file: impl Into<PathBuf>, content: &str) {
        self.files
            .insert(file.into(), content.lines().map(String::from).collect());
    }

    /// Stores a file, returning the cache for chained construction.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>, content: &str) -> Self {
        self.insert(file, content);
        self
    }
}

impl LineCache for MemoryLines {
    fn line(&self, file: &Path, line_no: usize) -> Option<&str> {
        self.files
            .get(file)?
            .get(line_no.checked_sub(1)?)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_one_based() {
        let cache = MemoryLines::new().with_file("a.cpp", "first\nsecond\nthird");
        assert_eq!(cache.line(Path::new("a.cpp"), 1), Some("first"));
        assert_eq!(cache.line(Path::new("a.cpp"), 3), Some("third"));
        assert_eq!(cache.line(Path::new("a.cpp"), 0), None);
        assert_eq!(cache.line(Path::new("a.cpp"), 4), None);
    }

    #[test]
    fn unknown_file_is_none() {
        let cache = MemoryLines::new();
        assert_eq!(cache.line(Path::new("missing.cpp"), 1), None);
    }
}
