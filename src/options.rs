//! Configuration surface for [`crate::diff`].
//!
//! `Options` is the library's only configuration layer: no config file, no
//! environment variables beyond what the CLI already wires through `clap`'s
//! `env` feature onto the equivalent flags.

use std::collections::HashSet;

/// Behavior flags recognized by the object differ.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffBehaviors {
    /// Do not emit a deletion encoding for a key present only in `left`.
    pub ignore_missing_properties: bool,
    /// Do not emit an addition encoding for a key present only in `right`.
    pub ignore_new_properties: bool,
}

/// How the array differ handles unequal arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayDiffMode {
    /// Run the LCS-based array engine. Default.
    Efficient,
    /// Treat unequal arrays as a whole-value replace (`[left, right]`).
    Simple,
}

impl Default for ArrayDiffMode {
    fn default() -> Self {
        ArrayDiffMode::Efficient
    }
}

/// Top-level options passed to [`crate::diff`].
#[derive(Debug, Default, Clone)]
pub struct Options {
    exclude_paths: HashSet<String>,
    pub diff_behaviors: DiffBehaviors,
    pub array_diff_mode: ArrayDiffMode,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set of excluded paths (case-insensitive, dotted
    /// segments, e.g. `"nested.id"`).
    pub fn with_exclude_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_paths = paths.into_iter().map(|p| p.into().to_lowercase()).collect();
        self
    }

    pub fn with_diff_behaviors(mut self, behaviors: DiffBehaviors) -> Self {
        self.diff_behaviors = behaviors;
        self
    }

    pub fn with_array_diff_mode(mut self, mode: ArrayDiffMode) -> Self {
        self.array_diff_mode = mode;
        self
    }

    /// True if `path` (dotted, case-insensitive) is in the exclusion set.
    pub fn is_excluded(&self, path: &crate::path::Path) -> bool {
        self.exclude_paths.contains(&path.to_string().to_lowercase())
    }
}
