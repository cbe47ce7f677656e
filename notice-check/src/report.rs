//! Run report types.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::category::Category;

/// A candidate file whose content does not start with its category's header.
///
/// Ordered by path, so a set of violations iterates in report order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Violation {
    /// Path relative to the run root.
    pub path: PathBuf,
    /// Category whose header was expected.
    pub category: Category,
}

/// Result of a completed run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// Root the run was performed against.
    pub root: PathBuf,
    /// Number of candidates that were read and checked.
    pub processed_files: usize,
    /// Whether no violations were found.
    pub ok: bool,
    /// Files that failed their header check, sorted by path.
    pub violations: BTreeSet<Violation>,
}

impl CheckReport {
    pub(crate) fn new(
        root: PathBuf,
        processed_files: usize,
        violations: BTreeSet<Violation>,
    ) -> Self {
        Self {
            root,
            processed_files,
            ok: violations.is_empty(),
            violations,
        }
    }

    /// Number of violations found.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Violating paths in report order.
    pub fn violation_paths(&self) -> impl Iterator<Item = &Path> {
        self.violations.iter().map(|v| v.path.as_path())
    }
}
