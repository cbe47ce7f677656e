//! Run configuration.
//!
//! The defaults describe the Lydia source tree: three watched directories, the
//! two CMake files at the top, and the vendored clang-tidy runner left out.

use std::path::PathBuf;

/// Directories enumerated recursively by default.
pub const DEFAULT_INCLUDE_DIRS: &[&str] = &["app", "lib", "scripts"];

/// Individually named files checked by default.
pub const DEFAULT_INCLUDE_FILES: &[&str] = &["third_party/CMakeLists.txt", "CMakeLists.txt"];

/// Paths never checked by default.
pub const DEFAULT_EXCLUDE: &[&str] = &["scripts/run-clang-tidy.py"];

/// Everything that determines which files a run looks at.
///
/// All paths except `root` are relative to `root`.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Project root. Candidates are reported relative to it.
    pub root: PathBuf,
    /// Watched directories, enumerated recursively.
    pub include_dirs: Vec<PathBuf>,
    /// Individually named files. Missing ones are skipped.
    pub include_files: Vec<PathBuf>,
    /// Exclude patterns (glob format), matched against the root-relative path.
    /// A plain path is a pattern that matches only itself.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links while walking watched directories.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
}

impl CheckConfig {
    /// Default configuration rooted at `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_dirs: DEFAULT_INCLUDE_DIRS.iter().map(PathBuf::from).collect(),
            include_files: DEFAULT_INCLUDE_FILES.iter().map(PathBuf::from).collect(),
            exclude: DEFAULT_EXCLUDE.iter().map(|s| (*s).to_owned()).collect(),
            follow_links: false,
            max_depth: 64,
        }
    }
}
