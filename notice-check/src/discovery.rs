//! Candidate discovery.
//!
//! Builds the set of files a run checks: every regular file under the watched
//! directories, plus the named files that exist, minus everything an exclude
//! pattern matches. Paths in the set are relative to the configured root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::CheckConfig;
use crate::error::CheckError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Compiled exclusion list.
///
/// An entry excludes the path it names literally, and every path its glob
/// matches. The literal check keeps paths containing `[`, `*` or `?`
/// excludable by their own name.
#[derive(Debug, Default)]
pub struct ExcludeSet {
    literals: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl ExcludeSet {
    /// Compile every entry of `exclude`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidExcludePattern` for the first entry that is
    /// not a valid glob.
    pub fn new(exclude: &[String]) -> Result<Self, CheckError> {
        let patterns = exclude
            .iter()
            .map(|pat_str| {
                Pattern::new(pat_str).map_err(|source| CheckError::InvalidExcludePattern {
                    pattern: pat_str.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let literals = exclude
            .iter()
            .map(|entry| normalize(Path::new(entry)))
            .collect();
        Ok(Self { literals, patterns })
    }

    /// Whether the root-relative `path` is excluded.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.literals.iter().any(|literal| literal == path)
            || self
                .patterns
                .iter()
                .any(|pattern| pattern.matches_path_with(path, MATCH_OPTIONS))
    }
}

/// Compute the candidate set for `config`.
///
/// Missing watched directories and missing named files contribute nothing.
///
/// # Errors
///
/// Returns an error if the root is not a directory, an exclude pattern is
/// invalid, or traversal of a watched directory fails.
pub fn collect_candidates(config: &CheckConfig) -> Result<BTreeSet<PathBuf>, CheckError> {
    if !config.root.is_dir() {
        return Err(CheckError::RootNotFound {
            path: config.root.clone(),
        });
    }

    let excludes = ExcludeSet::new(&config.exclude)?;
    let mut candidates = BTreeSet::new();

    for dir in &config.include_dirs {
        let abs_dir = config.root.join(dir);
        if !abs_dir.is_dir() {
            debug!(dir = %dir.display(), "watched directory not present, skipping");
            continue;
        }
        walk_dir(config, &abs_dir, &mut candidates)?;
    }

    for file in &config.include_files {
        if config.root.join(file).is_file() {
            candidates.insert(normalize(file));
        } else {
            debug!(file = %file.display(), "named file not present, skipping");
        }
    }

    // Subtract the exclusion list before anything is matched.
    candidates.retain(|path| {
        let excluded = excludes.is_excluded(path);
        if excluded {
            debug!(path = %path.display(), "excluded");
        }
        !excluded
    });

    Ok(candidates)
}

fn walk_dir(
    config: &CheckConfig,
    abs_dir: &Path,
    candidates: &mut BTreeSet<PathBuf>,
) -> Result<(), CheckError> {
    for entry_result in WalkDir::new(abs_dir)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
    {
        let entry = entry_result.map_err(|source| CheckError::Walk {
            path: source
                .path()
                .map_or_else(|| abs_dir.to_path_buf(), Path::to_path_buf),
            source,
        })?;

        let file_path = entry.path();
        if !file_path.is_file() {
            if is_special_file(&entry) {
                warn!(path = %file_path.display(), "skipping non-regular file");
            }
            continue;
        }

        let rel_path = file_path
            .strip_prefix(&config.root)
            .unwrap_or(file_path);
        candidates.insert(normalize(rel_path));
    }
    Ok(())
}

/// Devices, pipes, and sockets.
fn is_special_file(entry: &walkdir::DirEntry) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        let ft = entry.file_type();
        if ft.is_block_device() || ft.is_char_device() || ft.is_fifo() || ft.is_socket() {
            return true;
        }
    }
    #[cfg(not(unix))]
    let _ = entry;
    false
}

/// Drop `.` components so `./lib/a.cpp` and `lib/a.cpp` are one candidate.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    fn rel(paths: &BTreeSet<PathBuf>) -> Vec<String> {
        paths.iter().map(|p| p.display().to_string()).collect()
    }

    #[test]
    fn test_exclude_plain_path_matches_only_itself() {
        let set = ExcludeSet::new(&["scripts/run-clang-tidy.py".to_owned()]).unwrap();
        assert!(set.is_excluded(Path::new("scripts/run-clang-tidy.py")));
        assert!(!set.is_excluded(Path::new("scripts/other.py")));
        assert!(!set.is_excluded(Path::new("app/scripts/run-clang-tidy.py")));
    }

    #[test]
    fn test_exclude_glob() {
        let set = ExcludeSet::new(&["lib/parser/*.hpp".to_owned()]).unwrap();
        assert!(set.is_excluded(Path::new("lib/parser/scanner.hpp")));
        // `*` does not cross directory separators.
        assert!(!set.is_excluded(Path::new("lib/parser/gen/scanner.hpp")));
        let set = ExcludeSet::new(&["lib/**/*.hpp".to_owned()]).unwrap();
        assert!(set.is_excluded(Path::new("lib/parser/gen/scanner.hpp")));
    }

    #[test]
    fn test_exclude_literal_path_with_glob_metacharacters() {
        // As a glob, `[1]` is a character class and does not match itself.
        let set = ExcludeSet::new(&["lib/a[1].cpp".to_owned()]).unwrap();
        assert!(set.is_excluded(Path::new("lib/a[1].cpp")));
        assert!(set.is_excluded(Path::new("lib/a1.cpp")));
        assert!(!set.is_excluded(Path::new("lib/a[2].cpp")));

        let set = ExcludeSet::new(&["./scripts/what?.py".to_owned()]).unwrap();
        assert!(set.is_excluded(Path::new("scripts/what?.py")));
    }

    #[test]
    fn test_literal_excluded_file_is_not_a_candidate() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "lib/a[1].cpp");
        touch(tmp.path(), "lib/b.cpp");
        let mut config = CheckConfig::with_root(tmp.path());
        config.exclude = vec!["lib/a[1].cpp".to_owned()];
        let candidates = collect_candidates(&config).unwrap();
        assert_eq!(rel(&candidates), vec!["lib/b.cpp"]);
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let err = ExcludeSet::new(&["[".to_owned()]).unwrap_err();
        assert!(matches!(err, CheckError::InvalidExcludePattern { .. }));
    }

    #[test]
    fn test_collects_watched_dirs_and_named_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "app/lydia/src/main.cpp");
        touch(tmp.path(), "lib/src/nnf.cpp");
        touch(tmp.path(), "lib/include/nnf.hpp");
        touch(tmp.path(), "scripts/check.py");
        touch(tmp.path(), "scripts/run-clang-tidy.py");
        touch(tmp.path(), "CMakeLists.txt");
        touch(tmp.path(), "docs/CMakeLists.txt");

        let config = CheckConfig::with_root(tmp.path());
        let candidates = collect_candidates(&config).unwrap();
        assert_eq!(
            rel(&candidates),
            vec![
                "CMakeLists.txt",
                "app/lydia/src/main.cpp",
                "lib/include/nnf.hpp",
                "lib/src/nnf.cpp",
                "scripts/check.py",
            ]
        );
    }

    #[test]
    fn test_missing_dirs_and_files_yield_empty_set() {
        let tmp = TempDir::new().unwrap();
        let config = CheckConfig::with_root(tmp.path());
        assert!(collect_candidates(&config).unwrap().is_empty());
    }

    #[test]
    fn test_named_file_inside_watched_dir_is_counted_once() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "lib/CMakeLists.txt");
        let mut config = CheckConfig::with_root(tmp.path());
        config.include_files = vec![PathBuf::from("./lib/CMakeLists.txt")];
        let candidates = collect_candidates(&config).unwrap();
        assert_eq!(rel(&candidates), vec!["lib/CMakeLists.txt"]);
    }

    #[test]
    fn test_named_file_can_be_excluded() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "CMakeLists.txt");
        let mut config = CheckConfig::with_root(tmp.path());
        config.exclude = vec!["CMakeLists.txt".to_owned()];
        assert!(collect_candidates(&config).unwrap().is_empty());
    }

    #[test]
    fn test_max_depth_limits_walk() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "lib/top.cpp");
        touch(tmp.path(), "lib/a/b/deep.cpp");
        let mut config = CheckConfig::with_root(tmp.path());
        config.max_depth = 1;
        let candidates = collect_candidates(&config).unwrap();
        assert_eq!(rel(&candidates), vec!["lib/top.cpp"]);
    }

    #[test]
    fn test_missing_root() {
        let tmp = TempDir::new().unwrap();
        let config = CheckConfig::with_root(tmp.path().join("absent"));
        let err = collect_candidates(&config).unwrap_err();
        assert!(matches!(err, CheckError::RootNotFound { .. }));
    }
}
