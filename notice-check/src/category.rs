//! File categories and how a file name maps onto one.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Suffix of compiled C++ translation units.
pub const COMPILED_SOURCE_SUFFIX: &str = ".cpp";

/// Suffix of C++ headers.
pub const HEADER_SUFFIX: &str = ".hpp";

/// Suffix of Python scripts.
pub const SCRIPT_SUFFIX: &str = ".py";

/// Exact name of CMake build files.
pub const BUILD_CONFIG_NAME: &str = "CMakeLists.txt";

/// Classification of a file that selects the header it must start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// `*.cpp`: block notice at offset 0.
    CompiledSource,
    /// `*.hpp`: `#pragma once`, then the block notice.
    Header,
    /// `*.py`: optional interpreter/encoding preamble, then the line notice.
    Script,
    /// `CMakeLists.txt`: line notice at offset 0.
    BuildConfig,
    /// Anything else. No header requirement.
    Other,
}

impl Category {
    /// Resolve the category of `path` from its file name.
    ///
    /// First match wins: `.cpp`, `.hpp`, `.py`, then the exact build file name.
    /// Everything else, including paths without a UTF-8 file name, is `Other`.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Self::Other;
        };

        if name.ends_with(COMPILED_SOURCE_SUFFIX) {
            Self::CompiledSource
        } else if name.ends_with(HEADER_SUFFIX) {
            Self::Header
        } else if name.ends_with(SCRIPT_SUFFIX) {
            Self::Script
        } else if name == BUILD_CONFIG_NAME {
            Self::BuildConfig
        } else {
            Self::Other
        }
    }

    /// Whether files of this category must carry a notice at all.
    #[must_use]
    pub const fn is_governed(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompiledSource => "compiled-source",
            Self::Header => "header",
            Self::Script => "script",
            Self::BuildConfig => "build-config",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(path: &str) -> Category {
        Category::for_path(Path::new(path))
    }

    #[test]
    fn test_suffix_categories() {
        assert_eq!(category("lib/src/nnf.cpp"), Category::CompiledSource);
        assert_eq!(category("lib/include/nnf.hpp"), Category::Header);
        assert_eq!(category("scripts/check.py"), Category::Script);
    }

    #[test]
    fn test_build_config_requires_exact_name() {
        assert_eq!(category("CMakeLists.txt"), Category::BuildConfig);
        assert_eq!(category("third_party/CMakeLists.txt"), Category::BuildConfig);
        assert_eq!(category("lib/OtherLists.txt"), Category::Other);
        assert_eq!(category("lib/cmakelists.txt"), Category::Other);
    }

    #[test]
    fn test_unknown_suffixes_are_other() {
        assert_eq!(category("README.md"), Category::Other);
        assert_eq!(category("lib/parser/parser_stype.h"), Category::Other);
        assert_eq!(category("lib/parser/lexer.l"), Category::Other);
        assert_eq!(category("Makefile"), Category::Other);
        assert_eq!(category(""), Category::Other);
    }

    #[test]
    fn test_suffix_applies_to_name_not_directory() {
        assert_eq!(category("lib.cpp/readme"), Category::Other);
        assert_eq!(category("scripts.py/CMakeLists.txt"), Category::BuildConfig);
    }

    #[test]
    fn test_bare_suffix_name_still_matches() {
        // `ends_with` on the name, so a dotfile-like name qualifies too.
        assert_eq!(category(".cpp"), Category::CompiledSource);
    }

    #[test]
    fn test_governed() {
        assert!(Category::Script.is_governed());
        assert!(!Category::Other.is_governed());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::CompiledSource.to_string(), "compiled-source");
        assert_eq!(Category::BuildConfig.to_string(), "build-config");
        assert_eq!(
            serde_json::to_string(&Category::BuildConfig).unwrap(),
            "\"build-config\""
        );
    }
}
