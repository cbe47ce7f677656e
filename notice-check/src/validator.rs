//! Per-file validity.
//!
//! Validity is a pure function of a file's category and content. Reading is
//! kept separate so that the matching rules can be exercised without a disk.

use std::path::Path;

use tracing::debug;

use crate::category::Category;
use crate::error::CheckError;
use crate::pattern::HeaderPattern;

/// Whether `content` satisfies the header rule for `category`.
///
/// `Other` carries no requirement and is always valid.
#[must_use]
pub fn validate_content(category: Category, content: &str) -> bool {
    HeaderPattern::for_category(category).is_none_or(|pattern| pattern.matches(content))
}

/// Whether `content` satisfies the header rule for the category of `path`.
#[must_use]
pub fn validate(path: &Path, content: &str) -> bool {
    validate_content(Category::for_path(path), content)
}

/// Read a candidate file in full.
///
/// Every candidate is read, governed or not, so an unreadable file always
/// aborts the run.
///
/// # Errors
///
/// Returns `CheckError::Io` if the file cannot be opened or read.
pub fn read_candidate(path: &Path) -> Result<Vec<u8>, CheckError> {
    std::fs::read(path).map_err(|source| CheckError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Check the raw bytes of a candidate against the rule for `category`.
///
/// Content of ungoverned files is never decoded.
///
/// # Errors
///
/// Returns `CheckError::InvalidEncoding` if a governed file is not UTF-8.
pub fn check_candidate(
    path: &Path,
    category: Category,
    bytes: &[u8],
) -> Result<bool, CheckError> {
    if !category.is_governed() {
        return Ok(true);
    }
    let content = std::str::from_utf8(bytes).map_err(|_| CheckError::InvalidEncoding {
        path: path.to_owned(),
    })?;
    let valid = validate_content(category, content);
    debug!(path = %path.display(), %category, valid, "header checked");
    Ok(valid)
}
