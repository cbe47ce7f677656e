//! # notice-check
//!
//! Copyright notice header checker for the Lydia source tree.
//!
//! Every governed file must begin with the project's license notice, wrapped in
//! the comment style of its language:
//!
//! - `*.cpp`: the block-comment notice at offset 0.
//! - `*.hpp`: `#pragma once`, then the block-comment notice.
//! - `*.py`: optionally the interpreter and encoding lines, then the
//!   line-comment notice.
//! - `CMakeLists.txt`: the line-comment notice at offset 0.
//!
//! Any other file is not governed and always passes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notice_check::{CheckConfig, check};
//!
//! let config = CheckConfig::with_root("/path/to/lydia");
//! let report = check(&config, |path| println!("Processing {}", path.display())).unwrap();
//! for path in report.violation_paths() {
//!     println!("{}", path.display());
//! }
//! println!("OK: {}", report.ok);
//! ```

mod category;
mod config;
mod discovery;
mod error;
pub mod notice;
pub mod output;
mod pattern;
mod report;
mod validator;

use std::collections::BTreeSet;
use std::path::Path;

use tracing::info;

pub use category::{
    BUILD_CONFIG_NAME, COMPILED_SOURCE_SUFFIX, Category, HEADER_SUFFIX, SCRIPT_SUFFIX,
};
pub use config::CheckConfig;
pub use discovery::{ExcludeSet, collect_candidates};
pub use error::CheckError;
pub use pattern::{
    HeaderPattern, INCLUDE_ONCE_LINE, SCRIPT_ENCODING_LINE, SCRIPT_INTERPRETER_LINE,
};
pub use report::{CheckReport, Violation};
pub use validator::{check_candidate, read_candidate, validate, validate_content};

/// Check every candidate file under `config.root`.
///
/// `on_file` is called with the root-relative path of each candidate just
/// before it is checked. Candidates are processed one at a time, in path order.
///
/// # Errors
///
/// Returns an error, and no report, if the candidate set cannot be computed
/// or any candidate cannot be read. Header mismatches are not errors; they are
/// collected in [`CheckReport::violations`].
pub fn check(
    config: &CheckConfig,
    mut on_file: impl FnMut(&Path),
) -> Result<CheckReport, CheckError> {
    let candidates = collect_candidates(config)?;
    info!(
        root = %config.root.display(),
        candidates = candidates.len(),
        "checking copyright notices"
    );

    let mut violations = BTreeSet::new();
    let mut processed_files: usize = 0;

    for rel_path in candidates {
        on_file(&rel_path);

        let category = Category::for_path(&rel_path);
        let bytes = read_candidate(&config.root.join(&rel_path))?;
        processed_files += 1;

        if !check_candidate(&rel_path, category, &bytes)? {
            violations.insert(Violation {
                path: rel_path,
                category,
            });
        }
    }

    info!(
        processed = processed_files,
        violations = violations.len(),
        "check finished"
    );
    Ok(CheckReport::new(
        config.root.clone(),
        processed_files,
        violations,
    ))
}
