//! Error types for a notice check run.
//!
//! A file whose header is wrong is not an error: it is a [`Violation`] in the
//! report. `CheckError` covers the conditions that make the candidate set
//! itself unusable, and every one of them aborts the run.
//!
//! [`Violation`]: crate::Violation

use std::path::PathBuf;

use thiserror::Error;

/// A fatal failure that stops a run before a report can be produced.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The configured root is missing or not a directory.
    #[error("Root directory does not exist: {}", path.display())]
    RootNotFound {
        /// The configured root.
        path: PathBuf,
    },

    /// An exclude entry is not a valid glob pattern.
    #[error("Invalid exclude glob pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// The offending pattern text.
        pattern: String,
        /// Parser diagnostic.
        #[source]
        source: glob::PatternError,
    },

    /// Traversal of a watched directory failed (permission denied, loop, ...).
    #[error("Directory traversal error under {}: {source}", path.display())]
    Walk {
        /// The entry the walker was on, or the watched directory itself.
        path: PathBuf,
        /// Walker diagnostic.
        #[source]
        source: walkdir::Error,
    },

    /// A candidate file could not be opened or read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// The candidate file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A candidate file is not valid UTF-8.
    #[error("File is not valid UTF-8: {}", path.display())]
    InvalidEncoding {
        /// The candidate file.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_file() {
        let err = CheckError::Io {
            path: PathBuf::from("lib/src/nnf.cpp"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("lib/src/nnf.cpp"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
    }

    #[test]
    fn test_invalid_pattern_message() {
        let source = glob::Pattern::new("[").unwrap_err();
        let err = CheckError::InvalidExcludePattern {
            pattern: "[".to_owned(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid exclude glob pattern '['"));
    }

    #[test]
    fn test_root_not_found_message() {
        let err = CheckError::RootNotFound {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(err.to_string(), "Root directory does not exist: /nope");
    }
}
