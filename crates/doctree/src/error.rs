//! Error types for tree building and extraction.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a documentation tree
///
/// Malformed source text is never an error: unparsable declarations degrade
/// to empty names, parameters or docstrings. The only failures surfaced to
/// callers are collaborator I/O problems and invalid configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure from the injected reader or the directory walk
    #[error("failed to access {}: {source}", .path.display())]
    FileAccess {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// An ignore mask that is not a valid glob pattern
    #[error("invalid ignore mask \"{mask}\": {source}")]
    InvalidMask {
        /// The offending mask text
        mask: String,
        /// Underlying pattern error
        source: glob::PatternError,
    },

    /// Invalid scanner configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a FileAccess error from a path and io::Error
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidMask error
    pub fn invalid_mask(mask: impl Into<String>, source: glob::PatternError) -> Self {
        Error::InvalidMask {
            mask: mask.into(),
            source,
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_access_display() {
        let err = Error::file_access(
            "pkg/module.py",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let message = err.to_string();
        assert!(message.contains("pkg/module.py"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn test_invalid_mask_display() {
        let bad = glob::Pattern::new("[").unwrap_err();
        let err = Error::invalid_mask("[", bad);
        assert!(err.to_string().contains('['));
    }
}
