//! Injected file-reading seam.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Capability for reading source files as line sequences
///
/// The scanner never touches the filesystem for file contents directly; it
/// goes through this seam, which keeps extraction testable against in-memory
/// sources and lets callers substitute their own I/O. Any failure surfaces
/// as [`Error::FileAccess`] and is propagated unmodified.
pub trait SourceReader: Send + Sync {
    /// Read the file at `path` as an ordered sequence of text lines
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}

/// Reader backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path).map_err(|e| Error::file_access(path, e))?;
        Ok(text.lines().map(str::to_string).collect())
    }
}
