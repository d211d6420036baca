use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing rendered pages
///
/// Rendering itself is infallible; only the final write can fail, and that
/// failure belongs to the renderer, not the extraction core.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to create the output directory or write the page file
    #[error("failed to write page {}: {source}", .path.display())]
    Write {
        /// Output path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

impl RenderError {
    /// Create a Write error from a path and io::Error
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RenderError::Write {
            path: path.into(),
            source,
        }
    }
}
