use thiserror::Error;

/// Errors surfaced to the user with exit code 1
#[derive(Error, Debug)]
pub enum CliError {
    /// Extraction or directory traversal failure
    #[error(transparent)]
    Extract(#[from] doctree::Error),

    /// Page rendering or output write failure
    #[error(transparent)]
    Render(#[from] doctree_html::RenderError),
}
