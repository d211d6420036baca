//! # doctree-html
//!
//! Static HTML renderer for [`doctree`] documentation trees.
//!
//! Takes fully-populated, read-only tree nodes and produces self-contained
//! HTML documents: one doc page per module and an optional index page over a
//! package tree. The renderer knows nothing about how the tree was built;
//! it only consumes the data shapes the extraction core exposes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use doctree::Module;
//! use doctree_html::{render_docpage, write_page};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), doctree_html::RenderError> {
//! let module = Module::new("pkg/shapes.py", "shapes.py", vec![]);
//! let page = render_docpage(&module);
//! write_page(Path::new("docs/pkg/shapes.py.html"), &page)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod render;

pub use error::RenderError;
pub use render::{render_docpage, render_index, write_page};
