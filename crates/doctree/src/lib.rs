//! # doctree
//!
//! Docstring extraction engine: turns source trees into a hierarchy of
//! documentable entities (packages, modules, classes, methods) with
//! docstrings and parameter lists, ready for rendering.
//!
//! ## Features
//!
//! - Line-grouping recognizer for class and method declarations
//! - PEP-257 style docstring normalization
//! - Recursive package/module tree building with ignore-mask and
//!   visibility filtering
//! - Tolerant of malformed source: partial text degrades to empty fields,
//!   never an extraction failure
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doctree::{Extractor, ExtractorConfig, FsReader, PackageScanner, ScanConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), doctree::Error> {
//! let extractor = Extractor::new(ExtractorConfig::default());
//! let scanner = PackageScanner::new(Box::new(FsReader), extractor, ScanConfig::default())?;
//!
//! let tree = scanner.scan_directory(Path::new("mypackage"))?;
//! for package in tree.iter() {
//!     println!("{}: {} modules", package.name, package.modules.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod reader;
pub mod scanner;
pub mod trim;

// Re-export main types
pub use config::{ExtractorConfig, ScanConfig};
pub use entities::{Class, Entity, Method, Module, Package, PackageIter};
pub use error::{Error, Result};
pub use extractor::Extractor;
pub use reader::{FsReader, SourceReader};
pub use scanner::PackageScanner;
