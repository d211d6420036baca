//! Recursive directory walk producing a package tree.
//!
//! Directories become [`Package`] nodes, files with the configured source
//! extension become [`Module`] nodes, and a package marker file directly in
//! a directory supplies that package's docstring. The walk is synchronous
//! and depth-first; entry order mirrors the directory listing, which is not
//! guaranteed sorted. Callers needing determinism sort downstream.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, instrument, warn};

use crate::config::ScanConfig;
use crate::entities::{Module, Package};
use crate::error::{Error, Result};
use crate::extractor::Extractor;
use crate::reader::SourceReader;

/// Builds a package/module tree from a filesystem location
///
/// Owns the graph it constructs for one invocation; nothing is shared or
/// mutated outside construction. File contents are obtained through the
/// injected [`SourceReader`], and a file that cannot be read fails the scan
/// rather than being skipped silently.
pub struct PackageScanner {
    reader: Box<dyn SourceReader>,
    extractor: Extractor,
    masks: Vec<Pattern>,
    config: ScanConfig,
}

impl PackageScanner {
    /// Create a scanner, compiling the configured ignore masks
    pub fn new(
        reader: Box<dyn SourceReader>,
        extractor: Extractor,
        config: ScanConfig,
    ) -> Result<Self> {
        config.validate().map_err(Error::invalid_config)?;
        let masks = config
            .ignore_masks
            .iter()
            .map(|mask| Pattern::new(mask).map_err(|e| Error::invalid_mask(mask.as_str(), e)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            reader,
            extractor,
            masks,
            config,
        })
    }

    /// Get the scan configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Build the package tree rooted at `root`
    #[instrument(skip(self), fields(dir = %root.display()))]
    pub fn scan_directory(&self, root: &Path) -> Result<Package> {
        self.package_at(root, root)
    }

    /// Classify explicit paths into the given container package
    ///
    /// Files are appended to the container's modules, directories become
    /// full nested package subtrees. Paths that are neither are skipped
    /// with a warning.
    #[instrument(skip(self, container))]
    pub fn scan_paths(&self, paths: &[PathBuf], container: Package) -> Result<Package> {
        let mut modules = container.modules;
        let mut packages = container.packages;
        for path in paths {
            if path.is_file() {
                modules.push(self.extract_module(path, Path::new(""))?);
            } else if path.is_dir() {
                packages.push(self.package_at(path, path)?);
            } else {
                warn!(path = %path.display(), "not a file or directory, skipping");
            }
        }
        Ok(Package::new(
            container.path,
            container.name,
            container.docstring,
            modules,
            packages,
        ))
    }

    /// Read one source file and extract its documentation content
    ///
    /// The module path is stored relative to `root`'s parent so that the
    /// root directory's own name stays part of rendered locations.
    pub fn extract_module(&self, path: &Path, root: &Path) -> Result<Module> {
        let lines = self.reader.read_lines(path)?;
        let classes = self.extractor.classes(&lines);
        debug!(path = %path.display(), classes = classes.len(), "extracted module");
        Ok(Module::new(
            relative_to_parent(path, root),
            file_name(path),
            classes,
        ))
    }

    /// Check if a file name is excluded by mask or visibility policy
    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.masks.iter().any(|mask| mask.matches(file_name))
            || (file_name.starts_with('_') && !self.config.include_nonpublic)
    }

    fn package_at(&self, dir: &Path, root: &Path) -> Result<Package> {
        let mut modules = Vec::new();
        let mut packages = Vec::new();

        let entries = fs::read_dir(dir).map_err(|e| Error::file_access(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::file_access(dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                packages.push(self.package_at(&path, root)?);
            } else if self.is_source_file(&path) && !self.is_ignored(&file_name(&path)) {
                modules.push(self.extract_module(&path, root)?);
            }
        }

        let marker = dir.join(&self.config.package_marker);
        let docstring = if marker.is_file() {
            let lines = self.reader.read_lines(&marker)?;
            self.extractor.module_docstring(&lines)
        } else {
            String::new()
        };

        debug!(
            dir = %dir.display(),
            modules = modules.len(),
            packages = packages.len(),
            "scanned package directory"
        );
        Ok(Package::new(
            relative_to_parent(dir, root),
            file_name(dir),
            docstring,
            modules,
            packages,
        ))
    }

    fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.config.is_source_extension(ext))
    }
}

/// Path relative to the scan root's parent; the full path if that fails
fn relative_to_parent(path: &Path, root: &Path) -> PathBuf {
    let base = root.parent().unwrap_or_else(|| Path::new(""));
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Final path component as a string; empty for paths like `.`
fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}
