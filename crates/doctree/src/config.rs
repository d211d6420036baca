//! Extraction and scanning policy configuration.

/// Policy flags controlling which extracted entities are kept
///
/// Mirrors the CLI's `--nonpublic` and `--empty` toggles. The defaults keep
/// only public entities and only methods that carry a docstring.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractorConfig {
    /// Keep entities whose name starts with `_`
    pub include_nonpublic: bool,

    /// Keep methods that have no docstring (classes are never docstring-filtered)
    pub include_undocumented: bool,
}

/// Configuration for directory scanning
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Glob-style file-name masks to skip (evaluated per file at traversal time)
    pub ignore_masks: Vec<String>,

    /// Extension (without the dot) of files treated as source modules
    pub source_extension: String,

    /// File name whose docstring becomes the enclosing package's docstring
    pub package_marker: String,

    /// Keep files whose name starts with `_`
    pub include_nonpublic: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_masks: vec!["*_test.*".to_string(), "test_*.*".to_string()],
            source_extension: "py".to_string(),
            package_marker: "__init__.py".to_string(),
            include_nonpublic: false,
        }
    }
}

impl ScanConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.source_extension.is_empty() {
            return Err("source_extension cannot be empty".to_string());
        }

        if self.package_marker.is_empty() {
            return Err("package_marker cannot be empty".to_string());
        }

        Ok(())
    }

    /// Check if a file extension marks a source module
    pub fn is_source_extension(&self, extension: &str) -> bool {
        extension.trim_start_matches('.') == self.source_extension.trim_start_matches('.')
    }
}
