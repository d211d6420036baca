use std::path::PathBuf;

use serde::Serialize;

use super::Module;

/// Represents a directory-level container of modules and nested packages
///
/// Emptiness is computed once at construction: the tree is immutable after
/// the scanner builds it, so there is no cache to invalidate. `Deserialize`
/// is deliberately not derived; it would bypass the constructor and could
/// produce an inconsistent emptiness flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    /// Location relative to the scan root's parent
    pub path: PathBuf,

    /// Directory name
    pub name: String,

    /// Docstring taken from the package marker file, empty if absent
    pub docstring: String,

    /// Modules in directory-listing order
    pub modules: Vec<Module>,

    /// Nested packages in directory-listing order
    pub packages: Vec<Package>,

    empty: bool,
}

impl Package {
    /// Create a new package, computing emptiness over the finished subtree
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        docstring: impl Into<String>,
        modules: Vec<Module>,
        packages: Vec<Package>,
    ) -> Self {
        let empty = modules.is_empty() && packages.iter().all(Package::is_empty);
        Self {
            path: path.into(),
            name: name.into(),
            docstring: docstring.into(),
            modules,
            packages,
            empty,
        }
    }

    /// Check if the package and all of its nested packages contain no modules
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Pre-order traversal: the package itself, then every nested package
    ///
    /// The iterator is a pure function of the tree; calling `iter` again
    /// restarts the traversal.
    pub fn iter(&self) -> PackageIter<'_> {
        PackageIter { stack: vec![self] }
    }
}

/// Iterator over a package tree in pre-order
#[derive(Debug)]
pub struct PackageIter<'a> {
    stack: Vec<&'a Package>,
}

impl<'a> Iterator for PackageIter<'a> {
    type Item = &'a Package;

    fn next(&mut self) -> Option<Self::Item> {
        let package = self.stack.pop()?;
        self.stack.extend(package.packages.iter().rev());
        Some(package)
    }
}
