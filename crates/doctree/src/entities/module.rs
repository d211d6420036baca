use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Class;

/// Represents a single source file's extracted documentation content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Location relative to the scan root's parent
    pub path: PathBuf,

    /// Display name, typically the file name
    pub name: String,

    /// Classes in declaration order, including the synthetic top-level holder
    pub classes: Vec<Class>,
}

impl Module {
    /// Create a new module
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, classes: Vec<Class>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_new() {
        let module = Module::new("pkg/stack.py", "stack.py", vec![]);
        assert_eq!(module.path, PathBuf::from("pkg/stack.py"));
        assert_eq!(module.name, "stack.py");
        assert!(module.classes.is_empty());
    }
}
