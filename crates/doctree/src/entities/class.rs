use serde::{Deserialize, Serialize};

use super::{Entity, Method};

/// Represents a class recognized in source text
///
/// A class with an empty name is the synthetic holder for module-top-level
/// methods and carries no parent or docstring of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Class name; empty for the synthetic top-level holder
    pub name: String,

    /// Raw base-class expression from the signature, empty if none
    pub parent: String,

    /// Normalized docstring, empty if absent
    pub docstring: String,

    /// Methods in declaration order
    pub methods: Vec<Method>,
}

impl Class {
    /// Create a new class
    pub fn new(
        name: impl Into<String>,
        parent: impl Into<String>,
        docstring: impl Into<String>,
        methods: Vec<Method>,
    ) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            docstring: docstring.into(),
            methods,
        }
    }

    /// Check if a method with the given name exists
    pub fn has_method(&self, method_name: &str) -> bool {
        self.methods.iter().any(|m| m.name == method_name)
    }
}

impl Entity for Class {
    fn name(&self) -> &str {
        &self.name
    }

    fn docstring(&self) -> &str {
        &self.docstring
    }
}
