use serde::{Deserialize, Serialize};

use super::Entity;

/// Represents a method or free function recognized in source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// Method name
    pub name: String,

    /// Parameter names/expressions in declaration order, whitespace-trimmed
    pub parameters: Vec<String>,

    /// Normalized docstring, empty if absent
    pub docstring: String,
}

impl Method {
    /// Create a new method
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<String>,
        docstring: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            docstring: docstring.into(),
        }
    }
}

impl Entity for Method {
    fn name(&self) -> &str {
        &self.name
    }

    fn docstring(&self) -> &str {
        &self.docstring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_new() {
        let method = Method::new("push", vec!["self".to_string(), "item".to_string()], "Add.");
        assert_eq!(method.name, "push");
        assert_eq!(method.parameters, vec!["self", "item"]);
        assert_eq!(method.docstring, "Add.");
        assert!(method.is_public());
    }

    #[test]
    fn test_method_serializes_all_fields() {
        let method = Method::new("get", vec!["key".to_string()], "Fetch a value.");
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["name"], "get");
        assert_eq!(json["parameters"][0], "key");
        assert_eq!(json["docstring"], "Fetch a value.");
    }
}
