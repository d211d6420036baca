//! Documentable entities extracted from source text.

mod class;
mod method;
mod module;
mod package;

pub use class::Class;
pub use method::Method;
pub use module::Module;
pub use package::{Package, PackageIter};

/// Capability set shared by classes and methods
///
/// Visibility is a naming convention: an entity is public iff its name does
/// not start with `_`. The empty name (the synthetic holder for top-level
/// methods) is public by that rule.
pub trait Entity {
    /// Identifier of the entity; may be empty for synthetic containers
    fn name(&self) -> &str;

    /// Normalized docstring, possibly empty
    fn docstring(&self) -> &str;

    /// Check if the entity is public
    fn is_public(&self) -> bool {
        !self.name().starts_with('_')
    }
}
