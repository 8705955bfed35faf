//! Error types for library generation.

use vgen_common::OpCategory;
use vgen_module::ConstructionError;

/// Errors that abort library generation.
///
/// There is no partial-result recovery: the first error stops the run, and
/// an artifact being written at that point is left truncated.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// A generated descriptor could not be rendered.
    #[error("failed to generate module '{module}': {source}")]
    Module {
        /// Name of the module being generated.
        module: String,
        /// The underlying construction error.
        #[source]
        source: ConstructionError,
    },

    /// Two catalog operations would generate the same module.
    #[error("duplicate {category} operation '{name}'")]
    DuplicateOperation {
        /// Category of the rejected entry.
        category: OpCategory,
        /// Name of the rejected entry.
        name: String,
    },

    /// An operation would generate a module name owned by another section.
    #[error("operation '{name}' collides with the built-in module '{module}'")]
    ReservedName {
        /// Name of the rejected entry.
        name: String,
        /// The built-in module it collides with.
        module: String,
    },

    /// Writing the artifact failed.
    #[error("failed to write library: {0}")]
    Io(#[from] std::io::Error),
}
