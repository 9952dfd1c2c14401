//! Error types for registry and resolution operations.

use thiserror::Error;

/// Errors raised while building a hierarchy or resolving documentation.
///
/// Missing documentation is never an error: resolvers skip it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocChainError {
    /// A member without a documentation field was marked for resolution.
    #[error("cannot extend `{type_name}.{member}`: member has no documentation to extend")]
    NotDocumentable {
        /// Type under construction
        type_name: String,
        /// Offending member
        member: String,
    },

    /// A member name that the type does not define.
    #[error("type `{type_name}` has no member `{member}`")]
    UnknownMember {
        /// Type that was searched
        type_name: String,
        /// Missing member
        member: String,
    },

    /// A type name that is not registered.
    #[error("unknown type `{0}`")]
    UnknownType(String),

    /// A type name registered twice.
    #[error("type `{0}` is already defined")]
    DuplicateType(String),

    /// The same base listed more than once.
    #[error("duplicate base `{base}` in definition of `{type_name}`")]
    DuplicateBase {
        /// Type being defined
        type_name: String,
        /// Repeated base
        base: String,
    },

    /// No consistent linearization exists for the given bases.
    #[error("cannot create a consistent ancestor order for `{0}`")]
    InconsistentHierarchy(String),
}

/// Result type alias for docchain operations
pub type Result<T> = std::result::Result<T, DocChainError>;
