//! Inherited documentation for type hierarchies.
//!
//! When a derived type overrides a member, the documentation of the
//! overridden definitions is chained in front of the override's own text,
//! deduplicated, so the full inherited contract stays visible.
//!
//! Types are registered explicitly with their bases; the registry computes
//! each type's ancestor list once, at registration:
//!
//! ```
//! use docchain::{Member, Registry, TypeBuilder};
//!
//! let mut registry = Registry::new();
//! registry
//!     .define(TypeBuilder::new("Shape").member("area", Member::function("Return the area.")))
//!     .unwrap();
//! registry
//!     .define_extended(
//!         TypeBuilder::new("Circle")
//!             .base("Shape")
//!             .extended_member("area", Member::function("Uses pi * r^2."))
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! let area = registry.lookup("Circle", "area").unwrap();
//! assert_eq!(area.doc(), Some("Return the area.\n\nUses pi * r^2."));
//! ```

pub mod builder;
pub mod error;
pub mod linearize;
pub mod model;
pub mod registry;
pub mod resolve;
pub mod unindent;

pub use builder::TypeBuilder;
pub use error::{DocChainError, Result};
pub use linearize::ROOT_TYPE;
pub use model::{Function, Member, MemberKind, TypeDef};
pub use registry::{Parent, Registry};
pub use resolve::{attribute_doc, type_doc, BLOCK_SEPARATOR};
pub use unindent::unindent;
