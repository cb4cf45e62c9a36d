//! Type algebra, resource type references, and schema providers for Quarry.
//!
//! This crate provides:
//! - [`TypeSymbol`] - The closed set of resolved types
//! - [`UnionType::create`] - Normalized union construction
//! - [`make_read_only`] - Read-only views for existing resources
//! - [`ResourceTypeReference`] - Parsed `<namespace>/<type>@<version>` names
//! - [`ResourceTypeProvider`] - The schema lookup seam, with in-memory and
//!   caching implementations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod flags;
pub mod provider;
pub mod read_only;
pub mod reference;
pub mod symbol;
pub mod union;

pub use flags::{TypePropertyFlags, TypeSymbolValidationFlags};
pub use provider::{CachingTypeProvider, InMemoryTypeProvider, ResourceTypeProvider};
pub use read_only::{WRITABLE_ON_EXISTING, make_read_only};
pub use reference::{ResourceScope, ResourceTypeReference};
pub use symbol::{
    ArrayType, DiscriminatedObjectType, ErrorType, ObjectType, ObjectTypeBuilder, PrimitiveKind,
    PrimitiveType, ResourceType, TypeProperty, TypeSymbol, UnionType,
};
