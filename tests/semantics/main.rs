//! Integration tests for Layer 3: Semantics
//!
//! Tests for resource type resolution, decorator evaluation, and binding.

mod binder;
mod decorators;
mod resolver;

use quarry_types::{
    InMemoryTypeProvider, ObjectType, ResourceTypeReference, TypePropertyFlags, TypeSymbol,
};

pub const STORAGE: &str = "Microsoft.Storage/storageAccounts@2021-04-01";

/// A storage account schema with identity, required and read-only properties.
pub fn storage_body() -> TypeSymbol {
    TypeSymbol::Object(
        ObjectType::builder("Microsoft.Storage/storageAccounts")
            .property("name", TypeSymbol::string(), TypePropertyFlags::REQUIRED)
            .property("location", TypeSymbol::string(), TypePropertyFlags::REQUIRED)
            .property("sku", TypeSymbol::any_object(), TypePropertyFlags::REQUIRED)
            .property("kind", TypeSymbol::string(), TypePropertyFlags::NONE)
            .property("id", TypeSymbol::string(), TypePropertyFlags::READ_ONLY)
            .build()
            .unwrap(),
    )
}

/// A provider that knows the storage account schema.
pub fn storage_provider() -> InMemoryTypeProvider {
    InMemoryTypeProvider::new().with_type(ResourceTypeReference::parse(STORAGE).unwrap(), storage_body())
}
