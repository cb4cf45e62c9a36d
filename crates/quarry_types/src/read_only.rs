//! Read-only views of resource bodies.
//!
//! A declaration that references an existing resource cannot set most of its
//! properties. Its body type is the schema body with every property made
//! read-only, except the properties that identify where the resource lives.

use quarry_foundation::{DiagnosticBuilder, TextSpan};
use tracing::trace;

use crate::symbol::{DiscriminatedObjectType, ObjectType, TypeSymbol};

/// Properties that stay assignable on an existing resource.
pub const WRITABLE_ON_EXISTING: [&str; 2] = ["name", "scope"];

/// Returns `body` with its properties converted to read-only.
///
/// Objects have every property outside [`WRITABLE_ON_EXISTING`] marked
/// `READ_ONLY` and stripped of `REQUIRED`, as are their additional
/// properties. Discriminated objects are converted member by member. The
/// conversion is shallow: property types are not visited. Every other type is
/// returned unchanged.
///
/// If a discriminated object cannot be rebuilt the result is an error type
/// with no position; callers anchor it with [`TypeSymbol::anchored_at`].
#[must_use]
pub fn make_read_only(body: &TypeSymbol) -> TypeSymbol {
    match body {
        TypeSymbol::Object(object) => TypeSymbol::Object(object_to_read_only(object)),
        TypeSymbol::DiscriminatedObject(union) => discriminated_to_read_only(union),
        TypeSymbol::Any
        | TypeSymbol::Error(_)
        | TypeSymbol::Primitive(_)
        | TypeSymbol::StringLiteral(_)
        | TypeSymbol::Array(_)
        | TypeSymbol::Union(_)
        | TypeSymbol::Resource(_) => body.clone(),
    }
}

fn object_to_read_only(object: &ObjectType) -> ObjectType {
    let properties = object
        .properties
        .iter()
        .map(|(name, property)| {
            let converted = if WRITABLE_ON_EXISTING.contains(&name.as_str()) {
                property.clone()
            } else {
                property.with_flags(property.flags.to_read_only())
            };
            (name.clone(), converted)
        })
        .collect();

    ObjectType {
        name: object.name.clone(),
        validation_flags: object.validation_flags,
        properties,
        additional_properties_type: object.additional_properties_type.clone(),
        additional_properties_flags: object.additional_properties_flags.to_read_only(),
    }
}

fn discriminated_to_read_only(union: &DiscriminatedObjectType) -> TypeSymbol {
    let members = union.members.values().map(object_to_read_only);
    match DiscriminatedObjectType::new(
        union.name.clone(),
        union.validation_flags,
        union.discriminator_key.clone(),
        members,
    ) {
        Ok(converted) => TypeSymbol::DiscriminatedObject(converted),
        Err(err) => {
            trace!(union = %union.name, error = %err, "read-only conversion failed");
            TypeSymbol::error(DiagnosticBuilder::for_position(TextSpan::NIL).malformed_type(err.to_string()))
        }
    }
}
