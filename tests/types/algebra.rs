//! Integration tests for the type algebra
//!
//! Tests union normalization, naming, and compatibility.

use quarry_types::{
    DiscriminatedObjectType, ObjectType, TypePropertyFlags, TypeSymbol, TypeSymbolValidationFlags,
    UnionType,
};

fn member(kind: &str) -> ObjectType {
    ObjectType::builder(kind)
        .property("kind", TypeSymbol::string_literal(kind), TypePropertyFlags::REQUIRED)
        .build()
        .unwrap()
}

// =============================================================================
// Unions
// =============================================================================

#[test]
fn union_of_identical_objects_collapses() {
    let object = TypeSymbol::Object(member("dog"));
    assert_eq!(UnionType::create([object.clone(), object.clone()]), object);
}

#[test]
fn union_of_one_member_is_that_member() {
    let array = TypeSymbol::array(TypeSymbol::string());
    assert_eq!(UnionType::create([array.clone()]), array);
}

#[test]
fn union_name_and_acceptance() {
    let union = UnionType::create([TypeSymbol::string(), TypeSymbol::int()]);
    assert_eq!(union.to_string(), "string | int");
    assert!(union.accepts(&TypeSymbol::int()));
    assert!(union.accepts(&TypeSymbol::string_literal("x")));
    assert!(!union.accepts(&TypeSymbol::bool()));
    assert!(TypeSymbol::array(union.clone()).to_string().starts_with('('));
}

#[test]
fn union_accepted_only_if_every_member_is() {
    let target = UnionType::create([TypeSymbol::string(), TypeSymbol::int()]);
    let narrow = UnionType::create([TypeSymbol::string_literal("a"), TypeSymbol::int()]);
    let wide = UnionType::create([TypeSymbol::string(), TypeSymbol::bool()]);
    assert!(target.accepts(&narrow));
    assert!(!target.accepts(&wide));
}

// =============================================================================
// Discriminated Objects
// =============================================================================

#[test]
fn discriminated_lookup_by_key() {
    let pet = DiscriminatedObjectType::new(
        "Pet",
        TypeSymbolValidationFlags::DEFAULT,
        "kind",
        [member("dog"), member("cat")],
    )
    .unwrap();
    assert_eq!(pet.discriminator_key(), "kind");
    assert_eq!(pet.member("cat").unwrap().name(), "cat");
    assert!(pet.member("bird").is_none());
    assert_eq!(TypeSymbol::DiscriminatedObject(pet).to_string(), "Pet");
}

#[test]
fn types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypeSymbol>();
}
