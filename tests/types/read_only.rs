//! Integration tests for read-only conversion
//!
//! Tests the identity allow-list, discriminated objects, and idempotence.

use proptest::prelude::*;
use quarry_types::{
    DiscriminatedObjectType, ObjectType, TypePropertyFlags, TypeSymbol, TypeSymbolValidationFlags,
    WRITABLE_ON_EXISTING, make_read_only,
};

fn site() -> TypeSymbol {
    TypeSymbol::Object(
        ObjectType::builder("Microsoft.Web/sites")
            .property("name", TypeSymbol::string(), TypePropertyFlags::REQUIRED)
            .property("scope", TypeSymbol::string(), TypePropertyFlags::WRITE_ONLY)
            .property("location", TypeSymbol::string(), TypePropertyFlags::REQUIRED)
            .property("properties", TypeSymbol::any_object(), TypePropertyFlags::NONE)
            .build()
            .unwrap(),
    )
}

#[test]
fn allow_list_is_name_and_scope() {
    assert_eq!(WRITABLE_ON_EXISTING, ["name", "scope"]);
}

#[test]
fn identity_properties_keep_flags_exactly() {
    let converted = make_read_only(&site());
    let object = converted.as_object().unwrap();
    assert_eq!(object.property("name").unwrap().flags, TypePropertyFlags::REQUIRED);
    assert_eq!(object.property("scope").unwrap().flags, TypePropertyFlags::WRITE_ONLY);
}

#[test]
fn other_properties_lose_required() {
    let converted = make_read_only(&site());
    let object = converted.as_object().unwrap();
    for name in ["location", "properties"] {
        let flags = object.property(name).unwrap().flags;
        assert!(flags.contains(TypePropertyFlags::READ_ONLY), "{name}");
        assert!(!flags.contains(TypePropertyFlags::REQUIRED), "{name}");
    }
}

#[test]
fn name_and_validation_flags_survive() {
    let secure = site().with_validation_flags(TypeSymbolValidationFlags::IS_SECURE);
    let converted = make_read_only(&secure);
    assert_eq!(converted.name(), "Microsoft.Web/sites");
    assert!(converted.validation_flags().contains(TypeSymbolValidationFlags::IS_SECURE));
}

#[test]
fn discriminated_object_keeps_keys() {
    let members = ["linux", "windows"].map(|os| {
        ObjectType::builder(format!("{os}Config"))
            .property("os", TypeSymbol::string_literal(os), TypePropertyFlags::REQUIRED)
            .property("image", TypeSymbol::string(), TypePropertyFlags::REQUIRED)
            .build()
            .unwrap()
    });
    let original =
        DiscriminatedObjectType::new("VmConfig", TypeSymbolValidationFlags::DEFAULT, "os", members).unwrap();
    let converted = make_read_only(&TypeSymbol::DiscriminatedObject(original.clone()));
    let converted = converted.as_discriminated_object().unwrap();

    assert_eq!(converted.discriminator_key(), original.discriminator_key());
    let keys: Vec<&String> = converted.members().keys().collect();
    assert_eq!(keys, original.members().keys().collect::<Vec<_>>());
    for (key, member) in original.members() {
        assert_eq!(
            TypeSymbol::Object(converted.member(key).unwrap().clone()),
            make_read_only(&TypeSymbol::Object(member.clone()))
        );
    }
}

fn object_strategy() -> impl Strategy<Value = TypeSymbol> {
    let name = prop_oneof![Just("name".to_string()), Just("scope".to_string()), "[a-z]{2,8}"];
    prop::collection::hash_map(name, 0u8..16, 0..10).prop_map(|properties| {
        let mut builder = ObjectType::builder("Generated");
        for (name, bits) in properties {
            builder = builder.property(name, TypeSymbol::int(), TypePropertyFlags::from_bits(bits));
        }
        TypeSymbol::Object(builder.build().unwrap())
    })
}

proptest! {
    #[test]
    fn idempotent(body in object_strategy()) {
        let once = make_read_only(&body);
        prop_assert_eq!(make_read_only(&once), once);
    }

    #[test]
    fn property_set_is_unchanged(body in object_strategy()) {
        let converted = make_read_only(&body);
        let before: Vec<&String> = body.as_object().unwrap().properties().keys().collect();
        let after: Vec<&String> = converted.as_object().unwrap().properties().keys().collect();
        prop_assert_eq!(before, after);
    }
}
