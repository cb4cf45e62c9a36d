//! The type algebra.
//!
//! `TypeSymbol` is a closed sum type. Transforms match on it exhaustively, so
//! adding a variant forces every transform to be revisited.
//!
//! Type values are immutable. Nested types sit behind `Arc`, so cloning a large
//! object type is cheap and a type can be shared across threads.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use quarry_foundation::{Diagnostic, Error, Result, TextSpan};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flags::{TypePropertyFlags, TypeSymbolValidationFlags};
use crate::reference::ResourceTypeReference;

// =============================================================================
// TypeSymbol
// =============================================================================

/// A resolved type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeSymbol {
    /// Accepts and is accepted by everything.
    Any,
    /// Resolution failed; carries the diagnostic explaining why.
    Error(ErrorType),
    /// `string`, `int`, `bool` or `null`.
    Primitive(PrimitiveType),
    /// A single string value, used for discriminators.
    StringLiteral(String),
    /// A homogeneous array.
    Array(ArrayType),
    /// An object with named properties.
    Object(ObjectType),
    /// An object whose shape is selected by a discriminator property.
    DiscriminatedObject(DiscriminatedObjectType),
    /// One of several types. Never has exactly one member.
    Union(UnionType),
    /// A deployable resource.
    Resource(ResourceType),
}

impl TypeSymbol {
    /// `string`
    #[must_use]
    pub const fn string() -> Self {
        Self::Primitive(PrimitiveType::new(PrimitiveKind::String))
    }

    /// `int`
    #[must_use]
    pub const fn int() -> Self {
        Self::Primitive(PrimitiveType::new(PrimitiveKind::Int))
    }

    /// `bool`
    #[must_use]
    pub const fn bool() -> Self {
        Self::Primitive(PrimitiveType::new(PrimitiveKind::Bool))
    }

    /// `null`
    #[must_use]
    pub const fn null() -> Self {
        Self::Primitive(PrimitiveType::new(PrimitiveKind::Null))
    }

    /// A string literal type.
    #[must_use]
    pub fn string_literal(value: impl Into<String>) -> Self {
        Self::StringLiteral(value.into())
    }

    /// An array of `item`.
    #[must_use]
    pub fn array(item: TypeSymbol) -> Self {
        Self::Array(ArrayType::new(item))
    }

    /// An array of anything.
    #[must_use]
    pub fn any_array() -> Self {
        Self::array(Self::Any)
    }

    /// An open object that accepts any properties.
    #[must_use]
    pub fn any_object() -> Self {
        Self::Object(ObjectType {
            name: "object".to_string(),
            validation_flags: TypeSymbolValidationFlags::DEFAULT,
            properties: IndexMap::new(),
            additional_properties_type: Some(Arc::new(Self::Any)),
            additional_properties_flags: TypePropertyFlags::NONE,
        })
    }

    /// An error type for `diagnostic`.
    #[must_use]
    pub fn error(diagnostic: Diagnostic) -> Self {
        Self::Error(ErrorType::new(diagnostic))
    }

    /// Returns true if this is an error type.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns true if this is `any`.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns the diagnostic of an error type.
    #[must_use]
    pub const fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Error(error) => Some(&error.diagnostic),
            _ => None,
        }
    }

    /// Collects every error diagnostic in this type and its children.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        let mut found = Vec::new();
        self.collect_diagnostics(&mut found);
        found
    }

    fn collect_diagnostics<'a>(&'a self, found: &mut Vec<&'a Diagnostic>) {
        match self {
            Self::Error(error) => found.push(&error.diagnostic),
            Self::Array(t) => t.item.collect_diagnostics(found),
            Self::Object(t) => t.collect_diagnostics(found),
            Self::DiscriminatedObject(t) => {
                for member in t.members.values() {
                    member.collect_diagnostics(found);
                }
            }
            Self::Union(t) => {
                for member in &t.members {
                    member.collect_diagnostics(found);
                }
            }
            Self::Resource(t) => t.body.collect_diagnostics(found),
            Self::Any | Self::Primitive(_) | Self::StringLiteral(_) => {}
        }
    }

    /// Returns the object type, if this is one.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the discriminated object type, if this is one.
    #[must_use]
    pub const fn as_discriminated_object(&self) -> Option<&DiscriminatedObjectType> {
        match self {
            Self::DiscriminatedObject(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the resource type, if this is one.
    #[must_use]
    pub const fn as_resource(&self) -> Option<&ResourceType> {
        match self {
            Self::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    /// Returns the validation flags of types that carry them.
    #[must_use]
    pub const fn validation_flags(&self) -> TypeSymbolValidationFlags {
        match self {
            Self::Primitive(t) => t.validation_flags,
            Self::Object(t) => t.validation_flags,
            Self::DiscriminatedObject(t) => t.validation_flags,
            Self::Any
            | Self::Error(_)
            | Self::StringLiteral(_)
            | Self::Array(_)
            | Self::Union(_)
            | Self::Resource(_) => TypeSymbolValidationFlags::DEFAULT,
        }
    }

    /// Returns a copy with `flags` added to the validation flags.
    ///
    /// Types without validation flags are returned unchanged.
    #[must_use]
    pub fn with_validation_flags(&self, flags: TypeSymbolValidationFlags) -> Self {
        match self {
            Self::Primitive(t) => Self::Primitive(PrimitiveType {
                validation_flags: t.validation_flags | flags,
                ..*t
            }),
            Self::Object(t) => Self::Object(ObjectType {
                validation_flags: t.validation_flags | flags,
                ..t.clone()
            }),
            Self::DiscriminatedObject(t) => Self::DiscriminatedObject(DiscriminatedObjectType {
                validation_flags: t.validation_flags | flags,
                ..t.clone()
            }),
            Self::Any
            | Self::Error(_)
            | Self::StringLiteral(_)
            | Self::Array(_)
            | Self::Union(_)
            | Self::Resource(_) => self.clone(),
        }
    }

    /// Moves error diagnostics reported without a position onto `span`.
    ///
    /// Pure type transforms do not know where in source their input came
    /// from; callers that do use this to position the result.
    #[must_use]
    pub fn anchored_at(self, span: TextSpan) -> Self {
        match self {
            Self::Error(mut error) if error.diagnostic.span == TextSpan::NIL => {
                error.diagnostic.span = span;
                Self::Error(error)
            }
            other => other,
        }
    }

    /// Returns a readable name for this type.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Any => "any".to_string(),
            Self::Error(_) => "error".to_string(),
            Self::Primitive(t) => t.kind.name().to_string(),
            Self::StringLiteral(value) => format!("'{value}'"),
            Self::Array(t) => match t.item.as_ref() {
                Self::Any => "array".to_string(),
                item @ Self::Union(_) => format!("({item})[]"),
                item => format!("{item}[]"),
            },
            Self::Object(t) => t.name.clone(),
            Self::DiscriminatedObject(t) => t.name.clone(),
            Self::Union(t) => t.name(),
            Self::Resource(t) => t.reference.to_string(),
        }
    }

    /// Checks whether a value of type `other` may be used where `self` is
    /// expected.
    ///
    /// This is a shallow structural check used to expose decorator target
    /// constraints:
    /// - `Any` on either side is compatible
    /// - Error types are compatible with everything, to avoid cascades
    /// - A union accepts what any member accepts; a union is accepted if
    ///   every member is
    /// - Primitives match by kind; `string` accepts string literals
    /// - Object targets accept objects and discriminated objects
    #[must_use]
    pub fn accepts(&self, other: &TypeSymbol) -> bool {
        match (self, other) {
            (Self::Any | Self::Error(_), _) | (_, Self::Any | Self::Error(_)) => true,
            (_, Self::Union(source)) => source.members.iter().all(|m| self.accepts(m)),
            (Self::Union(target), _) => target.members.iter().any(|m| m.accepts(other)),
            (Self::Primitive(target), Self::Primitive(source)) => target.kind == source.kind,
            (Self::Primitive(target), Self::StringLiteral(_)) => target.kind == PrimitiveKind::String,
            (Self::StringLiteral(target), Self::StringLiteral(source)) => target == source,
            (Self::Array(target), Self::Array(source)) => target.item.accepts(&source.item),
            (Self::Object(_), Self::Object(_) | Self::DiscriminatedObject(_))
            | (Self::DiscriminatedObject(_), Self::DiscriminatedObject(_)) => true,
            (Self::Resource(target), Self::Resource(source)) => target.reference == source.reference,
            (
                Self::Primitive(_)
                | Self::StringLiteral(_)
                | Self::Array(_)
                | Self::Object(_)
                | Self::DiscriminatedObject(_)
                | Self::Resource(_),
                _,
            ) => false,
        }
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

// =============================================================================
// Leaf Types
// =============================================================================

/// A failed resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorType {
    /// Why resolution failed.
    pub diagnostic: Diagnostic,
}

impl ErrorType {
    /// Creates an error type.
    #[must_use]
    pub const fn new(diagnostic: Diagnostic) -> Self {
        Self { diagnostic }
    }
}

/// The primitive kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveKind {
    /// `string`
    String,
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `null`
    Null,
}

impl PrimitiveKind {
    /// The keyword for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Null => "null",
        }
    }
}

/// A primitive type with its validation flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrimitiveType {
    /// Which primitive.
    pub kind: PrimitiveKind,
    /// Validation flags, e.g. `IS_SECURE` for secure strings.
    pub validation_flags: TypeSymbolValidationFlags,
}

impl PrimitiveType {
    /// Creates a primitive with default validation.
    #[must_use]
    pub const fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            validation_flags: TypeSymbolValidationFlags::DEFAULT,
        }
    }
}

/// An array type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrayType {
    /// The element type.
    pub item: Arc<TypeSymbol>,
}

impl ArrayType {
    /// Creates an array type.
    #[must_use]
    pub fn new(item: TypeSymbol) -> Self {
        Self {
            item: Arc::new(item),
        }
    }
}

// =============================================================================
// Objects
// =============================================================================

/// A named property of an object type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeProperty {
    /// Property name.
    pub name: String,
    /// Property type.
    pub ty: Arc<TypeSymbol>,
    /// Usage flags.
    pub flags: TypePropertyFlags,
    /// Optional documentation.
    pub description: Option<String>,
}

impl TypeProperty {
    /// Creates a property.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeSymbol, flags: TypePropertyFlags) -> Self {
        Self {
            name: name.into(),
            ty: Arc::new(ty),
            flags,
            description: None,
        }
    }

    /// Adds documentation.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns a copy with different flags.
    #[must_use]
    pub fn with_flags(&self, flags: TypePropertyFlags) -> Self {
        Self {
            flags,
            ..self.clone()
        }
    }
}

/// An object type.
///
/// Properties are looked up by name in O(1) and iterate in declaration order,
/// so diagnostics that list properties are reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectType {
    pub(crate) name: String,
    pub(crate) validation_flags: TypeSymbolValidationFlags,
    pub(crate) properties: IndexMap<String, TypeProperty>,
    pub(crate) additional_properties_type: Option<Arc<TypeSymbol>>,
    pub(crate) additional_properties_flags: TypePropertyFlags,
}

impl ObjectType {
    /// Creates an object type.
    ///
    /// # Errors
    ///
    /// Returns a `DuplicateProperty` error if two properties share a name.
    pub fn new(
        name: impl Into<String>,
        validation_flags: TypeSymbolValidationFlags,
        properties: impl IntoIterator<Item = TypeProperty>,
        additional_properties_type: Option<TypeSymbol>,
        additional_properties_flags: TypePropertyFlags,
    ) -> Result<Self> {
        let name = name.into();
        let mut by_name = IndexMap::new();
        for property in properties {
            match by_name.entry(property.name.clone()) {
                Entry::Occupied(_) => return Err(Error::duplicate_property(&name, &property.name)),
                Entry::Vacant(slot) => {
                    slot.insert(property);
                }
            }
        }

        Ok(Self {
            name,
            validation_flags,
            properties: by_name,
            additional_properties_type: additional_properties_type.map(Arc::new),
            additional_properties_flags,
        })
    }

    /// Starts building an object type with default validation and no
    /// additional properties.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ObjectTypeBuilder {
        ObjectTypeBuilder {
            name: name.into(),
            validation_flags: TypeSymbolValidationFlags::DEFAULT,
            properties: Vec::new(),
            additional_properties: None,
            additional_properties_flags: TypePropertyFlags::NONE,
        }
    }

    /// The type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validation flags.
    #[must_use]
    pub const fn validation_flags(&self) -> TypeSymbolValidationFlags {
        self.validation_flags
    }

    /// Properties in declaration order, keyed by name.
    #[must_use]
    pub const fn properties(&self) -> &IndexMap<String, TypeProperty> {
        &self.properties
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&TypeProperty> {
        self.properties.get(name)
    }

    /// The type of properties not declared by name, if any are allowed.
    #[must_use]
    pub fn additional_properties_type(&self) -> Option<&TypeSymbol> {
        self.additional_properties_type.as_deref()
    }

    /// Flags of properties not declared by name.
    #[must_use]
    pub const fn additional_properties_flags(&self) -> TypePropertyFlags {
        self.additional_properties_flags
    }

    fn collect_diagnostics<'a>(&'a self, found: &mut Vec<&'a Diagnostic>) {
        for property in self.properties.values() {
            property.ty.collect_diagnostics(found);
        }
        if let Some(additional) = &self.additional_properties_type {
            additional.collect_diagnostics(found);
        }
    }
}

/// Builder for [`ObjectType`].
#[derive(Clone, Debug)]
pub struct ObjectTypeBuilder {
    name: String,
    validation_flags: TypeSymbolValidationFlags,
    properties: Vec<TypeProperty>,
    additional_properties: Option<TypeSymbol>,
    additional_properties_flags: TypePropertyFlags,
}

impl ObjectTypeBuilder {
    /// Adds a property.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, ty: TypeSymbol, flags: TypePropertyFlags) -> Self {
        self.properties.push(TypeProperty::new(name, ty, flags));
        self
    }

    /// Adds a fully built property.
    #[must_use]
    pub fn with_property(mut self, property: TypeProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Allows properties not declared by name.
    #[must_use]
    pub fn additional_properties(mut self, ty: TypeSymbol, flags: TypePropertyFlags) -> Self {
        self.additional_properties = Some(ty);
        self.additional_properties_flags = flags;
        self
    }

    /// Sets validation flags.
    #[must_use]
    pub fn validation_flags(mut self, flags: TypeSymbolValidationFlags) -> Self {
        self.validation_flags = flags;
        self
    }

    /// Builds the object type.
    ///
    /// # Errors
    ///
    /// Returns a `DuplicateProperty` error if two properties share a name.
    pub fn build(self) -> Result<ObjectType> {
        ObjectType::new(
            self.name,
            self.validation_flags,
            self.properties,
            self.additional_properties,
            self.additional_properties_flags,
        )
    }
}

/// An object type whose shape is chosen by the value of one property.
///
/// Every member declares the discriminator property with a string literal
/// type, and that literal is the member's key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiscriminatedObjectType {
    pub(crate) name: String,
    pub(crate) validation_flags: TypeSymbolValidationFlags,
    pub(crate) discriminator_key: String,
    pub(crate) members: im::OrdMap<String, ObjectType>,
}

impl DiscriminatedObjectType {
    /// Creates a discriminated object type, keying each member by the literal
    /// value of its discriminator property.
    ///
    /// # Errors
    ///
    /// Returns a `MissingDiscriminator` error if a member lacks a string
    /// literal discriminator property, or a `DuplicateMember` error if two
    /// members share a discriminator value.
    pub fn new(
        name: impl Into<String>,
        validation_flags: TypeSymbolValidationFlags,
        discriminator_key: impl Into<String>,
        members: impl IntoIterator<Item = ObjectType>,
    ) -> Result<Self> {
        let name = name.into();
        let discriminator_key = discriminator_key.into();
        let mut by_key = im::OrdMap::new();

        for member in members {
            let key = match member.property(&discriminator_key).map(|p| p.ty.as_ref()) {
                Some(TypeSymbol::StringLiteral(value)) => value.clone(),
                _ => return Err(Error::missing_discriminator(&member.name, &discriminator_key)),
            };
            if by_key.contains_key(&key) {
                return Err(Error::duplicate_member(&name, key));
            }
            by_key.insert(key, member);
        }

        Ok(Self {
            name,
            validation_flags,
            discriminator_key,
            members: by_key,
        })
    }

    /// The type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validation flags.
    #[must_use]
    pub const fn validation_flags(&self) -> TypeSymbolValidationFlags {
        self.validation_flags
    }

    /// The name of the discriminator property.
    #[must_use]
    pub fn discriminator_key(&self) -> &str {
        &self.discriminator_key
    }

    /// Members keyed by discriminator value.
    #[must_use]
    pub const fn members(&self) -> &im::OrdMap<String, ObjectType> {
        &self.members
    }

    /// Looks up a member by discriminator value.
    #[must_use]
    pub fn member(&self, key: &str) -> Option<&ObjectType> {
        self.members.get(key)
    }
}

// =============================================================================
// Unions and Resources
// =============================================================================

/// A union of two or more distinct types, or the empty `never` union.
///
/// Build with [`UnionType::create`](crate::union::UnionType::create) so the
/// membership invariants hold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnionType {
    pub(crate) members: Vec<TypeSymbol>,
}

impl UnionType {
    /// Members in first-seen order.
    #[must_use]
    pub fn members(&self) -> &[TypeSymbol] {
        &self.members
    }

    /// Returns true for the empty union.
    #[must_use]
    pub fn is_never(&self) -> bool {
        self.members.is_empty()
    }

    /// `a | b | c`, or `never`.
    #[must_use]
    pub fn name(&self) -> String {
        if self.members.is_empty() {
            return "never".to_string();
        }
        self.members
            .iter()
            .map(TypeSymbol::name)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// A resource type: its reference and the type of its body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceType {
    /// The schema this type was resolved from.
    pub reference: ResourceTypeReference,
    /// The type of the declaration body.
    pub body: Arc<TypeSymbol>,
}

impl ResourceType {
    /// Creates a resource type.
    #[must_use]
    pub fn new(reference: ResourceTypeReference, body: TypeSymbol) -> Self {
        Self {
            reference,
            body: Arc::new(body),
        }
    }

    /// Returns a copy with the body replaced.
    #[must_use]
    pub fn with_body(&self, body: TypeSymbol) -> Self {
        Self::new(self.reference.clone(), body)
    }
}
