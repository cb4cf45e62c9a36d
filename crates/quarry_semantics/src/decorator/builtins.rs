//! Built-in decorators.

use quarry_syntax::DecoratorSyntax;
use quarry_types::{TypeSymbol, TypeSymbolValidationFlags, UnionType};

use super::{Decorator, DecoratorAttributes, DecoratorMetadata, FunctionFlags, FunctionOverload};

fn string_or_array() -> TypeSymbol {
    UnionType::create([TypeSymbol::string(), TypeSymbol::any_array()])
}

fn string_or_object() -> TypeSymbol {
    UnionType::create([TypeSymbol::string(), TypeSymbol::any_object()])
}

// =============================================================================
// secure
// =============================================================================

/// `@secure()` marks a string or object parameter as secret.
///
/// It produces no metadata; it narrows the parameter type instead.
#[derive(Debug)]
pub struct SecureDecorator {
    attributes: DecoratorAttributes,
}

impl SecureDecorator {
    /// Creates the decorator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attributes: DecoratorAttributes::new(
                string_or_object(),
                FunctionOverload::builder("secure")
                    .with_description(
                        "Makes the parameter a secure parameter. Its value is not logged or returned.",
                    )
                    .with_flags(FunctionFlags::PARAMETER_DECORATOR)
                    .build(),
            ),
        }
    }
}

impl Default for SecureDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorator for SecureDecorator {
    fn attributes(&self) -> &DecoratorAttributes {
        &self.attributes
    }

    fn evaluate(&self, _syntax: &DecoratorSyntax, _target: &TypeSymbol) -> Option<DecoratorMetadata> {
        None
    }

    fn narrow(&self, target: &TypeSymbol) -> TypeSymbol {
        target.with_validation_flags(TypeSymbolValidationFlags::IS_SECURE)
    }
}

// =============================================================================
// allowed
// =============================================================================

/// `@allowed([...])` restricts a parameter to a list of values.
#[derive(Debug)]
pub struct AllowedDecorator {
    attributes: DecoratorAttributes,
}

impl AllowedDecorator {
    /// The metadata key this decorator writes.
    pub const METADATA_KEY: &'static str = "allowedValues";

    /// Creates the decorator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attributes: DecoratorAttributes::new(
                TypeSymbol::Any,
                FunctionOverload::builder("allowed")
                    .with_description("Defines the allowed values of the parameter.")
                    .with_required_parameter("values", TypeSymbol::any_array(), "The allowed values.")
                    .with_flags(FunctionFlags::PARAMETER_DECORATOR)
                    .build(),
            ),
        }
    }
}

impl Default for AllowedDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorator for AllowedDecorator {
    fn attributes(&self) -> &DecoratorAttributes {
        &self.attributes
    }

    fn evaluate(&self, syntax: &DecoratorSyntax, _target: &TypeSymbol) -> Option<DecoratorMetadata> {
        syntax
            .arguments()
            .first()
            .map(|argument| DecoratorMetadata::new(Self::METADATA_KEY, argument.expression.clone()))
    }
}

// =============================================================================
// Single-argument decorators
// =============================================================================

macro_rules! metadata_decorator {
    (
        $(#[$doc:meta])*
        $name:ident, $keyword:literal, $target:expr, $flags:expr,
        $description:literal, ($parameter:literal, $parameter_type:expr, $parameter_description:literal)
    ) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name {
            attributes: DecoratorAttributes,
        }

        impl $name {
            /// Creates the decorator.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    attributes: DecoratorAttributes::new(
                        $target,
                        FunctionOverload::builder($keyword)
                            .with_description($description)
                            .with_required_parameter($parameter, $parameter_type, $parameter_description)
                            .with_flags($flags)
                            .build(),
                    ),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Decorator for $name {
            fn attributes(&self) -> &DecoratorAttributes {
                &self.attributes
            }
        }
    };
}

metadata_decorator! {
    /// `@minValue(n)` sets the smallest allowed integer.
    MinValueDecorator, "minValue", TypeSymbol::int(), FunctionFlags::PARAMETER_DECORATOR,
    "Defines the minimum value of the parameter.",
    ("value", TypeSymbol::int(), "The minimum value.")
}

metadata_decorator! {
    /// `@maxValue(n)` sets the largest allowed integer.
    MaxValueDecorator, "maxValue", TypeSymbol::int(), FunctionFlags::PARAMETER_DECORATOR,
    "Defines the maximum value of the parameter.",
    ("value", TypeSymbol::int(), "The maximum value.")
}

metadata_decorator! {
    /// `@minLength(n)` sets the shortest allowed string or array.
    MinLengthDecorator, "minLength", string_or_array(), FunctionFlags::PARAMETER_DECORATOR,
    "Defines the minimum length of the parameter.",
    ("length", TypeSymbol::int(), "The minimum length.")
}

metadata_decorator! {
    /// `@maxLength(n)` sets the longest allowed string or array.
    MaxLengthDecorator, "maxLength", string_or_array(), FunctionFlags::PARAMETER_DECORATOR,
    "Defines the maximum length of the parameter.",
    ("length", TypeSymbol::int(), "The maximum length.")
}

metadata_decorator! {
    /// `@description('...')` documents a declaration.
    DescriptionDecorator, "description", TypeSymbol::Any, FunctionFlags::ANY_DECORATOR,
    "Describes the declaration.",
    ("text", TypeSymbol::string(), "The description.")
}

metadata_decorator! {
    /// `@metadata({...})` attaches arbitrary data to a declaration.
    MetadataDecorator, "metadata", TypeSymbol::Any, FunctionFlags::ANY_DECORATOR,
    "Defines metadata of the declaration.",
    ("object", TypeSymbol::any_object(), "The metadata object.")
}

/// Every built-in decorator, in registration order.
#[must_use]
pub fn all() -> Vec<Box<dyn Decorator>> {
    vec![
        Box::new(SecureDecorator::new()),
        Box::new(AllowedDecorator::new()),
        Box::new(MinValueDecorator::new()),
        Box::new(MaxValueDecorator::new()),
        Box::new(MinLengthDecorator::new()),
        Box::new(MaxLengthDecorator::new()),
        Box::new(DescriptionDecorator::new()),
        Box::new(MetadataDecorator::new()),
    ]
}
