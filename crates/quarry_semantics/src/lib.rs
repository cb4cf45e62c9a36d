//! Resource type resolution, decorator evaluation, and binding for Quarry.
//!
//! This crate provides:
//! - [`resolve_resource_type`] - Resource declarations to schema types
//! - [`resolve_declared_type`] - Declared types of any declaration
//! - [`Decorator`] and [`DecoratorRegistry`] - Declarative decorators
//! - [`evaluate_decorators`] - Metadata and narrowing for one declaration
//! - [`Binder`] - Whole-program binding, optionally on the rayon pool
//!
//! Semantic failures are values: an unresolvable declaration gets an error
//! type with a diagnostic and binding carries on with the rest.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binder;
pub mod config;
pub mod decorator;
pub mod resolver;

pub use binder::{Binder, BoundDeclaration, BoundProgram};
pub use config::BinderConfig;
pub use decorator::{
    Decorator, DecoratorAttributes, DecoratorEvaluation, DecoratorMetadata, DecoratorRegistry,
    FunctionFlags, FunctionOverload, FunctionOverloadBuilder, FunctionParameter,
    evaluate_decorators,
};
pub use resolver::{
    resolve_declared_type, resolve_output_type, resolve_parameter_type, resolve_resource_type,
    type_from_keyword,
};
