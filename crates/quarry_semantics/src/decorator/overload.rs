//! Callable signatures for decorators.

use std::fmt;

use quarry_syntax::DeclarationKind;
use quarry_types::TypeSymbol;

quarry_foundation::flag_set! {
    /// Where a function may be applied.
    pub struct FunctionFlags: u8 {
        /// An ordinary function.
        const NONE = 0;
        /// May decorate `param` declarations.
        const PARAMETER_DECORATOR = 1 << 0;
        /// May decorate `output` declarations.
        const OUTPUT_DECORATOR = 1 << 1;
        /// May decorate `resource` declarations.
        const RESOURCE_DECORATOR = 1 << 2;
        /// May decorate any declaration.
        const ANY_DECORATOR = 0b111;
    }
}

impl FunctionFlags {
    /// Returns true if these flags allow decorating `kind`.
    #[must_use]
    pub const fn allows(self, kind: DeclarationKind) -> bool {
        let required = match kind {
            DeclarationKind::Parameter => Self::PARAMETER_DECORATOR,
            DeclarationKind::Output => Self::OUTPUT_DECORATOR,
            DeclarationKind::Resource => Self::RESOURCE_DECORATOR,
        };
        self.contains(required)
    }
}

/// A declared parameter of a function signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionParameter {
    /// Parameter name.
    pub name: String,
    /// Expected argument type.
    pub ty: TypeSymbol,
    /// Documentation.
    pub description: String,
    /// Whether the argument must be supplied.
    pub required: bool,
}

/// A function signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionOverload {
    name: String,
    description: String,
    return_type: TypeSymbol,
    parameters: Vec<FunctionParameter>,
    flags: FunctionFlags,
}

impl FunctionOverload {
    /// Starts building a signature for `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> FunctionOverloadBuilder {
        FunctionOverloadBuilder {
            name: name.into(),
            description: String::new(),
            return_type: TypeSymbol::Any,
            parameters: Vec::new(),
            flags: FunctionFlags::NONE,
        }
    }

    /// The function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documentation.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The return type.
    #[must_use]
    pub const fn return_type(&self) -> &TypeSymbol {
        &self.return_type
    }

    /// Parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[FunctionParameter] {
        &self.parameters
    }

    /// Applicability flags.
    #[must_use]
    pub const fn flags(&self) -> FunctionFlags {
        self.flags
    }

    /// The number of required parameters.
    #[must_use]
    pub fn minimum_argument_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.required).count()
    }

    /// The total number of parameters.
    #[must_use]
    pub fn maximum_argument_count(&self) -> usize {
        self.parameters.len()
    }
}

impl fmt::Display for FunctionOverload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let optional = if parameter.required { "" } else { "?" };
            write!(f, "{}{optional}: {}", parameter.name, parameter.ty)?;
        }
        write!(f, "): {}", self.return_type)
    }
}

/// Builder for [`FunctionOverload`].
#[derive(Clone, Debug)]
pub struct FunctionOverloadBuilder {
    name: String,
    description: String,
    return_type: TypeSymbol,
    parameters: Vec<FunctionParameter>,
    flags: FunctionFlags,
}

impl FunctionOverloadBuilder {
    /// Sets the return type. Defaults to `any`.
    #[must_use]
    pub fn with_return_type(mut self, return_type: TypeSymbol) -> Self {
        self.return_type = return_type;
        self
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a required parameter.
    #[must_use]
    pub fn with_required_parameter(
        self,
        name: impl Into<String>,
        ty: TypeSymbol,
        description: impl Into<String>,
    ) -> Self {
        self.with_parameter(name.into(), ty, description.into(), true)
    }

    /// Appends an optional parameter.
    #[must_use]
    pub fn with_optional_parameter(
        self,
        name: impl Into<String>,
        ty: TypeSymbol,
        description: impl Into<String>,
    ) -> Self {
        self.with_parameter(name.into(), ty, description.into(), false)
    }

    fn with_parameter(mut self, name: String, ty: TypeSymbol, description: String, required: bool) -> Self {
        self.parameters.push(FunctionParameter {
            name,
            ty,
            description,
            required,
        });
        self
    }

    /// Sets the applicability flags.
    #[must_use]
    pub fn with_flags(mut self, flags: FunctionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Builds the signature.
    #[must_use]
    pub fn build(self) -> FunctionOverload {
        FunctionOverload {
            name: self.name,
            description: self.description,
            return_type: self.return_type,
            parameters: self.parameters,
            flags: self.flags,
        }
    }
}
