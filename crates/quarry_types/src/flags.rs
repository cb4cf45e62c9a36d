//! Flag sets attached to properties and types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

quarry_foundation::flag_set! {
    /// How a property of an object type may be used.
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct TypePropertyFlags: u8 {
        /// No restrictions.
        const NONE = 0;
        /// The property must be assigned.
        const REQUIRED = 1 << 0;
        /// The property is set by the platform and cannot be assigned.
        const READ_ONLY = 1 << 1;
        /// The property can be assigned but is never returned.
        const WRITE_ONLY = 1 << 2;
        /// The property must be known at the start of deployment.
        const DEPLOY_TIME_CONSTANT = 1 << 3;
    }
}

impl TypePropertyFlags {
    /// Returns the flags of the same property on a read-only view: read-only
    /// added, required removed.
    #[must_use]
    pub const fn to_read_only(self) -> Self {
        self.with(Self::READ_ONLY).without(Self::REQUIRED)
    }
}

quarry_foundation::flag_set! {
    /// How strictly assignments to a type are validated.
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct TypeSymbolValidationFlags: u8 {
        /// Mismatches are errors.
        const DEFAULT = 0;
        /// Mismatches are warnings.
        const WARN_ON_TYPE_MISMATCH = 1 << 0;
        /// The type cannot be assigned to at all.
        const PREVENT_ASSIGNMENT = 1 << 1;
        /// Values of the type must not be logged or returned.
        const IS_SECURE = 1 << 2;
    }
}
