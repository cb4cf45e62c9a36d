//! Composable bit flag sets.
//!
//! Property flags, validation flags and decorator applicability flags are all
//! small bitsets that are combined with `|`, masked with `&` and cleared with
//! `!`. [`flag_set!`](crate::flag_set) generates the newtype and operators.

/// Declares a `Copy` bitset newtype with named constants and set operators.
///
/// ```
/// quarry_foundation::flag_set! {
///     /// Door state.
///     pub struct DoorFlags: u8 {
///         /// Nothing set.
///         const NONE = 0;
///         /// Door is open.
///         const OPEN = 1 << 0;
///         /// Door is locked.
///         const LOCKED = 1 << 1;
///     }
/// }
///
/// let flags = DoorFlags::OPEN | DoorFlags::LOCKED;
/// assert!(flags.contains(DoorFlags::LOCKED));
/// assert_eq!(flags & !DoorFlags::OPEN, DoorFlags::LOCKED);
/// ```
#[macro_export]
macro_rules! flag_set {
    (
        $(#[$outer:meta])*
        $vis:vis struct $name:ident : $repr:ty {
            $(
                $(#[$inner:meta])*
                const $flag:ident = $value:expr;
            )+
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name($repr);

        impl $name {
            $(
                $(#[$inner])*
                pub const $flag: Self = Self($value);
            )+

            const NAMED: &'static [(&'static str, Self)] = &[$((stringify!($flag), Self($value))),+];

            /// Returns the raw bits.
            #[must_use]
            pub const fn bits(self) -> $repr {
                self.0
            }

            /// Creates a flag set from raw bits.
            #[must_use]
            pub const fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            /// Returns true if every flag in `other` is set.
            #[must_use]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Returns true if any flag in `other` is set.
            #[must_use]
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// Returns true if no flag is set.
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Returns a copy with the flags in `other` added.
            #[must_use]
            pub const fn with(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// Returns a copy with the flags in `other` removed.
            #[must_use]
            pub const fn without(self, other: Self) -> Self {
                Self(self.0 & !other.0)
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ::std::ops::Not for $name {
            type Output = Self;

            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let names: Vec<&str> = Self::NAMED
                    .iter()
                    .filter(|(_, flag)| flag.0 != 0 && self.contains(*flag))
                    .map(|(name, _)| *name)
                    .collect();
                if names.is_empty() {
                    write!(f, "{}(empty)", stringify!($name))
                } else {
                    write!(f, "{}({})", stringify!($name), names.join(" | "))
                }
            }
        }
    };
}
