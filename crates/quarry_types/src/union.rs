//! Union construction.

use crate::symbol::{TypeSymbol, UnionType};

impl UnionType {
    /// Builds the union of `members`.
    ///
    /// Nested unions are flattened and structurally equal members are kept
    /// once, in first-seen order. If any member is `Any` the result is `Any`.
    /// A single distinct member is returned as itself, and no members yield
    /// the empty `never` union.
    ///
    /// ```
    /// use quarry_types::{TypeSymbol, UnionType};
    ///
    /// let one = UnionType::create([TypeSymbol::string(), TypeSymbol::string()]);
    /// assert_eq!(one, TypeSymbol::string());
    /// ```
    #[must_use]
    pub fn create(members: impl IntoIterator<Item = TypeSymbol>) -> TypeSymbol {
        let mut flat: Vec<TypeSymbol> = Vec::new();
        for member in members {
            match member {
                TypeSymbol::Any => return TypeSymbol::Any,
                TypeSymbol::Union(nested) => {
                    for inner in nested.members {
                        push_distinct(&mut flat, inner);
                    }
                }
                other => push_distinct(&mut flat, other),
            }
        }

        if flat.len() == 1 {
            return flat.swap_remove(0);
        }
        TypeSymbol::Union(UnionType { members: flat })
    }

    /// The empty union.
    #[must_use]
    pub fn never() -> TypeSymbol {
        TypeSymbol::Union(UnionType {
            members: Vec::new(),
        })
    }
}

// Stored unions are already flat and never contain `Any`, so nested members
// need no further inspection.
fn push_distinct(members: &mut Vec<TypeSymbol>, candidate: TypeSymbol) {
    if !members.contains(&candidate) {
        members.push(candidate);
    }
}
