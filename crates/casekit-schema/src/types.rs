use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Cardinality
///

#[derive(
    Clone, Copy, Default, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
pub enum Cardinality {
    #[default]
    One,
    Opt,
    Many,
}

///
/// Primitive
///
/// The built-in member type vocabulary. Floats refer to the finite-only
/// wrappers so every primitive carries lawful equality, ordering and
/// hashing.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    Bool,
    Float32,
    Float64,
    Int32,
    Int64,
    Nat32,
    Nat64,
    Text,
    Unit,
}

impl Primitive {
    #[must_use]
    pub const fn supports_copy(self) -> bool {
        !matches!(self, Self::Text)
    }
}

///
/// Item
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Item {
    /// Another case type, or any type implementing the core value traits.
    Named(String),
    /// A type parameter of the host.
    Param(String),
    Prim(Primitive),
}

///
/// TypeRef
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeRef {
    pub cardinality: Cardinality,
    pub item: Item,
}

impl TypeRef {
    #[must_use]
    pub const fn new(cardinality: Cardinality, item: Item) -> Self {
        Self { cardinality, item }
    }

    #[must_use]
    pub const fn prim(prim: Primitive) -> Self {
        Self::new(Cardinality::One, Item::Prim(prim))
    }

    #[must_use]
    pub const fn opt(prim: Primitive) -> Self {
        Self::new(Cardinality::Opt, Item::Prim(prim))
    }

    #[must_use]
    pub const fn many(prim: Primitive) -> Self {
        Self::new(Cardinality::Many, Item::Prim(prim))
    }

    #[must_use]
    pub fn named(path: impl Into<String>) -> Self {
        Self::new(Cardinality::One, Item::Named(path.into()))
    }

    #[must_use]
    pub fn param(ident: impl Into<String>) -> Self {
        Self::new(Cardinality::One, Item::Param(ident.into()))
    }

    /// Whether the lowered Rust type is `Copy`.
    #[must_use]
    pub const fn supports_copy(&self) -> bool {
        match (&self.cardinality, &self.item) {
            (Cardinality::Many, _) | (_, Item::Named(_) | Item::Param(_)) => false,
            (_, Item::Prim(prim)) => prim.supports_copy(),
        }
    }

    /// The host type parameter this member references, if any.
    #[must_use]
    pub fn referenced_param(&self) -> Option<&str> {
        match &self.item {
            Item::Param(ident) => Some(ident),
            Item::Named(_) | Item::Prim(_) => None,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_parses_from_str() {
        assert_eq!("Float64".parse::<Primitive>().unwrap(), Primitive::Float64);
        assert!("Float128".parse::<Primitive>().is_err());
    }

    #[test]
    fn copy_support_reflects_cardinality_and_item() {
        assert!(TypeRef::prim(Primitive::Int32).supports_copy());
        assert!(!TypeRef::prim(Primitive::Text).supports_copy());
        assert!(!TypeRef::many(Primitive::Int32).supports_copy());
        assert!(!TypeRef::named("Inner").supports_copy());
    }
}
