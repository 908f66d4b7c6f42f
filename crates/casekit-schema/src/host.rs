use crate::{
    diagnostic::SourceLocation,
    policy::PolicyTag,
    types::TypeRef,
};
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// HostKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum HostKind {
    Class,
    Interface,
    Struct,
}

///
/// Visibility
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

///
/// MemberOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum MemberOrigin {
    Field,
    /// A property; only body-less (auto) properties are value-carrying.
    Property { has_body: bool },
}

///
/// RawMember
///
/// One declared member of the host, exactly as the front-end saw it, before
/// extraction filters and validates it.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RawMember {
    pub name: String,
    pub ty: TypeRef,
    pub origin: MemberOrigin,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Explicitly opted out of the member model by the host author.
    pub opt_out: bool,
    pub tags: BTreeSet<PolicyTag>,
    pub eq_with: Option<String>,
    pub ord_with: Option<String>,
    pub hash_with: Option<String>,
    pub location: Option<SourceLocation>,
}

impl RawMember {
    /// A public instance field with no tags — the common case.
    #[must_use]
    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            origin: MemberOrigin::Field,
            visibility: Visibility::Public,
            is_static: false,
            opt_out: false,
            tags: BTreeSet::new(),
            eq_with: None,
            ord_with: None,
            hash_with: None,
            location: None,
        }
    }

    #[must_use]
    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            origin: MemberOrigin::Property { has_body: false },
            ..Self::field(name, ty)
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: PolicyTag) -> Self {
        self.tags.insert(tag);
        self
    }

    #[must_use]
    pub fn with_eq_strategy(mut self, path: impl Into<String>) -> Self {
        self.eq_with = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_ord_strategy(mut self, path: impl Into<String>) -> Self {
        self.ord_with = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_hash_strategy(mut self, path: impl Into<String>) -> Self {
        self.hash_with = Some(path.into());
        self
    }
}

///
/// TypeParam
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeParam {
    pub ident: String,
    pub bounds: Vec<String>,
}

impl TypeParam {
    #[must_use]
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            bounds: Vec::new(),
        }
    }
}

///
/// HostType
///
/// The full input to the engine for one annotated type: identifier, shape,
/// generic parameters, and the ordered raw member list (fields and
/// properties interleaved by original textual position).
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HostType {
    pub ident: String,
    pub kind: HostKind,
    pub type_params: Vec<TypeParam>,
    pub members: Vec<RawMember>,
    pub location: Option<SourceLocation>,
}

impl HostType {
    #[must_use]
    pub fn new(ident: impl Into<String>, kind: HostKind) -> Self {
        Self {
            ident: ident.into(),
            kind,
            type_params: Vec::new(),
            members: Vec::new(),
            location: None,
        }
    }

    #[must_use]
    pub fn member(mut self, member: RawMember) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    #[must_use]
    pub fn declares_param(&self, ident: &str) -> bool {
        self.type_params.iter().any(|p| p.ident == ident)
    }
}
