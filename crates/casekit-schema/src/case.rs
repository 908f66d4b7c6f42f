use crate::{
    MAX_CASE_NAME_LEN,
    diagnostic::{Diagnostic, Diagnostics},
    host::{HostKind, HostType, TypeParam},
    member::{Member, extract},
    policy::PolicyTag,
};
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// BaseLinkage
///
/// How union cases link to their shared surface: a closed enum
/// (`AbstractBase`), an open trait (`Interface`), or nothing (standalone
/// records). Selection is caller policy, never inferred.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum BaseLinkage {
    AbstractBase,
    Interface,
    #[default]
    None,
}

///
/// CaseDef
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CaseDef {
    pub ident: String,
    pub type_params: Vec<TypeParam>,
}

impl CaseDef {
    #[must_use]
    pub fn declares_param(&self, ident: &str) -> bool {
        self.type_params.iter().any(|p| p.ident == ident)
    }
}

///
/// CaseSpec
///
/// Everything the synthesizer needs for one concrete case: built once from
/// a host type, immutable thereafter, consumed exactly once.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CaseSpec {
    pub def: CaseDef,
    pub host_kind: HostKind,
    pub members: Vec<Member>,
    pub type_tags: BTreeSet<PolicyTag>,
    pub linkage: BaseLinkage,
    /// Discriminant within a union, assigned by the assembler.
    pub tag: Option<u32>,
    /// Name of the shared surface this case links to, assigned by the
    /// assembler (the union ident, or the union's case trait).
    pub base_ident: Option<String>,
    pub include_copy_update: bool,
    pub include_persistence: bool,
}

impl CaseSpec {
    /// Build a standalone case from a host description, running member
    /// extraction.
    pub fn from_host(
        host: &HostType,
        type_tags: BTreeSet<PolicyTag>,
    ) -> Result<Self, Vec<Diagnostic>> {
        let members = extract(host)?;

        Ok(Self {
            def: CaseDef {
                ident: host.ident.clone(),
                type_params: host.type_params.clone(),
            },
            host_kind: host.kind,
            members,
            type_tags,
            linkage: BaseLinkage::None,
            tag: None,
            base_ident: None,
            include_copy_update: true,
            include_persistence: true,
        })
    }

    /// Shape and arity checks. Member-level naming errors are surfaced by
    /// `extract` before a spec exists.
    #[must_use]
    pub fn validate(&self) -> Diagnostics {
        let mut diags = Diagnostics::new();
        let ident = &self.def.ident;

        if ident.is_empty() {
            diags.error("case identifier is empty", None);
        } else if ident.len() > MAX_CASE_NAME_LEN {
            diags.error(
                format!("case identifier '{ident}' exceeds {MAX_CASE_NAME_LEN} characters"),
                None,
            );
        }

        if self.host_kind == HostKind::Interface {
            diags.error(
                format!("case host '{ident}' must be a class or a struct"),
                None,
            );
        }

        for member in &self.members {
            if let Some(param) = member.ty.referenced_param()
                && !self.def.declares_param(param)
            {
                diags.error(
                    format!(
                        "member '{}' references type parameter '{param}' the host does not supply",
                        member.name
                    ),
                    member.location.clone(),
                );
            }
        }

        diags
    }
}

///
/// UnionSpec
///
/// An ordered set of cases behind one discriminated supertype. Tags are the
/// 0-based declaration position, assigned during assembly; tag order is the
/// cross-variant ordering tie-break.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UnionSpec {
    pub ident: String,
    pub host_kind: HostKind,
    pub linkage: BaseLinkage,
    pub cases: Vec<CaseSpec>,
    pub include_copy_update: bool,
    pub include_persistence: bool,
}

impl UnionSpec {
    #[must_use]
    pub fn new(ident: impl Into<String>, linkage: BaseLinkage) -> Self {
        Self {
            ident: ident.into(),
            host_kind: HostKind::Interface,
            linkage,
            cases: Vec::new(),
            include_copy_update: true,
            include_persistence: true,
        }
    }

    #[must_use]
    pub fn case(mut self, case: CaseSpec) -> Self {
        self.cases.push(case);
        self
    }

    /// Union-level shape checks; per-case checks run during assembly.
    #[must_use]
    pub fn validate(&self) -> Diagnostics {
        let mut diags = Diagnostics::new();
        let ident = &self.ident;

        if self.host_kind != HostKind::Interface {
            diags.error(format!("union host '{ident}' must be an interface"), None);
        }

        if self.linkage == BaseLinkage::None {
            diags.error(
                format!("union '{ident}' requires an interface or abstract base linkage"),
                None,
            );
        }

        if self.cases.is_empty() {
            diags.error(format!("union '{ident}' declares no cases"), None);
        }

        diags
    }
}

///
/// TESTS
///
