use crate::member::Member;
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// PolicyTag
///
/// Member- or type-level flags controlling which derivations a member
/// participates in. `ExcludeFromAll` covers equality, ordering, hashing and
/// display; persistence is tracked separately because skip-persisted
/// members still round-trip as their default value on restore.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum PolicyTag {
    ExcludeFromAll,
    ExcludeFromDisplay,
    ExcludeFromEquality,
    ExcludeFromHashing,
    ExcludeFromOrdering,
    ExcludeFromPersistence,
}

///
/// Strategy
///
/// How a member compares or hashes: structurally (the type's own behavior,
/// through the generic default strategy) or through a named override type.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Strategy {
    Named(String),
    Structural,
}

impl Strategy {
    fn from_override(path: Option<&String>) -> Self {
        path.map_or(Self::Structural, |p| Self::Named(p.clone()))
    }
}

///
/// MemberPolicy
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MemberPolicy {
    pub member: Member,
    pub eq: bool,
    pub ord: bool,
    pub hash: bool,
    pub display: bool,
    pub persist: bool,
    pub eq_strategy: Strategy,
    pub ord_strategy: Strategy,
    pub hash_strategy: Strategy,
}

///
/// Policy
///
/// Per-derivation participation, resolved once per case. All iterators
/// yield members in declaration order.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Policy {
    pub members: Vec<MemberPolicy>,
}

impl Policy {
    pub fn eq_members(&self) -> impl Iterator<Item = &MemberPolicy> {
        self.members.iter().filter(|m| m.eq)
    }

    pub fn ord_members(&self) -> impl Iterator<Item = &MemberPolicy> {
        self.members.iter().filter(|m| m.ord)
    }

    pub fn hash_members(&self) -> impl Iterator<Item = &MemberPolicy> {
        self.members.iter().filter(|m| m.hash)
    }

    pub fn display_members(&self) -> impl Iterator<Item = &MemberPolicy> {
        self.members.iter().filter(|m| m.display)
    }

    pub fn persist_members(&self) -> impl Iterator<Item = &MemberPolicy> {
        self.members.iter().filter(|m| m.persist)
    }

    /// The complement of the persist set; restored as defaults.
    pub fn skip_persist_members(&self) -> impl Iterator<Item = &MemberPolicy> {
        self.members.iter().filter(|m| !m.persist)
    }
}

/// Resolve participation and strategies for every member. Total over any
/// member list; there are no error cases.
#[must_use]
pub fn resolve(members: &[Member], type_tags: &BTreeSet<PolicyTag>) -> Policy {
    let members = members
        .iter()
        .map(|member| {
            let has =
                |tag: PolicyTag| member.tags.contains(&tag) || type_tags.contains(&tag);
            let all = has(PolicyTag::ExcludeFromAll);

            MemberPolicy {
                eq: !all && !has(PolicyTag::ExcludeFromEquality),
                ord: !all && !has(PolicyTag::ExcludeFromOrdering),
                hash: !all && !has(PolicyTag::ExcludeFromHashing),
                display: !all && !has(PolicyTag::ExcludeFromDisplay),
                persist: !has(PolicyTag::ExcludeFromPersistence),
                eq_strategy: Strategy::from_override(member.eq_with.as_ref()),
                ord_strategy: Strategy::from_override(member.ord_with.as_ref()),
                hash_strategy: Strategy::from_override(member.hash_with.as_ref()),
                member: member.clone(),
            }
        })
        .collect();

    Policy { members }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        host::{HostKind, HostType, RawMember},
        member::extract,
        types::{Primitive, TypeRef},
    };

    fn members(host: HostType) -> Vec<Member> {
        extract(&host).unwrap()
    }

    #[test]
    fn untagged_members_participate_everywhere() {
        let ms = members(
            HostType::new("Person", HostKind::Class)
                .member(RawMember::field("Name", TypeRef::prim(Primitive::Text))),
        );
        let policy = resolve(&ms, &BTreeSet::new());
        let m = &policy.members[0];

        assert!(m.eq && m.ord && m.hash && m.display && m.persist);
        assert_eq!(m.eq_strategy, Strategy::Structural);
    }

    #[test]
    fn exclude_from_all_spares_persistence() {
        let ms = members(
            HostType::new("Person", HostKind::Class).member(
                RawMember::field("Audit", TypeRef::prim(Primitive::Text))
                    .with_tag(PolicyTag::ExcludeFromAll),
            ),
        );
        let policy = resolve(&ms, &BTreeSet::new());
        let m = &policy.members[0];

        assert!(!m.eq && !m.ord && !m.hash && !m.display);
        assert!(m.persist);
    }

    #[test]
    fn type_level_tags_apply_to_every_member() {
        let ms = members(
            HostType::new("Person", HostKind::Class)
                .member(RawMember::field("Name", TypeRef::prim(Primitive::Text)))
                .member(RawMember::field("Age", TypeRef::prim(Primitive::Int32))),
        );

        let type_tags = BTreeSet::from([PolicyTag::ExcludeFromDisplay]);
        let policy = resolve(&ms, &type_tags);

        assert_eq!(policy.display_members().count(), 0);
        assert_eq!(policy.eq_members().count(), 2);
    }

    #[test]
    fn skip_persist_is_the_complement() {
        let ms = members(
            HostType::new("Person", HostKind::Class)
                .member(RawMember::field("Name", TypeRef::prim(Primitive::Text)))
                .member(
                    RawMember::field("Secret", TypeRef::prim(Primitive::Text))
                        .with_tag(PolicyTag::ExcludeFromPersistence),
                ),
        );
        let policy = resolve(&ms, &BTreeSet::new());

        let persisted: Vec<_> = policy.persist_members().map(|m| m.member.name.clone()).collect();
        let skipped: Vec<_> = policy
            .skip_persist_members()
            .map(|m| m.member.name.clone())
            .collect();

        assert_eq!(persisted, ["Name"]);
        assert_eq!(skipped, ["Secret"]);
    }

    #[test]
    fn overrides_resolve_to_named_strategies() {
        let ms = members(
            HostType::new("Person", HostKind::Class).member(
                RawMember::field("Name", TypeRef::prim(Primitive::Text))
                    .with_eq_strategy("CaseInsensitive"),
            ),
        );
        let policy = resolve(&ms, &BTreeSet::new());
        let m = &policy.members[0];

        assert_eq!(m.eq_strategy, Strategy::Named("CaseInsensitive".into()));
        assert_eq!(m.ord_strategy, Strategy::Structural);
    }
}
