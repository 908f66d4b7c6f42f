//! Schema model for Casekit: the canonical member list of a host type, the
//! policy flags that control its derivations, and the diagnostics channel
//! validation failures are reported through.

pub mod case;
pub mod diagnostic;
pub mod host;
pub mod member;
pub mod policy;
pub mod reserved;
pub mod types;

/// Maximum length for case identifiers.
pub const MAX_CASE_NAME_LEN: usize = 64;

/// Maximum length for member identifiers.
pub const MAX_MEMBER_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        case::{BaseLinkage, CaseDef, CaseSpec, UnionSpec},
        diagnostic::{Diagnostic, Diagnostics, Severity, SourceLocation},
        host::{HostKind, HostType, MemberOrigin, RawMember, TypeParam, Visibility},
        member::{Member, extract},
        policy::{MemberPolicy, Policy, PolicyTag, Strategy, resolve},
        types::{Cardinality, Item, Primitive, TypeRef},
    };
    pub use serde::{Deserialize, Serialize};
}
