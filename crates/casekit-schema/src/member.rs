use crate::{
    MAX_MEMBER_NAME_LEN,
    diagnostic::{Diagnostic, Diagnostics, SourceLocation},
    host::{HostType, MemberOrigin, RawMember, Visibility},
    policy::PolicyTag,
    reserved::is_reserved_word,
    types::TypeRef,
};
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

///
/// Member
///
/// One validated, value-carrying member of a case. `name` is the original
/// declared spelling (used for display and persistence keys); `ident` is
/// the snake-cased field identifier of the generated declaration.
/// Declaration order is semantically significant and is preserved from the
/// host.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Member {
    pub name: String,
    pub ident: String,
    pub ty: TypeRef,
    pub tags: BTreeSet<PolicyTag>,
    pub eq_with: Option<String>,
    pub ord_with: Option<String>,
    pub hash_with: Option<String>,
    pub declaration_index: usize,
    pub location: Option<SourceLocation>,
}

/// Whether a raw member is a candidate for the member model at all.
/// Non-candidates are skipped silently; they are host plumbing, not errors.
fn is_candidate(raw: &RawMember) -> bool {
    let carries_value = match raw.origin {
        MemberOrigin::Field => true,
        MemberOrigin::Property { has_body } => !has_body,
    };

    carries_value && raw.visibility == Visibility::Public && !raw.is_static && !raw.opt_out
}

/// Build the canonical ordered member list for a host type.
///
/// Every validation failure is collected before the call fails; a single
/// collision aborts the whole case with no partial result.
pub fn extract(host: &HostType) -> Result<Vec<Member>, Vec<Diagnostic>> {
    let mut diags = Diagnostics::new();
    let mut members = Vec::new();
    let mut seen_idents: HashSet<String> = HashSet::new();

    for raw in &host.members {
        if !is_candidate(raw) {
            continue;
        }

        if raw.name.is_empty() {
            diags.error("member name is empty", raw.location.clone());
            continue;
        }

        // lowercase-first names mark internal plumbing, not public API
        if !raw.name.chars().next().is_some_and(char::is_uppercase) {
            continue;
        }

        if raw.name.len() > MAX_MEMBER_NAME_LEN {
            diags.error(
                format!(
                    "member name '{}' exceeds {MAX_MEMBER_NAME_LEN} characters",
                    raw.name
                ),
                raw.location.clone(),
            );
            continue;
        }

        let ident = raw.name.to_case(Case::Snake);

        if is_reserved_word(&ident) {
            diags.push(Diagnostic::error(
                format!(
                    "member '{}' collides with reserved word '{ident}'",
                    raw.name
                ),
                raw.location.clone(),
            ));
            continue;
        }

        if !seen_idents.insert(ident.clone()) {
            diags.error(
                format!("duplicate member name '{}'", raw.name),
                raw.location.clone(),
            );
            continue;
        }

        members.push(Member {
            name: raw.name.clone(),
            ident,
            ty: raw.ty.clone(),
            tags: raw.tags.clone(),
            eq_with: raw.eq_with.clone(),
            ord_with: raw.ord_with.clone(),
            hash_with: raw.hash_with.clone(),
            declaration_index: members.len(),
            location: raw.location.clone(),
        });
    }

    diags.check()?;

    Ok(members)
}

///
/// TESTS
///
