//! The five derivation algorithms. Each is a pure function from a case
//! spec and its resolved policy to a generated implementation; member
//! iteration is declaration order throughout.

pub mod display;
pub mod eq;
pub mod hash;
pub mod ord;
pub mod persist;
pub mod with;

use crate::{
    ident::{path_tokens, type_ident, type_tokens},
    prelude::*,
};

/// Tokens for a member's resolved comparison strategy.
pub(crate) fn strategy_tokens(strategy: &Strategy) -> TokenStream {
    match strategy {
        Strategy::Structural => quote!(::casekit::compare::Structural),
        Strategy::Named(path) => path_tokens(path),
    }
}

/// The where-clause bound one participating member contributes, if any.
/// Bounds are only needed when the member's type involves a host type
/// parameter; on concrete types the strategy call checks itself.
pub(crate) fn member_bound(
    mp: &MemberPolicy,
    strategy: &Strategy,
    strategy_trait: &TokenStream,
    structural_trait: &TokenStream,
) -> Option<TokenStream> {
    let param = mp.member.ty.referenced_param()?;
    let param = type_ident(param);

    Some(match strategy {
        Strategy::Structural => quote!(#param: #structural_trait),
        Strategy::Named(path) => {
            let strat = path_tokens(path);
            let ty = type_tokens(&mp.member.ty);
            quote!(#strat: #strategy_trait<#ty>)
        }
    })
}
