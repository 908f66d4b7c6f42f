use crate::{
    derive::{member_bound, strategy_tokens},
    ident::{member_ident, split_generics, type_ident, type_tokens},
    prelude::*,
};

fn bounds(policy: &Policy, structural_trait: &TokenStream) -> Vec<TokenStream> {
    policy
        .eq_members()
        .filter_map(|mp| {
            member_bound(
                mp,
                &mp.eq_strategy,
                &quote!(::casekit::compare::EqStrategy),
                structural_trait,
            )
        })
        .collect()
}

/// Structural equality over the eq-participating members, each through its
/// resolved strategy. The first mismatch wins.
pub fn derive_eq(spec: &CaseSpec, policy: &Policy) -> TokenStream {
    let ident = type_ident(&spec.def.ident);

    let comparisons = policy.eq_members().map(|mp| {
        let field = member_ident(&mp.member);
        let ty = type_tokens(&mp.member.ty);
        let strat = strategy_tokens(&mp.eq_strategy);

        quote! {
            if !<#strat as ::casekit::compare::EqStrategy<#ty>>::eq(&self.#field, &other.#field) {
                return false;
            }
        }
    });

    let params = &spec.def.type_params;
    let (impl_g, ty_g, where_partial_eq) =
        split_generics(params, &bounds(policy, &quote!(::core::cmp::PartialEq)));
    let (_, _, where_eq) = split_generics(params, &bounds(policy, &quote!(::core::cmp::Eq)));

    quote! {
        impl #impl_g ::core::cmp::PartialEq for #ident #ty_g #where_partial_eq {
            fn eq(&self, other: &Self) -> bool {
                #(#comparisons)*
                true
            }
        }

        impl #impl_g ::core::cmp::Eq for #ident #ty_g #where_eq {}
    }
}
