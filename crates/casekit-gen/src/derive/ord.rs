use crate::{
    derive::{member_bound, strategy_tokens},
    ident::{member_ident, split_generics, type_ident, type_tokens},
    prelude::*,
};

fn bounds(policy: &Policy) -> Vec<TokenStream> {
    policy
        .ord_members()
        .filter_map(|mp| {
            member_bound(
                mp,
                &mp.ord_strategy,
                &quote!(::casekit::compare::OrdStrategy),
                &quote!(::core::cmp::Ord),
            )
        })
        .collect()
}

/// Total ordering: fold the ord-participating members in declaration order
/// and return the first non-equal result. `Option` members carry the null
/// convention — a present value ranks after an absent one.
pub fn derive_ord(spec: &CaseSpec, policy: &Policy) -> TokenStream {
    let ident = type_ident(&spec.def.ident);

    let folds = policy.ord_members().map(|mp| {
        let field = member_ident(&mp.member);
        let ty = type_tokens(&mp.member.ty);
        let strat = strategy_tokens(&mp.ord_strategy);

        quote! {
            match <#strat as ::casekit::compare::OrdStrategy<#ty>>::cmp(&self.#field, &other.#field) {
                ::core::cmp::Ordering::Equal => {}
                ord => return ord,
            }
        }
    });

    let (impl_g, ty_g, where_clause) = split_generics(&spec.def.type_params, &bounds(policy));

    quote! {
        impl #impl_g ::core::cmp::Ord for #ident #ty_g #where_clause {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                #(#folds)*
                ::core::cmp::Ordering::Equal
            }
        }

        impl #impl_g ::core::cmp::PartialOrd for #ident #ty_g #where_clause {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }
    }
}
