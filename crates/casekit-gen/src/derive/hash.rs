use crate::{
    derive::{member_bound, strategy_tokens},
    ident::{member_ident, split_generics, type_ident, type_tokens},
    prelude::*,
};

fn bounds(policy: &Policy) -> Vec<TokenStream> {
    policy
        .hash_members()
        .filter_map(|mp| {
            member_bound(
                mp,
                &mp.hash_strategy,
                &quote!(::casekit::compare::HashStrategy),
                &quote!(::casekit::hash::ValueHash),
            )
        })
        .collect()
}

/// 32-bit FNV-1a combine over the hash-participating members in declaration
/// order. A case with no participating members hashes to the constant 0.
/// The `std::hash::Hash` bridge writes the same 32-bit result so standard
/// collections agree with the value hash.
pub fn derive_hash(spec: &CaseSpec, policy: &Policy) -> TokenStream {
    let ident = type_ident(&spec.def.ident);

    let steps: Vec<TokenStream> = policy
        .hash_members()
        .map(|mp| {
            let field = member_ident(&mp.member);
            let ty = type_tokens(&mp.member.ty);
            let strat = strategy_tokens(&mp.hash_strategy);

            quote! {
                state = ::casekit::hash::fnv1a_step(
                    state,
                    <#strat as ::casekit::compare::HashStrategy<#ty>>::hash(&self.#field),
                );
            }
        })
        .collect();

    let body = if steps.is_empty() {
        quote!(0)
    } else {
        quote! {
            let mut state = ::casekit::hash::FNV_OFFSET_BASIS;
            #(#steps)*
            state
        }
    };

    let (impl_g, ty_g, where_clause) = split_generics(&spec.def.type_params, &bounds(policy));

    quote! {
        impl #impl_g ::casekit::hash::ValueHash for #ident #ty_g #where_clause {
            fn value_hash(&self) -> u32 {
                #body
            }
        }

        impl #impl_g ::core::hash::Hash for #ident #ty_g #where_clause {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u32(::casekit::hash::ValueHash::value_hash(self));
            }
        }
    }
}
