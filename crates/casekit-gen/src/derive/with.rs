use crate::{
    ident::{lens_ident, member_ident, patch_ident, split_generics, type_ident, type_tokens},
    prelude::*,
};

fn clone_bounds(policy: &Policy) -> Vec<TokenStream> {
    policy
        .members
        .iter()
        .filter_map(|mp| {
            let param = mp.member.ty.referenced_param()?;
            let param = type_ident(param);
            Some(quote!(#param: ::core::clone::Clone))
        })
        .collect()
}

/// Copy-update and lenses. The patch type carries every member (policy
/// never narrows it), each `Option`-wrapped and defaulting to "no change";
/// `with` builds a new value, replacing set fields and moving unset ones.
/// Each member's lens defines its setter through `with`.
pub fn derive_with(spec: &CaseSpec, policy: &Policy) -> TokenStream {
    let ident = type_ident(&spec.def.ident);
    let patch = patch_ident(&spec.def.ident);
    let params = &spec.def.type_params;

    let fields: Vec<_> = policy.members.iter().map(|mp| member_ident(&mp.member)).collect();
    let types: Vec<_> = policy.members.iter().map(|mp| type_tokens(&mp.member.ty)).collect();

    let (impl_g, ty_g, _) = split_generics(params, &[]);
    let (_, _, where_clone) = split_generics(params, &clone_bounds(policy));

    let setters = policy.members.iter().map(|mp| {
        let field = member_ident(&mp.member);
        let ty = type_tokens(&mp.member.ty);

        quote! {
            #[must_use]
            pub fn #field(mut self, value: #ty) -> Self {
                self.#field = ::core::option::Option::Some(value);
                self
            }
        }
    });

    let lenses = policy.members.iter().map(|mp| {
        let field = member_ident(&mp.member);
        let lens = lens_ident(&mp.member);
        let ty = type_tokens(&mp.member.ty);

        quote! {
            #[must_use]
            pub fn #lens() -> ::casekit::lens::Lens<Self, #ty> {
                ::casekit::lens::Lens::new(
                    |whole: &Self| whole.#field.clone(),
                    |value, whole: Self| whole.with(#patch {
                        #field: ::core::option::Option::Some(value),
                        ..::core::default::Default::default()
                    }),
                )
            }
        }
    });

    quote! {
        #[derive(Clone, Debug)]
        pub struct #patch #impl_g {
            #(pub #fields: ::core::option::Option<#types>,)*
        }

        impl #impl_g ::core::default::Default for #patch #ty_g {
            fn default() -> Self {
                Self {
                    #(#fields: ::core::option::Option::None,)*
                }
            }
        }

        impl #impl_g #patch #ty_g {
            #(#setters)*
        }

        impl #impl_g #ident #ty_g {
            /// Build a new value, replacing the fields the patch sets and
            /// copying the rest.
            #[must_use]
            pub fn with(self, patch: #patch #ty_g) -> Self {
                Self {
                    #(#fields: patch.#fields.unwrap_or(self.#fields),)*
                }
            }
        }

        impl #impl_g #ident #ty_g #where_clone {
            #(#lenses)*
        }
    }
}
