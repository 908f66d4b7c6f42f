use crate::{
    ident::{member_ident, split_generics, type_ident},
    prelude::*,
};

fn bounds(policy: &Policy) -> Vec<TokenStream> {
    policy
        .members
        .iter()
        .filter_map(|mp| {
            let param = mp.member.ty.referenced_param()?;
            let param = type_ident(param);

            Some(if mp.persist {
                quote!(#param: ::casekit::value::FieldValue + ::casekit::value::FromValue)
            } else {
                quote!(#param: ::core::default::Default)
            })
        })
        .collect()
}

/// Persistence hooks: each persist-participating member is written to and
/// read from the carrier by its original name; skip-persisted members are
/// restored to their default value.
pub fn derive_persist(spec: &CaseSpec, policy: &Policy) -> TokenStream {
    let ident = type_ident(&spec.def.ident);

    let stores = policy.persist_members().map(|mp| {
        let field = member_ident(&mp.member);
        let name = &mp.member.name;

        quote! {
            carrier.put(#name, ::casekit::value::FieldValue::to_value(&self.#field));
        }
    });

    let restores = policy.members.iter().map(|mp| {
        let field = member_ident(&mp.member);
        let name = &mp.member.name;

        if mp.persist {
            quote! {
                #field: carrier.take_as(#name)?,
            }
        } else {
            quote! {
                #field: ::core::default::Default::default(),
            }
        }
    });

    let (impl_g, ty_g, where_clause) = split_generics(&spec.def.type_params, &bounds(policy));

    quote! {
        impl #impl_g ::casekit::persist::Persist for #ident #ty_g #where_clause {
            fn store(&self, carrier: &mut ::casekit::persist::Carrier) {
                #(#stores)*
            }

            fn restore(
                carrier: &::casekit::persist::Carrier,
            ) -> ::core::result::Result<Self, ::casekit::persist::PersistError> {
                ::core::result::Result::Ok(Self {
                    #(#restores)*
                })
            }
        }
    }
}
