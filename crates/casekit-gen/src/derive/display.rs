use crate::{
    ident::{member_ident, split_generics, type_ident},
    prelude::*,
};

fn bounds(policy: &Policy) -> Vec<TokenStream> {
    policy
        .display_members()
        .filter_map(|mp| {
            let param = mp.member.ty.referenced_param()?;
            let param = type_ident(param);
            Some(quote!(#param: ::core::fmt::Display))
        })
        .collect()
}

fn member_segment(mp: &MemberPolicy) -> TokenStream {
    let field = member_ident(&mp.member);
    let name = &mp.member.name;

    match mp.member.ty.cardinality {
        Cardinality::One => quote! {
            ::core::write!(f, "{}: {}", #name, self.#field)?;
        },
        Cardinality::Opt => quote! {
            match &self.#field {
                ::core::option::Option::Some(value) => {
                    ::core::write!(f, "{}: {}", #name, value)?;
                }
                ::core::option::Option::None => {
                    ::core::write!(f, "{}: [null]", #name)?;
                }
            }
        },
        Cardinality::Many => quote! {
            ::core::write!(f, "{}: [", #name)?;
            for (i, item) in self.#field.iter().enumerate() {
                if i > 0 {
                    ::core::write!(f, ", ")?;
                }
                ::core::write!(f, "{}", item)?;
            }
            ::core::write!(f, "]")?;
        },
    }
}

/// Human-readable rendering: the bare type name when nothing participates,
/// otherwise `TypeName(Name: value, ...)` over the display-participating
/// members in declaration order, with absent values rendered as `[null]`.
pub fn derive_display(spec: &CaseSpec, policy: &Policy) -> TokenStream {
    let ident = type_ident(&spec.def.ident);
    let type_name = &spec.def.ident;

    let display_members: Vec<&MemberPolicy> = policy.display_members().collect();

    let body = if display_members.is_empty() {
        quote! {
            f.write_str(#type_name)
        }
    } else {
        let mut segments = Vec::new();
        for (index, mp) in display_members.iter().enumerate() {
            if index > 0 {
                segments.push(quote! {
                    ::core::write!(f, ", ")?;
                });
            }
            segments.push(member_segment(mp));
        }

        quote! {
            ::core::write!(f, "{}(", #type_name)?;
            #(#segments)*
            ::core::write!(f, ")")
        }
    };

    let (impl_g, ty_g, where_clause) = split_generics(&spec.def.type_params, &bounds(policy));

    quote! {
        impl #impl_g ::core::fmt::Display for #ident #ty_g #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #body
            }
        }
    }
}
