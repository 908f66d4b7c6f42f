use crate::{
    derive::{
        display::derive_display, eq::derive_eq, hash::derive_hash, ord::derive_ord,
        persist::derive_persist, with::derive_with,
    },
    ident::{member_ident, split_generics, type_ident, type_tokens},
    prelude::*,
};

/// Caller-supplied paths (named member types, strategy overrides) must
/// parse before anything is emitted.
fn check_paths(spec: &CaseSpec) -> Diagnostics {
    let mut diags = Diagnostics::new();

    for member in &spec.members {
        if let Item::Named(path) = &member.ty.item
            && syn::parse_str::<syn::Path>(path).is_err()
        {
            diags.error(
                format!(
                    "member '{}' has an unparsable type path '{path}'",
                    member.name
                ),
                member.location.clone(),
            );
        }

        let overrides = [
            ("equality", &member.eq_with),
            ("ordering", &member.ord_with),
            ("hashing", &member.hash_with),
        ];

        for (label, value) in overrides {
            if let Some(path) = value
                && syn::parse_str::<syn::Path>(path).is_err()
            {
                diags.error(
                    format!(
                        "member '{}' names an unparsable {label} strategy '{path}'",
                        member.name
                    ),
                    member.location.clone(),
                );
            }
        }
    }

    diags
}

fn struct_tokens(spec: &CaseSpec) -> TokenStream {
    let ident = type_ident(&spec.def.ident);
    let (decl_g, _, _) = split_generics(&spec.def.type_params, &[]);

    let fields = spec.members.iter().map(|member| {
        let field = member_ident(member);
        let ty = type_tokens(&member.ty);
        quote!(pub #field: #ty)
    });

    // value-shaped hosts stay `Copy` when every member allows it
    let copyable = spec.host_kind == HostKind::Struct
        && spec.def.type_params.is_empty()
        && spec.members.iter().all(|m| m.ty.supports_copy());

    let derives = if copyable {
        quote!(#[derive(Clone, Copy, Debug)])
    } else {
        quote!(#[derive(Clone, Debug)])
    };

    quote! {
        #derives
        pub struct #ident #decl_g {
            #(#fields,)*
        }
    }
}

fn inherent_tokens(spec: &CaseSpec) -> TokenStream {
    let ident = type_ident(&spec.def.ident);
    let (impl_g, ty_g, _) = split_generics(&spec.def.type_params, &[]);

    let fields: Vec<_> = spec.members.iter().map(member_ident).collect();
    let types: Vec<_> = spec.members.iter().map(|m| type_tokens(&m.ty)).collect();

    quote! {
        impl #impl_g #ident #ty_g {
            /// Positional constructor; also the static factory.
            #[must_use]
            pub fn new(#(#fields: #types),*) -> Self {
                Self { #(#fields),* }
            }

            /// Deconstruct into all members by position.
            #[must_use]
            pub fn into_parts(self) -> (#(#types),*) {
                (#(self.#fields),*)
            }
        }
    }
}

fn union_hook_tokens(spec: &CaseSpec) -> TokenStream {
    let Some(tag) = spec.tag else {
        return TokenStream::new();
    };

    let ident = type_ident(&spec.def.ident);

    let tag_hooks = quote! {
        impl #ident {
            /// Discriminant assigned by declaration order within the union.
            pub const CASE_TAG: u32 = #tag;

            #[must_use]
            pub const fn case_tag(&self) -> u32 {
                Self::CASE_TAG
            }
        }
    };

    let interface_hooks = match (&spec.linkage, &spec.base_ident) {
        (BaseLinkage::Interface, Some(base)) => {
            let base = type_ident(base);

            quote! {
                impl #base for #ident {
                    fn case_tag(&self) -> u32 {
                        Self::CASE_TAG
                    }

                    fn as_any(&self) -> &dyn ::core::any::Any {
                        self
                    }
                }

                impl #ident {
                    /// Equality against any case behind the shared surface:
                    /// false unless the other case down-casts to this one.
                    #[must_use]
                    pub fn eq_case(&self, other: ::core::option::Option<&dyn #base>) -> bool {
                        other
                            .and_then(|case| case.as_any().downcast_ref::<Self>())
                            .is_some_and(|case| self == case)
                    }

                    /// Ordering against any case behind the shared surface.
                    /// An absent case ranks before any present one; cases of
                    /// different variants order by discriminant tag.
                    #[must_use]
                    pub fn cmp_case(&self, other: ::core::option::Option<&dyn #base>) -> ::core::cmp::Ordering {
                        match other {
                            ::core::option::Option::None => ::core::cmp::Ordering::Greater,
                            ::core::option::Option::Some(case) => {
                                match case.as_any().downcast_ref::<Self>() {
                                    ::core::option::Option::Some(case) => {
                                        ::core::cmp::Ord::cmp(self, case)
                                    }
                                    ::core::option::Option::None => {
                                        ::core::cmp::Ord::cmp(&Self::CASE_TAG, &case.case_tag())
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        _ => TokenStream::new(),
    };

    quote! {
        #tag_hooks
        #interface_hooks
    }
}

/// Synthesize one concrete case: the struct, constructor/deconstructor,
/// the five derivations filtered through the resolved policy, and the
/// union hooks when the case is an arm of a union. Fails atomically with
/// every collected diagnostic; nothing is emitted for an invalid case.
pub fn synthesize(spec: &CaseSpec) -> Result<TokenStream, Vec<Diagnostic>> {
    let mut diags = spec.validate();
    diags.merge(check_paths(spec));
    diags.check()?;

    let policy = resolve(&spec.members, &spec.type_tags);

    let strukt = struct_tokens(spec);
    let inherent = inherent_tokens(spec);
    let hooks = union_hook_tokens(spec);
    let eq = derive_eq(spec, &policy);
    let ord = derive_ord(spec, &policy);
    let hash = derive_hash(spec, &policy);
    let display = derive_display(spec, &policy);

    let with = if spec.include_copy_update {
        derive_with(spec, &policy)
    } else {
        TokenStream::new()
    };

    let persist = if spec.include_persistence {
        derive_persist(spec, &policy)
    } else {
        TokenStream::new()
    };

    Ok(quote! {
        #strukt
        #inherent
        #hooks
        #eq
        #ord
        #hash
        #display
        #with
        #persist
    })
}

///
/// TESTS
///
