use crate::{
    case::synthesize,
    ident::{member_ident, snake_ident, type_ident, type_tokens},
    prelude::*,
};
use std::collections::HashSet;

/// Factory parameters and forwarding arguments for one case.
fn factory_signature(case: &CaseSpec) -> (Vec<TokenStream>, Vec<TokenStream>) {
    let params = case
        .members
        .iter()
        .map(|m| {
            let field = member_ident(m);
            let ty = type_tokens(&m.ty);
            quote!(#field: #ty)
        })
        .collect();

    let args = case
        .members
        .iter()
        .map(|m| {
            let field = member_ident(m);
            quote!(#field)
        })
        .collect();

    (params, args)
}

/// The closed-hierarchy surface: one enum variant per case, with true
/// pattern-matching dispatch for the cross-variant glue.
fn enum_glue(union: &UnionSpec, cases: &[CaseSpec]) -> TokenStream {
    let union_ident = type_ident(&union.ident);
    let case_idents: Vec<_> = cases.iter().map(|c| type_ident(&c.def.ident)).collect();

    let factories = cases.iter().map(|case| {
        let case_ident = type_ident(&case.def.ident);
        let factory = snake_ident(&case.def.ident);
        let (params, args) = factory_signature(case);

        quote! {
            #[must_use]
            pub fn #factory(#(#params),*) -> Self {
                Self::#case_ident(#case_ident::new(#(#args),*))
            }
        }
    });

    let froms = case_idents.iter().map(|case_ident| {
        quote! {
            impl ::core::convert::From<#case_ident> for #union_ident {
                fn from(case: #case_ident) -> Self {
                    Self::#case_ident(case)
                }
            }
        }
    });

    quote! {
        #[derive(Clone, Debug)]
        pub enum #union_ident {
            #(#case_idents(#case_idents),)*
        }

        impl #union_ident {
            /// Discriminant of the active case.
            #[must_use]
            pub const fn case_tag(&self) -> u32 {
                match self {
                    #(Self::#case_idents(_) => #case_idents::CASE_TAG,)*
                }
            }

            #(#factories)*
        }

        #(#froms)*

        impl ::core::cmp::PartialEq for #union_ident {
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    #((Self::#case_idents(a), Self::#case_idents(b)) => a == b,)*
                    _ => false,
                }
            }
        }

        impl ::core::cmp::Eq for #union_ident {}

        impl ::core::cmp::Ord for #union_ident {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                match (self, other) {
                    #((Self::#case_idents(a), Self::#case_idents(b)) => ::core::cmp::Ord::cmp(a, b),)*
                    _ => ::core::cmp::Ord::cmp(&self.case_tag(), &other.case_tag()),
                }
            }
        }

        impl ::core::cmp::PartialOrd for #union_ident {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::casekit::hash::ValueHash for #union_ident {
            fn value_hash(&self) -> u32 {
                match self {
                    #(Self::#case_idents(case) => ::casekit::hash::ValueHash::value_hash(case),)*
                }
            }
        }

        impl ::core::hash::Hash for #union_ident {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u32(::casekit::hash::ValueHash::value_hash(self));
            }
        }

        impl ::core::fmt::Display for #union_ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    #(Self::#case_idents(case) => ::core::fmt::Display::fmt(case, f),)*
                }
            }
        }
    }
}

/// The open surface: a case trait plus a companion module of factory
/// functions carrying the union's declared name. The per-case trait impls
/// and dynamic comparisons are emitted by the case synthesizer.
fn trait_glue(union: &UnionSpec, cases: &[CaseSpec]) -> TokenStream {
    let base = type_ident(&format!("{}Case", union.ident));
    let module = snake_ident(&union.ident);

    let factories = cases.iter().map(|case| {
        let case_ident = type_ident(&case.def.ident);
        let factory = snake_ident(&case.def.ident);
        let (params, args) = factory_signature(case);

        quote! {
            #[must_use]
            pub fn #factory(#(#params),*) -> super::#case_ident {
                super::#case_ident::new(#(#args),*)
            }
        }
    });

    quote! {
        pub trait #base: ::core::any::Any {
            /// Discriminant assigned by declaration order.
            fn case_tag(&self) -> u32;

            fn as_any(&self) -> &dyn ::core::any::Any;
        }

        pub mod #module {
            #(#factories)*
        }
    }
}

/// Assemble a union: tag every case in declaration order, synthesize each
/// one, and emit the shared surface plus the companion factories. Fails
/// atomically — if any case fails validation, the whole union reports every
/// collected diagnostic and emits nothing.
pub fn assemble(union: &UnionSpec) -> Result<TokenStream, Vec<Diagnostic>> {
    let mut diags = union.validate();

    let mut seen_idents: HashSet<&str> = HashSet::new();
    for case in &union.cases {
        if !seen_idents.insert(case.def.ident.as_str()) {
            diags.error(
                format!("duplicate case identifier '{}'", case.def.ident),
                None,
            );
        }

        if !case.def.type_params.is_empty() {
            diags.error(
                format!(
                    "union case '{}' cannot declare type parameters",
                    case.def.ident
                ),
                None,
            );
        }
    }

    let base_ident = match union.linkage {
        BaseLinkage::Interface => format!("{}Case", union.ident),
        BaseLinkage::AbstractBase | BaseLinkage::None => union.ident.clone(),
    };

    let mut tagged = Vec::with_capacity(union.cases.len());
    for (index, case) in union.cases.iter().enumerate() {
        let mut case = case.clone();
        case.tag = Some(u32::try_from(index).unwrap_or(u32::MAX));
        case.linkage = union.linkage;
        case.base_ident = Some(base_ident.clone());
        case.include_copy_update = union.include_copy_update;
        case.include_persistence = union.include_persistence;
        tagged.push(case);
    }

    let mut case_tokens = Vec::new();
    for case in &tagged {
        match synthesize(case) {
            Ok(tokens) => case_tokens.push(tokens),
            Err(errs) => {
                for err in errs {
                    diags.push(err);
                }
            }
        }
    }

    diags.check()?;

    let glue = match union.linkage {
        BaseLinkage::AbstractBase => enum_glue(union, &tagged),
        BaseLinkage::Interface => trait_glue(union, &tagged),
        BaseLinkage::None => TokenStream::new(),
    };

    Ok(quote! {
        #(#case_tokens)*
        #glue
    })
}

///
/// TESTS
///
