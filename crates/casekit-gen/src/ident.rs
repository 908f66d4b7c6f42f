use crate::prelude::*;
use convert_case::{Case, Casing};
use syn::Ident;

///
/// Identifier lowering
///

/// Field identifier for a member (already snake-cased by extraction).
pub fn member_ident(member: &Member) -> Ident {
    format_ident!("{}", member.ident)
}

/// Type identifier for a case or union.
pub fn type_ident(name: &str) -> Ident {
    format_ident!("{name}")
}

/// Snake-cased identifier for factory functions and companion modules.
pub fn snake_ident(name: &str) -> Ident {
    format_ident!("{}", name.to_case(Case::Snake))
}

/// The copy-update patch type for a case.
pub fn patch_ident(name: &str) -> Ident {
    format_ident!("{name}Patch")
}

/// The lens accessor for a member.
pub fn lens_ident(member: &Member) -> Ident {
    format_ident!("{}_lens", member.ident)
}

///
/// Path and type lowering
///

/// Lower a caller-supplied path string. Paths are validated up front by the
/// synthesizer; an unparsable one that slips through surfaces as a compile
/// error in the emitted code rather than a panic here.
pub fn path_tokens(path: &str) -> TokenStream {
    syn::parse_str::<syn::Path>(path).map_or_else(
        |_| {
            let msg = format!("invalid type path '{path}'");
            quote!(::core::compile_error!(#msg))
        },
        |parsed| quote!(#parsed),
    )
}

fn item_tokens(item: &Item) -> TokenStream {
    match item {
        Item::Named(path) => path_tokens(path),
        Item::Param(ident) => {
            let ident = type_ident(ident);
            quote!(#ident)
        }
        Item::Prim(prim) => match prim {
            Primitive::Bool => quote!(bool),
            Primitive::Float32 => quote!(::casekit::float::Float32),
            Primitive::Float64 => quote!(::casekit::float::Float64),
            Primitive::Int32 => quote!(i32),
            Primitive::Int64 => quote!(i64),
            Primitive::Nat32 => quote!(u32),
            Primitive::Nat64 => quote!(u64),
            Primitive::Text => quote!(::std::string::String),
            Primitive::Unit => quote!(()),
        },
    }
}

/// Lower a member type reference to Rust type tokens.
pub fn type_tokens(ty: &TypeRef) -> TokenStream {
    let item = item_tokens(&ty.item);

    match ty.cardinality {
        Cardinality::One => item,
        Cardinality::Opt => quote!(::core::option::Option<#item>),
        Cardinality::Many => quote!(::std::vec::Vec<#item>),
    }
}

///
/// Generics
///

fn bound_tokens(bound: &str) -> TokenStream {
    syn::parse_str::<syn::TypeParamBound>(bound).map_or_else(
        |_| {
            let msg = format!("invalid bound '{bound}'");
            quote!(::core::compile_error!(#msg))
        },
        |parsed| quote!(#parsed),
    )
}

/// Split a case's type parameters into declaration tokens (`<T: Bound>`),
/// usage tokens (`<T>`), and a where clause carrying derivation-required
/// bounds.
pub fn split_generics(
    params: &[TypeParam],
    extra_bounds: &[TokenStream],
) -> (TokenStream, TokenStream, TokenStream) {
    let decl = if params.is_empty() {
        quote!()
    } else {
        let decls = params.iter().map(|p| {
            let ident = type_ident(&p.ident);
            if p.bounds.is_empty() {
                quote!(#ident)
            } else {
                let bounds = p.bounds.iter().map(|b| bound_tokens(b));
                quote!(#ident: #(#bounds)+*)
            }
        });
        quote!(<#(#decls),*>)
    };

    let usage = if params.is_empty() {
        quote!()
    } else {
        let idents = params.iter().map(|p| type_ident(&p.ident));
        quote!(<#(#idents),*>)
    };

    let where_clause = if extra_bounds.is_empty() {
        quote!()
    } else {
        quote!(where #(#extra_bounds),*)
    };

    (decl, usage, where_clause)
}

///
/// TESTS
///
