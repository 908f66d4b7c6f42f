pub(crate) use casekit_schema::prelude::*;
pub(crate) use proc_macro2::TokenStream;
pub(crate) use quote::{format_ident, quote};
