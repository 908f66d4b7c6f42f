//! Core runtime for Casekit: the traits and support types that generated
//! case declarations compile against, and the ergonomics exported via the
//! `prelude`.

pub mod compare;
pub mod float;
pub mod hash;
pub mod lens;
pub mod persist;
pub mod value;

///
/// Prelude
///
/// Prelude contains only the vocabulary generated code and its callers need.
///

pub mod prelude {
    pub use crate::{
        compare::{EqStrategy, HashStrategy, OrdStrategy, Structural},
        float::{Float32, Float64},
        hash::ValueHash,
        lens::Lens,
        persist::{Carrier, Persist, PersistError},
        value::{FieldValue, FromValue, Value},
    };
}
