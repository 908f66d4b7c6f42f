//! Derivation engine for Casekit: lowers validated case and union specs
//! into generated Rust declarations. Each entry point is a pure transform;
//! a case either fully succeeds or is fully discarded.

mod prelude;

pub mod case;
pub mod derive;
pub mod ident;
pub mod union;

pub use case::synthesize;
pub use union::assemble;
