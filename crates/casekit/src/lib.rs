//! Casekit facade: one import surface over the schema model, the
//! derivation engine, and the runtime support generated declarations
//! compile against. Generated code references `::casekit::...` paths, so
//! callers link this crate next to the emitted declarations.

// runtime surface, re-exported at the paths generated code uses
pub use casekit_core::{compare, float, hash, lens, persist, value};

pub use casekit_gen::{assemble, synthesize};
pub use casekit_schema as schema;

///
/// Prelude
///

pub mod prelude {
    pub use casekit_core::prelude::*;
    pub use casekit_schema::prelude::*;
}
