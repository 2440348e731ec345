// hexatom/src/lib.rs

//! hexatom
//!
//! Base-16 codec over arbitrary-precision unsigned integers held as
//! little-endian bytes, plus the adaptor that runs it from a gate core.
#![warn(missing_docs)]

pub mod codec;
pub mod constants;
pub mod error;
pub mod jet;
pub mod prelude;
pub mod test_support;
pub mod types;
pub mod value;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types are available for consumers and for convenient
// `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
