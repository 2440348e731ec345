// hexatom/src/codec/mod.rs
//! Base-16 encode and decode with their digit and sizing helpers.

pub mod decode;
pub mod digit;
pub mod encode;
pub mod metric;

pub use decode::{decode, decode_value};
pub use digit::{Nibble, classify};
pub use encode::{encode, encode_significant};
pub use metric::block_metric;
