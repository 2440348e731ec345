// hexatom/src/prelude.rs
//! Common imports.

pub use crate::codec::{block_metric, classify, decode, decode_value, encode, encode_significant};
pub use crate::codec::Nibble;
pub use crate::jet::Noun;
pub use crate::value::ByteSource;
pub use crate::{Atom, Decoded, Error, Result};
