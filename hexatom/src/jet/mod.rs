// hexatom/src/jet/mod.rs
//! Call-frame adaptor: pulls typed arguments out of a gate core, runs the
//! codec, and packs the result back into a noun. No validation of its own.

pub mod base16;
pub mod noun;

pub use base16::{decode_atom, decode_sample, encode_atoms, encode_sample};
pub use noun::{Noun, atom_at, noun_at};
