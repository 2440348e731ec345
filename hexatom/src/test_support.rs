// hexatom/src/test_support.rs
//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize building gate cores so tests across the crate
//! and the tests/ directory can drive the call-frame adaptor the same way.

use malachite::Natural;

use crate::jet::Noun;
use crate::types::Atom;

/// Wrap `sample` in a gate core `[battery [sample context]]` with null
/// battery and context.
#[doc(hidden)]
pub fn gate_core(sample: Noun) -> Noun {
    Noun::cell(Noun::null(), Noun::cell(sample, Noun::null()))
}

/// Core for `encode_sample`: sample is `[len value]`.
#[doc(hidden)]
pub fn encode_core(len: Natural, value: Natural) -> Noun {
    gate_core(Noun::cell(Noun::Atom(len), Noun::Atom(value)))
}

/// Core for `decode_sample`: sample is `text` stored as an atom.
#[doc(hidden)]
pub fn decode_core(text: &str) -> Noun {
    gate_core(Noun::from(Atom::from_text(text)))
}
