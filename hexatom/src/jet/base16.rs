// hexatom/src/jet/base16.rs

//! Codec entry points taking and returning nouns.

use log::debug;
use malachite::Natural;

use super::noun::{Noun, atom_at};
use crate::codec::{decode_value, encode};
use crate::constants::{AXIS_SAMPLE, AXIS_SAMPLE_HEAD, AXIS_SAMPLE_TAIL};
use crate::types::Atom;
use crate::{Error, Result};

/// Encode with both arguments as atoms. The text comes back as an atom
/// whose byte 0 is the first digit.
pub fn encode_atoms(len: &Natural, value: &Natural) -> Result<Natural> {
    let len = usize::try_from(len).map_err(|_| {
        debug!("base16 encode: length {} is not a native word", len);
        Error::LengthNotNative
    })?;
    let text = encode(len, value)?;
    Ok(Atom::from_text(&text).to_natural())
}

/// Decode text held in an atom. Returns `(byte length, data)`.
pub fn decode_atom(text: &Natural) -> Option<(usize, Natural)> {
    let text = Atom::from(text);
    decode_value(&text).map(|d| (d.len(), d.to_natural()))
}

/// Run `encode` against a gate core whose sample is `[len value]`.
pub fn encode_sample(core: &Noun) -> Result<Noun> {
    let len = atom_at(core, AXIS_SAMPLE_HEAD)?;
    let value = atom_at(core, AXIS_SAMPLE_TAIL)?;
    encode_atoms(len, value).map(Noun::Atom)
}

/// Run `decode` against a gate core whose sample is the text atom.
///
/// Invalid text yields `~`; success yields `[~ len data]`.
pub fn decode_sample(core: &Noun) -> Result<Noun> {
    let text = atom_at(core, AXIS_SAMPLE)?;
    Ok(match decode_atom(text) {
        Some((len, data)) => Noun::cell(
            Noun::null(),
            Noun::cell(Noun::from(len as u64), Noun::Atom(data)),
        ),
        None => Noun::null(),
    })
}
