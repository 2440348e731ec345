// hexatom/src/jet/noun.rs

//! Call-frame nouns and tree addressing.

use malachite::Natural;
use malachite::base::num::basic::traits::Zero;

use crate::types::Atom;
use crate::{Error, Result};

/// A call frame value: an atom or a pair of nouns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Noun {
    /// An unsigned integer.
    Atom(Natural),
    /// A pair of nouns.
    Cell(Box<Noun>, Box<Noun>),
}

impl Noun {
    /// The null atom `~`.
    pub fn null() -> Self {
        Noun::Atom(Natural::ZERO)
    }

    /// Pair `head` and `tail`.
    pub fn cell(head: Noun, tail: Noun) -> Self {
        Noun::Cell(Box::new(head), Box::new(tail))
    }

    /// The atom, or `None` for a cell.
    pub fn as_atom(&self) -> Option<&Natural> {
        match self {
            Noun::Atom(n) => Some(n),
            Noun::Cell(..) => None,
        }
    }

    /// True for the atom 0.
    pub fn is_null(&self) -> bool {
        matches!(self, Noun::Atom(n) if *n == Natural::ZERO)
    }

    /// Tree addressing: 1 is the whole noun, 2 the head, 3 the tail, and
    /// `2n` / `2n + 1` the head / tail of axis `n`. Axis 0 is invalid.
    pub fn at(&self, axis: u64) -> Option<&Noun> {
        if axis == 0 {
            return None;
        }
        let mut noun = self;
        for shift in (0..axis.ilog2()).rev() {
            let Noun::Cell(head, tail) = noun else {
                return None;
            };
            noun = if (axis >> shift) & 1 == 0 { head } else { tail };
        }
        Some(noun)
    }
}

impl From<Natural> for Noun {
    fn from(n: Natural) -> Self {
        Noun::Atom(n)
    }
}

impl From<u64> for Noun {
    fn from(v: u64) -> Self {
        Noun::Atom(Natural::from(v))
    }
}

impl From<Atom> for Noun {
    fn from(atom: Atom) -> Self {
        Noun::Atom(atom.to_natural())
    }
}

/// Fetch the noun at `axis`.
pub fn noun_at(noun: &Noun, axis: u64) -> Result<&Noun> {
    noun.at(axis).ok_or(Error::MissingAxis { axis })
}

/// Fetch the atom at `axis`; a cell there is an error.
pub fn atom_at(noun: &Noun, axis: u64) -> Result<&Natural> {
    noun_at(noun, axis)?
        .as_atom()
        .ok_or(Error::ExpectedAtom { axis })
}
