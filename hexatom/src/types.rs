// hexatom/src/types.rs

//! Owned value types.

use malachite::Natural;
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::PowerOf2Digits;

use crate::codec::encode;
use crate::value::ByteSource;
use crate::Result;

/// Atom - an unsigned integer of any size as little-endian bytes.
///
/// Always normalized: the last byte, if any, is non-zero, so the value zero
/// is the empty vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atom(Vec<u8>);

impl Atom {
    /// The value zero.
    pub fn zero() -> Self {
        Self(Vec::new())
    }

    /// Build from little-endian bytes, dropping high zero bytes.
    pub fn from_le_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let mut bytes = bytes.into();
        let len = bytes.as_slice().byte_len();
        bytes.truncate(len);
        Self(bytes)
    }

    /// Text stored as an atom: byte 0 is the first character.
    pub fn from_text(text: &str) -> Self {
        Self::from_le_bytes(text.as_bytes())
    }

    /// Significant bytes, low byte first.
    pub fn as_le_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the significant bytes, low byte first.
    pub fn into_le_bytes(self) -> Vec<u8> {
        self.0
    }

    /// True for the value zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Same value as a `Natural`.
    pub fn to_natural(&self) -> Natural {
        <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_asc(8, self.0.iter().copied())
            .unwrap_or(Natural::ZERO)
    }
}

impl ByteSource for Atom {
    fn byte_len(&self) -> usize {
        self.0.len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.0.get(index).copied().unwrap_or(0)
    }
}

impl From<&Natural> for Atom {
    fn from(n: &Natural) -> Self {
        Self(PowerOf2Digits::<u8>::to_power_of_2_digits_asc(n, 8))
    }
}

impl From<Natural> for Atom {
    fn from(n: Natural) -> Self {
        Self::from(&n)
    }
}

impl From<Atom> for Natural {
    fn from(atom: Atom) -> Self {
        atom.to_natural()
    }
}

impl From<u64> for Atom {
    fn from(v: u64) -> Self {
        Self::from_le_bytes(v.to_le_bytes())
    }
}

impl From<Decoded> for Atom {
    fn from(d: Decoded) -> Self {
        Self::from_le_bytes(d.into_le_bytes())
    }
}

/// Successful decode output: exactly `len()` bytes, index 0 least
/// significant.
///
/// Unlike `Atom`, high zero bytes are kept: `"007f"` decodes to two bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoded(Vec<u8>);

impl Decoded {
    pub(crate) fn from_le_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Byte length, as inferred from the digit count.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the text had no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All decoded bytes, low byte first.
    pub fn as_le_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the decoded bytes, low byte first.
    pub fn into_le_bytes(self) -> Vec<u8> {
        self.0
    }

    /// `(byte length, bytes)`.
    pub fn into_parts(self) -> (usize, Vec<u8>) {
        (self.0.len(), self.0)
    }

    /// The decoded value without its high zero bytes.
    pub fn to_atom(&self) -> Atom {
        Atom::from_le_bytes(self.0.as_slice())
    }

    /// The decoded value as a `Natural`.
    pub fn to_natural(&self) -> Natural {
        self.to_atom().to_natural()
    }

    /// Re-encode at the decoded length, which restores leading zero digits
    /// (the digits themselves come back lowercase).
    pub fn to_hex(&self) -> Result<String> {
        encode(self.len(), self)
    }
}

impl ByteSource for Decoded {
    fn byte_len(&self) -> usize {
        self.0.as_slice().byte_len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.0.get(index).copied().unwrap_or(0)
    }
}
