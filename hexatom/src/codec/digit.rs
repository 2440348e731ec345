// hexatom/src/codec/digit.rs

//! Hex digit classification.

use derive_more::{Display, Into};

use crate::constants::HEX_ALPHABET;

/// A 4-bit value, one hexadecimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Into)]
#[display(fmt = "{:x}", _0)]
pub struct Nibble(u8);

impl Nibble {
    /// Keep the low four bits of `value`.
    pub const fn new(value: u8) -> Self {
        Self(value & 0x0f)
    }

    /// Upper four bits of `byte`.
    pub const fn high(byte: u8) -> Self {
        Self(byte >> 4)
    }

    /// Lower four bits of `byte`.
    pub const fn low(byte: u8) -> Self {
        Self(byte & 0x0f)
    }

    /// The nibble as a byte in `0..16`.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Lowercase ASCII digit for this nibble.
    pub const fn to_digit(self) -> u8 {
        HEX_ALPHABET[self.0 as usize]
    }

    /// Join a high and a low nibble into a byte.
    pub const fn join(high: Nibble, low: Nibble) -> u8 {
        (high.0 << 4) | low.0
    }
}

/// Classify one ASCII character as a hex digit.
///
/// Accepts `0-9`, `a-f` and `A-F`; everything else is `None`.
pub const fn classify(c: u8) -> Option<Nibble> {
    match c {
        b'0'..=b'9' => Some(Nibble(c - b'0')),
        b'a'..=b'f' => Some(Nibble(c - b'a' + 10)),
        b'A'..=b'F' => Some(Nibble(c - b'A' + 10)),
        _ => None,
    }
}
