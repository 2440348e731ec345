// fixtures.rs — provides commonly used values and texts

use hexatom::Atom;
use malachite::Natural;

/// `(text, little-endian bytes)` pairs that decode exactly.
pub fn decode_cases() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("", vec![]),
        ("0", vec![0x00]),
        ("f", vec![0x0f]),
        ("7f", vec![0x7f]),
        ("007f", vec![0x7f, 0x00]),
        ("abc", vec![0xbc, 0x0a]),
        ("deadbeef", vec![0xef, 0xbe, 0xad, 0xde]),
        ("0000", vec![0x00, 0x00]),
    ]
}

/// Texts with at least one non-digit character.
pub fn invalid_texts() -> Vec<&'static str> {
    vec!["12g4", "g", "0x7f", "7f ", "-1", "ab_cd", "é0"]
}

/// A value wider than any primitive integer: 0x0102...1f20 (32 bytes).
pub fn wide_value_bytes() -> Vec<u8> {
    (1u8..=32).rev().collect()
}

pub fn wide_value() -> Natural {
    Atom::from_le_bytes(wide_value_bytes()).to_natural()
}

/// Text stored as an atom (byte 0 = first character).
pub fn cord(text: &str) -> Natural {
    Atom::from_text(text).to_natural()
}
