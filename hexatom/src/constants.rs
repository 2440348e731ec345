// hexatom/src/constants.rs
//! Common codec constants used across the crate

use std::num::NonZeroU32;

/// Lowercase hexadecimal alphabet. `encode` only ever emits these digits.
pub const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Block width, in bits, of one text character.
pub const CHAR_BITS: NonZeroU32 = NonZeroU32::new(8).unwrap();

/// Block width, in bits, of one pair of text characters (one output byte).
pub const PAIR_BITS: NonZeroU32 = NonZeroU32::new(16).unwrap();

/// Axis of the gate sample inside a core: `[battery [sample context]]`.
pub const AXIS_SAMPLE: u64 = 6;

/// Head of the sample (`encode` length argument).
pub const AXIS_SAMPLE_HEAD: u64 = 12;

/// Tail of the sample (`encode` value argument).
pub const AXIS_SAMPLE_TAIL: u64 = 13;
