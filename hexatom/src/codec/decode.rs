// hexatom/src/codec/decode.rs

//! Hex text to bytes.

use log::{debug, trace};

use super::digit::{Nibble, classify};
use super::metric::block_metric;
use crate::constants::CHAR_BITS;
use crate::types::Decoded;
use crate::value::ByteSource;

/// Parse hex text into `ceil(chars / 2)` little-endian bytes.
///
/// The rightmost two digits become byte 0. With an odd digit count the
/// leftmost digit stands alone as the low nibble of the top byte. Leading
/// `'0'` digits still produce output bytes. Digits are case-insensitive.
///
/// Returns `None` if any character is not a hex digit; nothing is produced
/// in that case. Empty text decodes to an empty `Decoded`.
pub fn decode<T: AsRef<[u8]> + ?Sized>(text: &T) -> Option<Decoded> {
    let text = text.as_ref();
    decode_with(text.len(), |i| text[i])
}

/// Like [`decode`], with the text held as a value whose byte 0 is the first
/// character. The character count is the value's significant byte count, so
/// trailing NUL bytes are not part of the text.
pub fn decode_value<V: ByteSource + ?Sized>(text: &V) -> Option<Decoded> {
    decode_with(block_metric(CHAR_BITS, text), |i| text.byte_at(i))
}

fn decode_with(chars: usize, char_at: impl Fn(usize) -> u8) -> Option<Decoded> {
    let out_len = chars.div_ceil(2);
    let mut buf = Vec::with_capacity(out_len);

    // Walk from the last character towards the first, one output byte per
    // step; only the first character can be left without a partner.
    let mut end = chars;
    while end > 0 {
        let low_at = end - 1;
        let low = digit(low_at, char_at(low_at))?;
        let high = match low_at.checked_sub(1) {
            Some(high_at) => digit(high_at, char_at(high_at))?,
            None => Nibble::new(0),
        };
        buf.push(Nibble::join(high, low));
        end = end.saturating_sub(2);
    }

    debug_assert_eq!(buf.len(), out_len);
    trace!("base16 decode: {} digits -> {} bytes", chars, out_len);
    Some(Decoded::from_le_bytes(buf))
}

fn digit(offset: usize, c: u8) -> Option<Nibble> {
    let nibble = classify(c);
    if nibble.is_none() {
        debug!("base16 decode: invalid digit {:#04x} at offset {}", c, offset);
    }
    nibble
}
