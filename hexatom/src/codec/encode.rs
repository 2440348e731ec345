// hexatom/src/codec/encode.rs

//! Value to hex text.

use log::{debug, trace};

use super::digit::Nibble;
use crate::value::ByteSource;
use crate::{Error, Result};

/// Render the low `len` bytes of `value` as exactly `2 * len` lowercase hex
/// digits, most significant byte first.
///
/// `value` is zero-extended when `len` exceeds its byte length and truncated
/// to its low `len` bytes when `len` is shorter. Neither case is an error.
///
/// Fails with a size error when `2 * len` does not fit in `usize` or the
/// output buffer cannot be reserved.
pub fn encode<V: ByteSource + ?Sized>(len: usize, value: &V) -> Result<String> {
    let chars = len.checked_mul(2).ok_or_else(|| {
        debug!("base16 encode: 2 * {} overflows usize", len);
        Error::SizeOverflow { len }
    })?;

    let mut out = String::new();
    out.try_reserve_exact(chars).map_err(|e| {
        debug!("base16 encode: cannot reserve {} bytes: {}", chars, e);
        Error::AllocationFailed { bytes: chars }
    })?;

    for i in (0..len).rev() {
        let b = value.byte_at(i);
        out.push(char::from(Nibble::high(b).to_digit()));
        out.push(char::from(Nibble::low(b).to_digit()));
    }

    trace!("base16 encode: {} bytes -> {} digits", len, out.len());
    Ok(out)
}

/// Encode `value` at its own significant length (`""` for zero).
pub fn encode_significant<V: ByteSource + ?Sized>(value: &V) -> Result<String> {
    encode(value.byte_len(), value)
}
