// hexatom/src/codec/metric.rs

//! Bit-block sizing.

use std::num::NonZeroU32;

use crate::value::ByteSource;

/// Minimal number of `block_bits`-wide blocks that hold the significant bits
/// of `value`. Zero for the value zero.
///
/// Saturates at `usize::MAX` when the count does not fit in `usize`.
pub fn block_metric<V: ByteSource + ?Sized>(block_bits: NonZeroU32, value: &V) -> usize {
    let blocks = value.significant_bits().div_ceil(u64::from(block_bits.get()));
    usize::try_from(blocks).unwrap_or(usize::MAX)
}
