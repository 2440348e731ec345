// hexatom/src/value.rs

//! Byte-indexed access to unsigned values.

use malachite::Natural;
use malachite::base::num::logic::traits::{BitAccess, SignificantBits};

/// Byte-indexed view of an unsigned integer.
///
/// Index 0 is the least significant byte. `byte_at` is total: every index at
/// or beyond `byte_len` reads as zero, so a value behaves as if it were
/// zero-extended forever above its top byte.
pub trait ByteSource {
    /// Number of significant bytes (0 for the value zero).
    fn byte_len(&self) -> usize;

    /// Byte `index` of the value.
    fn byte_at(&self, index: usize) -> u8;

    /// Number of significant bits (0 for the value zero).
    fn significant_bits(&self) -> u64 {
        match self.byte_len() {
            0 => 0,
            n => {
                let top = self.byte_at(n - 1);
                (n as u64 - 1) * 8 + u64::from(8 - top.leading_zeros())
            }
        }
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn byte_len(&self) -> usize {
        (**self).byte_len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        (**self).byte_at(index)
    }

    fn significant_bits(&self) -> u64 {
        (**self).significant_bits()
    }
}

/// A slice is read as little-endian: element 0 is the low byte. High zero
/// elements are not significant.
impl ByteSource for [u8] {
    fn byte_len(&self) -> usize {
        self.iter().rposition(|&b| b != 0).map_or(0, |top| top + 1)
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.get(index).copied().unwrap_or(0)
    }
}

impl ByteSource for Vec<u8> {
    fn byte_len(&self) -> usize {
        self.as_slice().byte_len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.as_slice().byte_at(index)
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    fn byte_len(&self) -> usize {
        self.as_slice().byte_len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.as_slice().byte_at(index)
    }
}

macro_rules! impl_byte_source_for_uint {
    ($($t:ty),* $(,)?) => {
        $(
            impl ByteSource for $t {
                fn byte_len(&self) -> usize {
                    ((<$t>::BITS - self.leading_zeros()) as usize).div_ceil(8)
                }

                fn byte_at(&self, index: usize) -> u8 {
                    if index < std::mem::size_of::<$t>() {
                        (*self >> (index * 8)) as u8
                    } else {
                        0
                    }
                }
            }
        )*
    };
}

impl_byte_source_for_uint!(u8, u16, u32, u64, u128, usize);

impl ByteSource for Natural {
    fn byte_len(&self) -> usize {
        <&Natural as SignificantBits>::significant_bits(self).div_ceil(8) as usize
    }

    fn byte_at(&self, index: usize) -> u8 {
        if index >= self.byte_len() {
            return 0;
        }
        let base = index as u64 * 8;
        (0..8u64).fold(0u8, |acc, bit| {
            acc | (u8::from(self.get_bit(base + bit)) << bit)
        })
    }

    fn significant_bits(&self) -> u64 {
        <&Natural as SignificantBits>::significant_bits(self)
    }
}
