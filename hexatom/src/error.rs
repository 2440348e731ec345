// hexatom/src/error.rs

//! Crate error type.

use thiserror::Error;

/// 共通エラー型
///
/// A failed decode is not an error: `decode` reports it as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested length is wider than `usize`.
    #[error("size error: length does not fit in a native word")]
    LengthNotNative,

    /// `2 * len` overflows `usize`.
    #[error("size error: output for length {len} overflows usize")]
    SizeOverflow {
        /// Requested byte length.
        len: usize,
    },

    /// The output buffer could not be reserved.
    #[error("size error: cannot allocate {bytes} bytes of output")]
    AllocationFailed {
        /// Requested output size.
        bytes: usize,
    },

    /// The call frame has no noun at this axis.
    #[error("no noun at axis {axis}")]
    MissingAxis {
        /// Tree address that was looked up.
        axis: u64,
    },

    /// The call frame holds a cell where an atom is required.
    #[error("expected atom at axis {axis}, found cell")]
    ExpectedAtom {
        /// Tree address that was looked up.
        axis: u64,
    },
}

impl Error {
    /// True for the failures of `encode` caused by the requested length.
    pub fn is_size_error(&self) -> bool {
        matches!(
            self,
            Error::LengthNotNative | Error::SizeOverflow { .. } | Error::AllocationFailed { .. }
        )
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
