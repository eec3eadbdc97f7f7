//! This crate contains common developer utilities for crates within the
//! `ctrint` system, such as macros that needed a separate crate because
//! `#[macro_export]` unconditionally causes macros to be publicly accessible.
//! Most users should never have to interact with this directly.
//!
//! There is a hidden reexport of this crate for `ctrint_core`, `ctrint_ext`,
//! and `ctrint`.

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_range_loop)]

mod error;
mod macros;
mod widening;

pub use error::CtrError;
pub use widening::{widen_add_u32, widen_add_u64};

/// Bitwidth of the 32 bit word granularity
pub const U32_BITS: usize = u32::BITS as usize;

/// Bitwidth of the 64 bit word granularity
pub const U64_BITS: usize = u64::BITS as usize;

/// Returns the number of `granularity` sized words needed for `bits`. All the
/// supported shapes divide evenly, so there is never a partial word.
#[inline]
pub const fn num_words(bits: usize, granularity: usize) -> usize {
    bits / granularity
}

/// Returns `Ok(())` if `inx` addresses one of `len` words, and
/// `Err(CtrError::InvalidIndex)` otherwise.
#[inline]
pub const fn check_index(inx: usize, len: usize) -> Result<(), CtrError> {
    if inx < len {
        Ok(())
    } else {
        Err(CtrError::InvalidIndex)
    }
}

/// Returns `Ok(())` if a slice of length `len` has exactly `expected` words,
/// and `Err(CtrError::NonEqualWidths)` otherwise.
#[inline]
pub const fn check_len(len: usize, expected: usize) -> Result<(), CtrError> {
    if len == expected {
        Ok(())
    } else {
        Err(CtrError::NonEqualWidths)
    }
}

#[test]
fn index_checks() {
    assert_eq!(check_index(0, 2), Ok(()));
    assert_eq!(check_index(1, 2), Ok(()));
    assert_eq!(check_index(2, 2), Err(CtrError::InvalidIndex));
    assert_eq!(check_index(usize::MAX, 8), Err(CtrError::InvalidIndex));
    assert_eq!(check_len(4, 4), Ok(()));
    assert_eq!(check_len(3, 4), Err(CtrError::NonEqualWidths));
    assert_eq!(num_words(256, U32_BITS), 8);
    assert_eq!(num_words(64, U64_BITS), 1);
}
