//! This crate compiles all the interfaces of `ctrint_core` and `ctrint_ext`.
//!
//! `ctrint` supplies the counter and key words of counter-based random number
//! generators such as Philox and Threefry. The generators themselves are not
//! part of this crate, only the values they consume and produce:
//!
//! - the four shapes [U32x2], [U32x4], [U64x2], and [U64x4], made of 2 or 4
//!   native words with the most significant word first
//! - [FixedWidth] and, with the "alloc" feature, `FixedWidthInteger`, the
//!   bijection with arbitrary precision integers in `[0, 2^BITS)`
//! - [Counter], ripple carry `increment` and wrapping `skip_i128`, with
//!   `BigSkip::skip` for offsets of any size
//! - [WordView], the 32 or 64 bit word view of a value independent of its
//!   native word width
//!
//! ```
//! use ctrint::prelude::*;
//!
//! // the counter of a Philox4x32 stream
//! let mut ctr = U32x4::from_array([0, 0, 0, u32::MAX]);
//! ctr = ctr.increment();
//! assert_eq!(ctr, U32x4::from_array([0, 0, 1, 0]));
//! // consumed by a 64 bit generator
//! assert_eq!(WordView::<u64>::get_word(&ctr, 1), Ok(1 << 32));
//! assert_eq!(format!("{ctr:x}"), "0x00000000_00000000_00000001_00000000_u128");
//! ```
//!
//! Features:
//! - "std" (default) and "alloc" enable `ctrint_ext`
//! - "const_support" makes the `&mut self` functions `const` on nightly
//! - "rand_support" enables `rand_assign_using` and `rand_using`
//! - "zeroize_support" implements `zeroize::Zeroize` for key material

#![cfg_attr(not(feature = "std"), no_std)]

pub use ctrint_core::prelude::*;
#[cfg(feature = "alloc")]
pub use ctrint_ext::prelude::*;

pub mod prelude {
    pub use crate::*;
}
