//! Counter and key words for counter-based random number generators
//!
//! This is the core library of the `ctrint` system of crates. This crate is
//! strictly `no-std` and `no-alloc`, not even requiring an allocator to be
//! compiled. It supplies the four shapes `U32x2`, `U32x4`, `U64x2`, and
//! `U64x4`, which are fixed width unsigned integers made of 2 or 4 native
//! words, along with the [FixedWidth], [Counter], and [WordView] capabilities.
//!
//! The first element of a shape is the most significant, and all arithmetic
//! wraps modulo `2^BITS`. Word views slice the same big-endian bit string at
//! 32 or 64 bit granularity regardless of the native word width, so that a
//! generator can consume a `U64x2` counter as four `u32` words or a `U32x4`
//! key as two `u64` words.
//!
//! Almost all fallible functions in this crate return a handleable `Result`.
//! Overflow is never an error.

#![cfg_attr(feature = "const_support", feature(const_mut_refs))]
#![no_std]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![deny(unsafe_code)]

#[doc(hidden)]
pub use ctrint_internals;
pub use ctrint_internals::CtrError;

mod capability;
pub use capability::{Counter, FixedWidth, WordView};

pub(crate) mod data;
pub use data::{U32x2, U32x4, U64x2, U64x4};

mod logic;

pub mod prelude {
    pub use crate::{Counter, CtrError, FixedWidth, U32x2, U32x4, U64x2, U64x4, WordView};
}
