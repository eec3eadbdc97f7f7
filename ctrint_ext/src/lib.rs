//! Arbitrary precision conversions for `ctrint` values
//!
//! This crate contains the `FixedWidthInteger` capability, the bijection
//! between a shape and a nonnegative `num_bigint::BigUint` in `[0, 2^BITS)`,
//! and the arbitrary precision `skip` built on top of it. This crate is
//! separate because it requires support for `alloc`. The conversions here are
//! the reference definition of the bit layout, the hot paths in `ctrint_core`
//! never go through them. This crate is intended to be used through the main
//! `ctrint` crate, available with the "alloc" feature.

#![no_std]
#![deny(unsafe_code)]

#[doc(hidden)]
pub use ctrint_core;
#[doc(hidden)]
pub use ctrint_core::ctrint_internals;
pub use num_bigint::{BigInt, BigUint};

mod big;
pub use big::{BigSkip, FixedWidthInteger};

pub mod prelude {
    pub use crate::{BigInt, BigSkip, BigUint, FixedWidthInteger};
}
