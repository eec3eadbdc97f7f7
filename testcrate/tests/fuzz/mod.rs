#![allow(dead_code)]

use core::fmt::Debug;

use ctrint::prelude::*;
use num_traits::{One, Zero};
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

pub const N: u32 = if cfg!(miri) {
    32
} else if cfg!(debug_assertions) {
    10_000
} else {
    1_000_000
};

/// Everything the shapes (and bare `u64`) implement
pub trait Shape:
    Copy + Eq + Debug + Counter + FixedWidthInteger + WordView<u32> + WordView<u64>
{
}

impl<T> Shape for T where
    T: Copy + Eq + Debug + Counter + FixedWidthInteger + WordView<u32> + WordView<u64>
{
}

pub fn num_u32_words<T: Shape>() -> usize {
    <T as WordView<u32>>::NUM_WORDS
}

pub fn num_u64_words<T: Shape>() -> usize {
    <T as WordView<u64>>::NUM_WORDS
}

pub fn zero<T: Shape>() -> T {
    T::from_biguint(&BigUint::zero())
}

pub fn umax<T: Shape>() -> T {
    T::from_biguint(&(T::modulus() - BigUint::one()))
}

/// Random integer in `[0, 2^bits)`, `bits` must be a multiple of 32
pub fn rand_biguint(rng: &mut Xoshiro128StarStar, bits: usize) -> BigUint {
    let digits: Vec<u32> = (0..(bits / 32)).map(|_| rng.next_u32()).collect();
    BigUint::from_slice(&digits)
}

/// Random value that is biased towards runs of zero and `MAX` words, so that
/// carries and borrows ripple often
pub fn rand_value<T: Shape>(rng: &mut Xoshiro128StarStar) -> T {
    let mut words = vec![0u32; num_u32_words::<T>()];
    for w in words.iter_mut() {
        *w = match rng.next_u32() % 4 {
            0 => 0,
            1 => u32::MAX,
            _ => rng.next_u32(),
        };
    }
    <T as WordView<u32>>::from_words(&words).unwrap()
}

/// Random `i128` that is sometimes small, sometimes an extreme
pub fn rand_i128(rng: &mut Xoshiro128StarStar) -> i128 {
    match rng.next_u32() % 8 {
        0 => i128::MIN,
        1 => i128::MAX,
        2 => (rng.next_u32() as i32) as i128,
        _ => (((rng.next_u64() as u128) << 64) | (rng.next_u64() as u128)) as i128,
    }
}

/// Reconstructs the integer from the 32 bit word view, big-endian
pub fn from_u32_words<T: Shape>(x: &T) -> BigUint {
    let mut acc = BigUint::zero();
    for i in 0..num_u32_words::<T>() {
        let word = <T as WordView<u32>>::get_word(x, i).unwrap();
        acc = (acc << 32u32) + BigUint::from(word);
    }
    acc
}

/// Reconstructs the integer from the 64 bit word view, big-endian
pub fn from_u64_words<T: Shape>(x: &T) -> BigUint {
    let mut acc = BigUint::zero();
    for i in 0..num_u64_words::<T>() {
        let word = <T as WordView<u64>>::get_word(x, i).unwrap();
        acc = (acc << 64u32) + BigUint::from(word);
    }
    acc
}
