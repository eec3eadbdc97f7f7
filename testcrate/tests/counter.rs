mod fuzz;

use ctrint::prelude::*;
use fuzz::{rand_i128, rand_value, umax, zero, Shape, N};
use num_traits::One;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

fn increment_is_skip_one<T: Shape>(seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let one = BigInt::one();
    for _ in 0..N {
        let x: T = rand_value(&mut rng);
        let inc = x.increment();
        assert_eq!(inc, x.skip_i128(1));
        assert_eq!(inc, x.skip(&one));
        assert_eq!(inc.to_biguint(), (x.to_biguint() + 1u32) % T::modulus());
    }
    // the edges that random values might miss
    assert_eq!(umax::<T>().increment(), zero::<T>());
    assert_eq!(umax::<T>().skip(&one), zero::<T>());
    assert_eq!(zero::<T>().increment(), T::from_biguint(&BigUint::one()));
}

fn skip_agrees_with_big_skip<T: Shape>(seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..N {
        let x: T = rand_value(&mut rng);
        let offset = rand_i128(&mut rng);
        let big_offset = BigInt::from(offset);
        let res = x.skip_i128(offset);
        assert_eq!(res, x.skip(&big_offset));
        // definition in terms of the integer bijection
        assert_eq!(res, T::from_bigint(&(x.to_bigint() + &big_offset)));
        // skipping back undoes the skip
        assert_eq!(res.skip(&-big_offset), x);
    }
}

fn negative_skip_wraps<T: Shape>() {
    let max = T::from_biguint(&(T::modulus() - 1u32));
    assert_eq!(zero::<T>().skip(&BigInt::from(-1)), max);
    assert_eq!(zero::<T>().skip_i128(-1), max);
    assert_eq!(zero::<T>().skip_i128(-2).increment(), max);
}

fn huge_offsets<T: Shape>(seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let modulus = BigInt::from(T::modulus());
    for _ in 0..(N / 10) {
        let x: T = rand_value(&mut rng);
        let r = BigInt::from(rand_i128(&mut rng));
        // whole multiples of the modulus change nothing
        let k = BigInt::from(rand_i128(&mut rng));
        let offset = &modulus * &k + &r;
        assert_eq!(x.skip(&offset), x.skip(&r));
    }
}

macro_rules! counter_tests {
    ($($name:ident, $ty:ty, $seed:expr);*;) => {
        $(
            #[test]
            fn $name() {
                increment_is_skip_one::<$ty>($seed);
                skip_agrees_with_big_skip::<$ty>($seed);
                negative_skip_wraps::<$ty>();
                huge_offsets::<$ty>($seed);
            }
        )*
    };
}

counter_tests!(
    counter_u32x2, U32x2, 0;
    counter_u32x4, U32x4, 1;
    counter_u64x2, U64x2, 2;
    counter_u64x4, U64x4, 3;
    counter_u64, u64, 4;
);

#[test]
fn carry_example() {
    let x = U32x2::from_array([0x00000000, 0xffffffff]);
    assert_eq!(x.increment(), U32x2::from_array([0x00000001, 0x00000000]));
    assert_eq!(x.increment().decrement(), x);
}

#[test]
fn ripple_stops_at_first_non_max() {
    let x = U64x4::from_array([5, u64::MAX, u64::MAX, u64::MAX]);
    assert_eq!(x.increment(), U64x4::from_array([6, 0, 0, 0]));
    let x = U32x4::from_array([7, 8, u32::MAX - 1, u32::MAX]);
    assert_eq!(x.increment(), U32x4::from_array([7, 8, u32::MAX, 0]));
    let x = U64x2::from_array([3, 4]);
    assert_eq!(x.increment(), U64x2::from_array([3, 5]));
}

#[test]
fn full_wraparound() {
    assert_eq!(U32x2::umax().increment(), U32x2::zero());
    assert_eq!(U32x4::umax().increment(), U32x4::zero());
    assert_eq!(U64x2::umax().increment(), U64x2::zero());
    assert_eq!(U64x4::umax().increment(), U64x4::zero());
    assert_eq!(U32x2::zero().decrement(), U32x2::umax());
    assert_eq!(U64x4::zero().decrement(), U64x4::umax());
    assert_eq!(u32::MAX.increment(), 0);
    assert_eq!(0u32.skip_i128(-1), u32::MAX);
}

#[test]
fn carry_outs() {
    let mut x = U32x4::umax();
    assert!(x.inc_assign(true));
    assert!(x.is_zero());
    assert!(!x.inc_assign(true));
    assert_eq!(x, U32x4::from_u128(1));
    // no carry-in does nothing
    assert!(!x.inc_assign(false));
    assert_eq!(x, U32x4::from_u128(1));

    let mut x = U64x2::zero();
    // a borrow out of zero is signaled by `false`
    assert!(!x.dec_assign(false));
    assert!(x.is_umax());
    assert!(x.dec_assign(false));
    assert_eq!(x, U64x2::from_i128(-2));
    assert!(x.dec_assign(true));
    assert_eq!(x, U64x2::from_i128(-2));

    let mut x = U64x4::umax();
    assert!(x.add_assign(&U64x4::from_u128(1)));
    assert!(x.is_zero());
    let mut x = U32x2::from_array([1, u32::MAX]);
    assert!(!x.add_assign(&U32x2::from_array([2, 1])));
    assert_eq!(x, U32x2::from_array([4, 0]));
}

#[test]
fn negation() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for _ in 0..N {
        let x: U64x4 = rand_value(&mut rng);
        assert!(x.wrapping_add(x.wrapping_neg()).is_zero());
        assert_eq!(x.wrapping_neg().wrapping_neg(), x);
        let y: U32x2 = rand_value(&mut rng);
        assert!(y.wrapping_add(y.wrapping_neg()).is_zero());
        let mut z = y;
        z.neg_assign(false);
        assert_eq!(z, y);
    }
    assert_eq!(U32x4::zero().wrapping_neg(), U32x4::zero());
    assert_eq!(U32x4::from_u128(1).wrapping_neg(), U32x4::umax());
}

#[test]
fn increment_decrement_inverse() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(5);
    for _ in 0..N {
        let x: U32x4 = rand_value(&mut rng);
        assert_eq!(x.increment().decrement(), x);
        assert_eq!(x.decrement().increment(), x);
        assert_eq!(x.decrement(), x.skip_i128(-1));
        let y: U64x2 = rand_value(&mut rng);
        assert_eq!(y.decrement(), y.skip(&BigInt::from(-1)));
    }
}
