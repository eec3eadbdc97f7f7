#![no_std]
#![no_main]

extern crate panic_halt;

use ctrint::prelude::*;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use riscv_minimal_rt::entry;
use zeroize::Zeroize;

const START: U64x2 = U64x2::from_array([0, u64::MAX]).increment();

#[entry]
fn main() -> ! {
    assert_eq!(START, U64x2::from_array([1, 0]));

    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let mut key = U32x2::rand_using(&mut rng).unwrap();
    let mut ctr = U32x4::zero();
    ctr.rand_assign_using(&mut rng).unwrap();

    // the carry chain and its inverse
    let next = ctr.increment();
    assert_eq!(next.decrement(), ctr);
    assert_eq!(next, ctr.skip_i128(1));
    assert_eq!(U64x4::zero().skip_i128(-1), U64x4::umax());
    assert_eq!(U64x4::umax().increment(), U64x4::zero());

    // word views at both granularities
    let x = U64x2::from_array([0x1122334455667788, 0x99aabbccddeeff00]);
    assert_eq!(x.get_u32(0), Ok(0x11223344));
    assert_eq!(x.get_u32(3), Ok(0xddeeff00));
    assert_eq!(x.get_u32(4), Err(CtrError::InvalidIndex));
    assert_eq!(WordView::<u64>::get_word(&key, 0), key.get_u64(0));
    assert_eq!(U64x2::from_u32_slice(&x.to_u32_array()), Ok(x));
    assert_eq!(
        U32x4::from_u64_slice(&ctr.to_u64_array()),
        Ok(ctr)
    );

    key.zeroize();
    assert!(key.is_zero());

    loop {}
}
