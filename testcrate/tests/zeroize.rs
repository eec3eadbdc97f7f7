use ctrint::prelude::*;
use zeroize::Zeroize;

#[test]
fn zeroize() {
    let mut x = U32x2::from_array([0xfedcba98, 0x76543210]);
    x.zeroize();
    assert!(x.is_zero());
    let mut x = U32x4::umax();
    x.zeroize();
    assert!(x.is_zero());
    let mut x = U64x2::from_u128(0xfedcba9876543210);
    x.zeroize();
    assert!(x.is_zero());
    let mut x = U64x4::umax();
    x.zeroize();
    assert_eq!(x, U64x4::zero());
}
