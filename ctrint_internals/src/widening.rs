macro_rules! widen_add_ {
    ($($name:ident, $uX:ident);*;) => {
        $(
            /// Computes `x + y + z` and returns the widened result as a tuple of
            /// the wrapped sum and the carry. The carry can be at most 2, and
            /// is at most 1 if `z` is a carry bit.
            #[inline]
            pub const fn $name(x: $uX, y: $uX, z: $uX) -> ($uX, $uX) {
                let (sum, carry0) = x.overflowing_add(y);
                let (sum, carry1) = sum.overflowing_add(z);
                (sum, (carry0 as $uX) + (carry1 as $uX))
            }
        )*
    };
}

widen_add_!(
    widen_add_u32, u32;
    widen_add_u64, u64;
);

#[test]
fn widen_add_carries() {
    assert_eq!(widen_add_u32(1, 2, 0), (3, 0));
    assert_eq!(widen_add_u32(u32::MAX, 1, 0), (0, 1));
    assert_eq!(widen_add_u32(u32::MAX, u32::MAX, 1), (u32::MAX, 1));
    assert_eq!(widen_add_u32(u32::MAX, u32::MAX, u32::MAX), (u32::MAX - 2, 2));
    assert_eq!(widen_add_u64(u64::MAX, 0, 1), (0, 1));
    assert_eq!(widen_add_u64(u64::MAX, u64::MAX, 0), (u64::MAX - 1, 1));
}
