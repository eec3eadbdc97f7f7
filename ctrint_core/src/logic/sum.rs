use const_fn::const_fn;
use ctrint_internals::*;

use crate::{U32x2, U32x4, U64x2, U64x4};

// All of these ripple from the last (least significant) element towards the
// first. Nothing here may use a trapping `+` or `-` on a native word.

macro_rules! sum {
    ($($name:ident, $uX:ident, $widen_add:ident);*;) => {
        $(
            /// # Summation
            impl $name {
                /// Increment-assigns `self` with a carry-in `cin` and returns
                /// the carry-out bit. If `cin == true` then one is added to
                /// `self`, otherwise nothing happens. `false` is always returned
                /// unless `self.is_umax()`, in which case `self` wraps around to
                /// zero.
                #[const_fn(cfg(feature = "const_support"))]
                pub const fn inc_assign(&mut self, cin: bool) -> bool {
                    if !cin {
                        return false
                    }
                    const_for!(i in {0..Self::ARITY}.rev() {
                        match self.0[i].overflowing_add(1) {
                            (v, false) => {
                                self.0[i] = v;
                                return false
                            }
                            // if the bits were relatively random, this should rarely happen
                            (v, true) => {
                                self.0[i] = v;
                            }
                        }
                    });
                    true
                }

                /// Decrement-assigns `self` with a carry-in `cin` and returns
                /// the carry-out bit. If `cin == false` then one is subtracted
                /// from `self`, otherwise nothing happens. `true` is always
                /// returned unless `self.is_zero()`, in which case `self` wraps
                /// around to `umax`.
                #[const_fn(cfg(feature = "const_support"))]
                pub const fn dec_assign(&mut self, cin: bool) -> bool {
                    if cin {
                        return true
                    }
                    const_for!(i in {0..Self::ARITY}.rev() {
                        match self.0[i].overflowing_sub(1) {
                            (v, false) => {
                                self.0[i] = v;
                                return true
                            }
                            (v, true) => {
                                self.0[i] = v;
                            }
                        }
                    });
                    false
                }

                /// Not-assigns `self`
                #[const_fn(cfg(feature = "const_support"))]
                pub const fn not_assign(&mut self) {
                    const_for!(i in {0..Self::ARITY} {
                        self.0[i] = !self.0[i];
                    });
                }

                /// Negate-assigns `self` if `neg` is true, which is the same as
                /// subtracting `self` from `2^BITS`
                #[const_fn(cfg(feature = "const_support"))]
                pub const fn neg_assign(&mut self, neg: bool) {
                    if neg {
                        self.not_assign();
                        // the carry only happens if `self` was zero
                        self.inc_assign(true);
                    }
                }

                /// Add-assigns by `rhs` and returns the carry-out bit
                #[const_fn(cfg(feature = "const_support"))]
                pub const fn add_assign(&mut self, rhs: &Self) -> bool {
                    let mut carry = 0;
                    const_for!(i in {0..Self::ARITY}.rev() {
                        let tmp = $widen_add(self.0[i], rhs.0[i], carry);
                        self.0[i] = tmp.0;
                        carry = tmp.1;
                    });
                    carry != 0
                }

                /// Returns `self + 1` modulo `2^BITS`. This is a ripple carry
                /// that only touches as many native words as there are trailing
                /// `MAX` words, and is always equal to `self.skip_i128(1)`.
                #[const_fn(cfg(feature = "const_support"))]
                #[must_use]
                pub const fn increment(self) -> Self {
                    let mut x = self;
                    x.inc_assign(true);
                    x
                }

                /// Returns `self - 1` modulo `2^BITS`
                #[const_fn(cfg(feature = "const_support"))]
                #[must_use]
                pub const fn decrement(self) -> Self {
                    let mut x = self;
                    x.dec_assign(false);
                    x
                }

                /// Returns `self + rhs` modulo `2^BITS`
                #[const_fn(cfg(feature = "const_support"))]
                #[must_use]
                pub const fn wrapping_add(self, rhs: Self) -> Self {
                    let mut x = self;
                    x.add_assign(&rhs);
                    x
                }

                /// Returns `2^BITS - self` modulo `2^BITS`
                #[const_fn(cfg(feature = "const_support"))]
                #[must_use]
                pub const fn wrapping_neg(self) -> Self {
                    let mut x = self;
                    x.neg_assign(true);
                    x
                }

                /// Returns `self + offset` modulo `2^BITS`. Negative offsets
                /// wrap downwards, so `zero().skip_i128(-1) == umax()`. The
                /// offset is sign extended or truncated to `BITS` first, which
                /// is exact in modular arithmetic.
                #[const_fn(cfg(feature = "const_support"))]
                #[must_use]
                pub const fn skip_i128(self, offset: i128) -> Self {
                    self.wrapping_add(Self::from_i128(offset))
                }
            }
        )*
    };
}

sum!(
    U32x2, u32, widen_add_u32;
    U32x4, u32, widen_add_u32;
    U64x2, u64, widen_add_u64;
    U64x4, u64, widen_add_u64;
);
