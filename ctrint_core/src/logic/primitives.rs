use ctrint_internals::*;

use crate::{U32x2, U32x4, U64x2, U64x4};

macro_rules! primitives {
    ($($name:ident, $uX:ident, $n:expr);*;) => {
        $(
            /// # Primitive conversion
            ///
            /// If `BITS` is smaller than 128, truncation is used when copying
            /// bits from a primitive. If `BITS` is larger, unsigned primitives
            /// are zero extended and signed primitives are sign extended.
            impl $name {
                #[must_use]
                pub const fn from_u128(x: u128) -> Self {
                    let mut raw = [0; $n];
                    let mut x = x;
                    const_for!(i in {0..Self::ARITY}.rev() {
                        raw[i] = x as $uX;
                        x = x.wrapping_shr(Self::WIDTH as u32);
                    });
                    Self(raw)
                }

                /// ```
                /// use ctrint::prelude::*;
                ///
                /// assert_eq!(U64x4::from_i128(-1), U64x4::umax());
                /// assert_eq!(
                ///     U64x4::from_i128(-2).to_array(),
                ///     [u64::MAX, u64::MAX, u64::MAX, u64::MAX - 1]
                /// );
                /// // truncated to the low 64 bits
                /// assert_eq!(U32x2::from_i128(1 << 64), U32x2::zero());
                /// ```
                #[must_use]
                pub const fn from_i128(x: i128) -> Self {
                    let mut raw = [0; $n];
                    let mut x = x;
                    const_for!(i in {0..Self::ARITY}.rev() {
                        raw[i] = x as $uX;
                        // arithmetic shift, so that the sign keeps extending
                        x = x.wrapping_shr(Self::WIDTH as u32);
                    });
                    Self(raw)
                }

                /// Returns the least significant 128 bits of `self`, zero
                /// extended if `BITS < 128`
                #[must_use]
                pub const fn to_u128(&self) -> u128 {
                    let mut x: u128 = 0;
                    const_for!(i in {0..Self::ARITY} {
                        x = x.wrapping_shl(Self::WIDTH as u32) | (self.0[i] as u128);
                    });
                    x
                }
            }
        )*
    };
}

primitives!(
    U32x2, u32, 2;
    U32x4, u32, 4;
    U64x2, u64, 2;
    U64x4, u64, 4;
);
