use ctrint_internals::*;

// The tuple field is private so that the only way to observe a shape is
// through its capabilities or the explicit array conversions. Element 0 is the
// most significant, which also makes the derived `Ord` numeric.

macro_rules! shape {
    ($($(#[$attr:meta])* $name:ident, $uX:ident, $n:expr);*;) => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            #[repr(transparent)]
            pub struct $name(pub(crate) [$uX; $n]);

            impl $name {
                /// The number of native words
                pub const ARITY: usize = $n;

                /// The bitwidth of one native word
                pub const WIDTH: usize = $uX::BITS as usize;

                /// The total bitwidth, `WIDTH * ARITY`
                pub const BITS: usize = Self::WIDTH * Self::ARITY;

                /// The number of words in the 32 bit word view
                pub const U32_WORDS: usize = num_words(Self::BITS, U32_BITS);

                /// The number of words in the 64 bit word view
                pub const U64_WORDS: usize = num_words(Self::BITS, U64_BITS);

                /// Creates a value from native words in big-endian significance
                /// order, `raw[0]` being the most significant
                #[inline]
                #[must_use]
                pub const fn from_array(raw: [$uX; $n]) -> Self {
                    Self(raw)
                }

                /// Returns the native words, most significant first
                #[inline]
                #[must_use]
                pub const fn to_array(self) -> [$uX; $n] {
                    self.0
                }

                #[inline]
                #[must_use]
                pub const fn as_array(&self) -> &[$uX; $n] {
                    &self.0
                }

                /// Zero-value construction
                #[inline]
                #[must_use]
                pub const fn zero() -> Self {
                    Self([0; $n])
                }

                /// Unsigned-maximum-value construction, every native word is at
                /// its maximum
                #[inline]
                #[must_use]
                pub const fn umax() -> Self {
                    Self([$uX::MAX; $n])
                }

                #[must_use]
                pub const fn is_zero(&self) -> bool {
                    const_for!(i in {0..Self::ARITY} {
                        if self.0[i] != 0 {
                            return false
                        }
                    });
                    true
                }

                #[must_use]
                pub const fn is_umax(&self) -> bool {
                    const_for!(i in {0..Self::ARITY} {
                        if self.0[i] != $uX::MAX {
                            return false
                        }
                    });
                    true
                }
            }
        )*
    };
}

shape!(
    /// A 64 bit value made of two `u32`s, the counter and output shape of
    /// Philox2x32 and Threefry2x32.
    ///
    /// ```
    /// use ctrint::prelude::*;
    ///
    /// let x = U32x2::from_array([0, u32::MAX]);
    /// assert_eq!(x.increment(), U32x2::from_array([1, 0]));
    /// assert_eq!(U32x2::BITS, 64);
    /// ```
    U32x2, u32, 2;
    /// A 128 bit value made of four `u32`s, the counter and output shape of
    /// Philox4x32 and Threefry4x32.
    U32x4, u32, 4;
    /// A 128 bit value made of two `u64`s, the counter and output shape of
    /// Philox2x64 and Threefry2x64.
    ///
    /// ```
    /// use ctrint::prelude::*;
    ///
    /// let x = U64x2::from_array([0x1122334455667788, 0]);
    /// assert_eq!(x.get_u32(0), Ok(0x11223344));
    /// assert_eq!(x.get_u32(1), Ok(0x55667788));
    /// assert_eq!(x.get_u32(4), Err(CtrError::InvalidIndex));
    /// ```
    U64x2, u64, 2;
    /// A 256 bit value made of four `u64`s, the counter and output shape of
    /// Philox4x64 and Threefry4x64.
    U64x4, u64, 4;
);
