use ctrint_core::{Counter, FixedWidth, U32x2, U32x4, U64x2, U64x4};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Conversion between a fixed width value and arbitrary precision integers
pub trait FixedWidthInteger: FixedWidth + Sized {
    /// Returns the integer in `[0, 2^BITS)` obtained by reading the native
    /// words most significant first as digits in base `2^WIDTH`
    fn to_biguint(&self) -> BigUint;

    /// Creates a value out of the least significant `BITS` bits of `n`, which
    /// is the same as reducing `n` modulo `2^BITS`
    fn from_biguint(n: &BigUint) -> Self;

    /// Returns `2^BITS`
    fn modulus() -> BigUint {
        BigUint::one() << Self::BITS
    }

    /// The same as `to_biguint` but as a (never negative) `BigInt`
    fn to_bigint(&self) -> BigInt {
        BigInt::from(self.to_biguint())
    }

    /// Creates a value out of `n` reduced by the mathematical modulus into
    /// `[0, 2^BITS)`, so that negative integers wrap around the way two's
    /// complement truncation does.
    ///
    /// ```
    /// use ctrint::prelude::*;
    ///
    /// assert_eq!(U32x2::from_bigint(&BigInt::from(-1)), U32x2::umax());
    /// assert_eq!(
    ///     U32x2::from_bigint(&BigInt::from(0x1_0000_0002u64)),
    ///     U32x2::from_array([1, 2])
    /// );
    /// ```
    fn from_bigint(n: &BigInt) -> Self {
        let modulus = BigInt::from(Self::modulus());
        Self::from_biguint(n.mod_floor(&modulus).magnitude())
    }
}

/// Arbitrary precision `skip`, available for every [Counter] that is also a
/// [FixedWidthInteger]
pub trait BigSkip: Counter + FixedWidthInteger {
    /// Returns `self + offset` modulo `2^BITS`. This is defined literally as
    /// `from_bigint(to_bigint(self) + offset)`, so it accepts offsets of any
    /// size and sign. For offsets that fit in an `i128`,
    /// [Counter::skip_i128] gives the same result without allocating.
    ///
    /// ```
    /// use ctrint::prelude::*;
    ///
    /// assert_eq!(U64x4::zero().skip(&BigInt::from(-1)), U64x4::umax());
    /// let x = U32x4::from_array([0, 0, 0, 7]);
    /// assert_eq!(x.skip(&BigInt::from(-7)), U32x4::zero());
    /// ```
    #[must_use]
    fn skip(self, offset: &BigInt) -> Self {
        Self::from_bigint(&(self.to_bigint() + offset))
    }
}

impl<T: Counter + FixedWidthInteger> BigSkip for T {}

macro_rules! big_shape {
    ($($name:ident, $uX:ident, $n:expr, $iter_digits:ident);*;) => {
        $(
            impl FixedWidthInteger for $name {
                fn to_biguint(&self) -> BigUint {
                    self.to_array()
                        .iter()
                        .fold(BigUint::zero(), |acc, &x| (acc << $name::WIDTH) + BigUint::from(x))
                }

                fn from_biguint(n: &BigUint) -> Self {
                    // digits come least significant first, anything past the
                    // last native word is truncated
                    let mut digits = n.$iter_digits();
                    let mut raw: [$uX; $n] = [0; $n];
                    for x in raw.iter_mut().rev() {
                        *x = digits.next().unwrap_or(0);
                    }
                    $name::from_array(raw)
                }
            }
        )*
    };
}

big_shape!(
    U32x2, u32, 2, iter_u32_digits;
    U32x4, u32, 4, iter_u32_digits;
    U64x2, u64, 2, iter_u64_digits;
    U64x4, u64, 4, iter_u64_digits;
);

impl FixedWidthInteger for u32 {
    fn to_biguint(&self) -> BigUint {
        BigUint::from(*self)
    }

    fn from_biguint(n: &BigUint) -> Self {
        n.iter_u32_digits().next().unwrap_or(0)
    }
}

impl FixedWidthInteger for u64 {
    fn to_biguint(&self) -> BigUint {
        BigUint::from(*self)
    }

    fn from_biguint(n: &BigUint) -> Self {
        n.iter_u64_digits().next().unwrap_or(0)
    }
}
