//! The capability traits shared by the shapes and the bare native words

use ctrint_internals::{check_index, check_len, CtrError, U32_BITS, U64_BITS};

use crate::{U32x2, U32x4, U64x2, U64x4};

/// A fixed width unsigned integer representation
pub trait FixedWidth {
    /// The total bitwidth. For the shapes this is `WIDTH * ARITY`, for bare
    /// native words it is the width of the word.
    const BITS: usize;
}

/// Counter arithmetic modulo `2^BITS`. Overflow is defined wraparound and is
/// never an error.
pub trait Counter: Sized {
    /// Returns `self + offset` modulo `2^BITS`. Negative offsets wrap
    /// downwards.
    #[must_use]
    fn skip_i128(self, offset: i128) -> Self;

    /// Returns `self + 1` modulo `2^BITS`. Implementations may use a faster
    /// algorithm, but must always be observably equal to `self.skip_i128(1)`.
    #[must_use]
    fn increment(self) -> Self {
        self.skip_i128(1)
    }
}

/// A view of a value as an ordered sequence of `W` words, word 0 being the
/// most significant chunk of the big-endian bit string. `W` is `u32` or `u64`
/// independent of the native word width.
///
/// ```
/// use ctrint::prelude::*;
///
/// let x = U32x2::from_array([0xaabbccdd, 0x11223344]);
/// assert_eq!(<U32x2 as WordView<u64>>::NUM_WORDS, 1);
/// assert_eq!(WordView::<u64>::get_word(&x, 0), Ok(0xaabbccdd11223344));
/// assert_eq!(WordView::<u64>::get_word(&x, 1), Err(CtrError::InvalidIndex));
/// ```
pub trait WordView<W>: Sized {
    /// The number of words, `BITS / W::BITS`
    const NUM_WORDS: usize;

    /// Returns word `inx`, or `Err(CtrError::InvalidIndex)` if
    /// `inx >= Self::NUM_WORDS`
    fn get_word(&self, inx: usize) -> Result<W, CtrError>;

    /// Creates a value out of exactly `Self::NUM_WORDS` words, most
    /// significant first. Returns `Err(CtrError::NonEqualWidths)` for any
    /// other length.
    fn from_words(words: &[W]) -> Result<Self, CtrError>;
}

macro_rules! capabilities {
    ($($name:ident);*;) => {
        $(
            impl FixedWidth for $name {
                const BITS: usize = $name::BITS;
            }

            impl Counter for $name {
                #[inline]
                fn skip_i128(self, offset: i128) -> Self {
                    $name::skip_i128(self, offset)
                }

                #[inline]
                fn increment(self) -> Self {
                    $name::increment(self)
                }
            }

            impl WordView<u32> for $name {
                const NUM_WORDS: usize = $name::U32_WORDS;

                #[inline]
                fn get_word(&self, inx: usize) -> Result<u32, CtrError> {
                    self.get_u32(inx)
                }

                #[inline]
                fn from_words(words: &[u32]) -> Result<Self, CtrError> {
                    $name::from_u32_slice(words)
                }
            }

            impl WordView<u64> for $name {
                const NUM_WORDS: usize = $name::U64_WORDS;

                #[inline]
                fn get_word(&self, inx: usize) -> Result<u64, CtrError> {
                    self.get_u64(inx)
                }

                #[inline]
                fn from_words(words: &[u64]) -> Result<Self, CtrError> {
                    $name::from_u64_slice(words)
                }
            }
        )*
    };
}

capabilities!(
    U32x2;
    U32x4;
    U64x2;
    U64x4;
);

// Bare native words. A `u32` has no exact 64 bit view, so it only gets the 32
// bit one.

impl FixedWidth for u32 {
    const BITS: usize = U32_BITS;
}

impl FixedWidth for u64 {
    const BITS: usize = U64_BITS;
}

impl Counter for u32 {
    #[inline]
    fn skip_i128(self, offset: i128) -> Self {
        // truncation of two's complement is exact modulo `2^32`
        self.wrapping_add(offset as u32)
    }

    #[inline]
    fn increment(self) -> Self {
        self.wrapping_add(1)
    }
}

impl Counter for u64 {
    #[inline]
    fn skip_i128(self, offset: i128) -> Self {
        self.wrapping_add(offset as u64)
    }

    #[inline]
    fn increment(self) -> Self {
        self.wrapping_add(1)
    }
}

impl WordView<u32> for u32 {
    const NUM_WORDS: usize = 1;

    fn get_word(&self, inx: usize) -> Result<u32, CtrError> {
        check_index(inx, 1)?;
        Ok(*self)
    }

    fn from_words(words: &[u32]) -> Result<Self, CtrError> {
        check_len(words.len(), 1)?;
        Ok(words[0])
    }
}

impl WordView<u32> for u64 {
    const NUM_WORDS: usize = 2;

    fn get_word(&self, inx: usize) -> Result<u32, CtrError> {
        check_index(inx, 2)?;
        if inx == 0 {
            Ok((*self >> 32) as u32)
        } else {
            Ok(*self as u32)
        }
    }

    fn from_words(words: &[u32]) -> Result<Self, CtrError> {
        check_len(words.len(), 2)?;
        Ok(((words[0] as u64) << 32) | (words[1] as u64))
    }
}

impl WordView<u64> for u64 {
    const NUM_WORDS: usize = 1;

    fn get_word(&self, inx: usize) -> Result<u64, CtrError> {
        check_index(inx, 1)?;
        Ok(*self)
    }

    fn from_words(words: &[u64]) -> Result<Self, CtrError> {
        check_len(words.len(), 1)?;
        Ok(words[0])
    }
}
