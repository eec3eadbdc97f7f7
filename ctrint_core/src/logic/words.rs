use ctrint_internals::*;

use crate::{U32x2, U32x4, U64x2, U64x4};

// Both granularities read the same big-endian bit string. Word 0 is always
// the most significant chunk, whatever the native width is.

/// Word views for shapes with `u32` native words. The 32 bit view is the
/// identity, and each 64 bit word is the concatenation `(a << 32) | b` of two
/// adjacent native words.
macro_rules! words_u32_native {
    ($($name:ident, $n32:expr, $n64:expr);*;) => {
        $(
            /// # Word views
            impl $name {
                /// Returns the 32 bit word at `inx`, where `0` is the most
                /// significant. Returns `Err(CtrError::InvalidIndex)` if
                /// `inx >= Self::U32_WORDS`.
                pub const fn get_u32(&self, inx: usize) -> Result<u32, CtrError> {
                    match check_index(inx, Self::U32_WORDS) {
                        Ok(()) => Ok(self.0[inx]),
                        Err(e) => Err(e),
                    }
                }

                /// Returns the 64 bit word at `inx`, where `0` is the most
                /// significant. Returns `Err(CtrError::InvalidIndex)` if
                /// `inx >= Self::U64_WORDS`.
                pub const fn get_u64(&self, inx: usize) -> Result<u64, CtrError> {
                    match check_index(inx, Self::U64_WORDS) {
                        Ok(()) => {
                            let hi = self.0[2 * inx] as u64;
                            let lo = self.0[2 * inx + 1] as u64;
                            Ok((hi << 32) | lo)
                        }
                        Err(e) => Err(e),
                    }
                }

                #[must_use]
                pub const fn to_u32_array(&self) -> [u32; $n32] {
                    self.0
                }

                #[must_use]
                pub const fn to_u64_array(&self) -> [u64; $n64] {
                    let mut words = [0; $n64];
                    const_for!(i in {0..Self::U64_WORDS} {
                        words[i] = ((self.0[2 * i] as u64) << 32) | (self.0[2 * i + 1] as u64);
                    });
                    words
                }

                /// Creates a value from 32 bit words, most significant first.
                /// Returns `Err(CtrError::NonEqualWidths)` if
                /// `words.len() != Self::U32_WORDS`.
                pub const fn from_u32_slice(words: &[u32]) -> Result<Self, CtrError> {
                    if let Err(e) = check_len(words.len(), Self::U32_WORDS) {
                        return Err(e)
                    }
                    let mut raw = [0; $n32];
                    const_for!(i in {0..Self::ARITY} {
                        raw[i] = words[i];
                    });
                    Ok(Self(raw))
                }

                /// Creates a value from 64 bit words, most significant first.
                /// Returns `Err(CtrError::NonEqualWidths)` if
                /// `words.len() != Self::U64_WORDS`.
                pub const fn from_u64_slice(words: &[u64]) -> Result<Self, CtrError> {
                    if let Err(e) = check_len(words.len(), Self::U64_WORDS) {
                        return Err(e)
                    }
                    let mut raw = [0; $n32];
                    const_for!(i in {0..Self::U64_WORDS} {
                        raw[2 * i] = (words[i] >> 32) as u32;
                        raw[2 * i + 1] = words[i] as u32;
                    });
                    Ok(Self(raw))
                }
            }
        )*
    };
}

/// Word views for shapes with `u64` native words. Each native word splits
/// into its high half at the lower 32 bit index and its low half at the next,
/// and the 64 bit view is the identity.
macro_rules! words_u64_native {
    ($($name:ident, $n32:expr, $n64:expr);*;) => {
        $(
            /// # Word views
            impl $name {
                /// Returns the 32 bit word at `inx`, where `0` is the most
                /// significant. Returns `Err(CtrError::InvalidIndex)` if
                /// `inx >= Self::U32_WORDS`.
                pub const fn get_u32(&self, inx: usize) -> Result<u32, CtrError> {
                    match check_index(inx, Self::U32_WORDS) {
                        Ok(()) => {
                            let x = self.0[inx / 2];
                            if (inx % 2) == 0 {
                                Ok((x >> 32) as u32)
                            } else {
                                Ok(x as u32)
                            }
                        }
                        Err(e) => Err(e),
                    }
                }

                /// Returns the 64 bit word at `inx`, where `0` is the most
                /// significant. Returns `Err(CtrError::InvalidIndex)` if
                /// `inx >= Self::U64_WORDS`.
                pub const fn get_u64(&self, inx: usize) -> Result<u64, CtrError> {
                    match check_index(inx, Self::U64_WORDS) {
                        Ok(()) => Ok(self.0[inx]),
                        Err(e) => Err(e),
                    }
                }

                #[must_use]
                pub const fn to_u32_array(&self) -> [u32; $n32] {
                    let mut words = [0; $n32];
                    const_for!(i in {0..Self::ARITY} {
                        words[2 * i] = (self.0[i] >> 32) as u32;
                        words[2 * i + 1] = self.0[i] as u32;
                    });
                    words
                }

                #[must_use]
                pub const fn to_u64_array(&self) -> [u64; $n64] {
                    self.0
                }

                /// Creates a value from 32 bit words, most significant first.
                /// Returns `Err(CtrError::NonEqualWidths)` if
                /// `words.len() != Self::U32_WORDS`.
                pub const fn from_u32_slice(words: &[u32]) -> Result<Self, CtrError> {
                    if let Err(e) = check_len(words.len(), Self::U32_WORDS) {
                        return Err(e)
                    }
                    let mut raw = [0; $n64];
                    const_for!(i in {0..Self::ARITY} {
                        raw[i] = ((words[2 * i] as u64) << 32) | (words[2 * i + 1] as u64);
                    });
                    Ok(Self(raw))
                }

                /// Creates a value from 64 bit words, most significant first.
                /// Returns `Err(CtrError::NonEqualWidths)` if
                /// `words.len() != Self::U64_WORDS`.
                pub const fn from_u64_slice(words: &[u64]) -> Result<Self, CtrError> {
                    if let Err(e) = check_len(words.len(), Self::U64_WORDS) {
                        return Err(e)
                    }
                    let mut raw = [0; $n64];
                    const_for!(i in {0..Self::ARITY} {
                        raw[i] = words[i];
                    });
                    Ok(Self(raw))
                }
            }
        )*
    };
}

words_u32_native!(
    U32x2, 2, 1;
    U32x4, 4, 2;
);

words_u64_native!(
    U64x2, 4, 2;
    U64x4, 8, 4;
);
