use core::fmt;

use crate::{U32x2, U32x4, U64x2, U64x4};

macro_rules! shape_traits {
    ($($name:ident, $uX:ident, $n:expr);*;) => {
        $(
            impl From<[$uX; $n]> for $name {
                /// Creates a value from native words, most significant first
                #[inline]
                fn from(raw: [$uX; $n]) -> Self {
                    Self::from_array(raw)
                }
            }

            impl From<$name> for [$uX; $n] {
                #[inline]
                fn from(x: $name) -> Self {
                    x.to_array()
                }
            }

            impl fmt::Debug for $name {
                /// Forwards to the `LowerHex` impl. We cannot use decimal
                /// because it would require allocation.
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    fmt::LowerHex::fmt(self, f)
                }
            }

            impl fmt::Display for $name {
                /// Forwards to the `Debug` impl
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    fmt::Debug::fmt(self, f)
                }
            }

            impl fmt::LowerHex for $name {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("0x")?;
                    for (i, word) in self.to_u32_array().iter().enumerate() {
                        if i != 0 {
                            f.write_str("_")?;
                        }
                        write!(f, "{word:08x}")?;
                    }
                    write!(f, "_u{}", Self::BITS)
                }
            }

            impl fmt::UpperHex for $name {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("0x")?;
                    for (i, word) in self.to_u32_array().iter().enumerate() {
                        if i != 0 {
                            f.write_str("_")?;
                        }
                        write!(f, "{word:08X}")?;
                    }
                    write!(f, "_u{}", Self::BITS)
                }
            }

            #[cfg(feature = "zeroize_support")]
            impl zeroize::Zeroize for $name {
                fn zeroize(&mut self) {
                    zeroize::Zeroize::zeroize(&mut self.0)
                }
            }
        )*
    };
}

shape_traits!(
    U32x2, u32, 2;
    U32x4, u32, 4;
    U64x2, u64, 2;
    U64x4, u64, 4;
);
