use core::mem;

use crate::{U32x2, U32x4, U64x2, U64x4};

// this is tested by `testcrate/tests/rand.rs`

macro_rules! rand_ {
    ($($name:ident, $uX:ident);*;) => {
        $(
            /// `rand_support` functions
            impl $name {
                /// Randomly-assigns `self` using a `rand_core::RngCore` random
                /// number generator. This works by calling
                /// `RngCore::try_fill_bytes` once for every native word, and
                /// returning the first error.
                ///
                /// ```
                /// // Example using the `rand_xoshiro` crate.
                /// use ctrint::prelude::*;
                /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
                ///
                #[doc = concat!("let mut x = ", stringify!($name), "::zero();")]
                /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
                /// x.rand_assign_using(&mut rng).unwrap();
                #[doc = concat!("let mut y = ", stringify!($name), "::zero();")]
                /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
                /// y.rand_assign_using(&mut rng).unwrap();
                /// assert_eq!(x, y);
                /// ```
                pub fn rand_assign_using<R>(&mut self, rng: &mut R) -> Result<(), rand_core::Error>
                where
                    R: rand_core::RngCore,
                {
                    for x in self.0.iter_mut() {
                        let mut bytes = [0u8; mem::size_of::<$uX>()];
                        rng.try_fill_bytes(&mut bytes)?;
                        *x = $uX::from_le_bytes(bytes);
                    }
                    Ok(())
                }

                /// Creates a random value, see
                #[doc = concat!("[", stringify!($name), "::rand_assign_using]")]
                pub fn rand_using<R>(rng: &mut R) -> Result<Self, rand_core::Error>
                where
                    R: rand_core::RngCore,
                {
                    let mut x = Self::zero();
                    x.rand_assign_using(rng)?;
                    Ok(x)
                }
            }
        )*
    };
}

rand_!(
    U32x2, u32;
    U32x4, u32;
    U64x2, u64;
    U64x4, u64;
);
