mod primitives;
#[cfg(feature = "rand_support")]
mod rand;
mod sum;
mod words;
