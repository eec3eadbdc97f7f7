mod shapes;
mod traits;

pub use shapes::{U32x2, U32x4, U64x2, U64x4};
