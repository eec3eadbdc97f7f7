use core::fmt;

/// The error returned by fallible word access and construction functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CtrError {
    /// A word index was outside of `0..NUM_WORDS` for the requested
    /// granularity. Indexes are never clamped, because a silently wrong word
    /// would corrupt generator output without any other visible signal.
    InvalidIndex,
    /// A slice of words did not have exactly the number of words needed for
    /// the shape at the given granularity
    NonEqualWidths,
}

impl fmt::Display for CtrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[test]
fn display() {
    extern crate std;
    use std::format;
    assert_eq!(format!("{}", CtrError::InvalidIndex), "InvalidIndex");
    assert_eq!(format!("{}", CtrError::NonEqualWidths), "NonEqualWidths");
}
