#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod ordered;
pub mod stable;

#[cfg(feature = "serde")]
mod serde;

pub use ordered::OrderedSet;
pub use stable::StableSet;

/// Error returned by position-based access when the requested position
/// falls outside `[-len, len - 1]`.
///
/// Negative positions count from the end of the set, so the only valid
/// positions for a set of `len` elements are `-len..=len - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The requested position, as given (possibly negative).
    pub index: isize,
    /// Length of the set at the time of the call.
    pub len: usize,
}
impl std::error::Error for OutOfRange {}
impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Error returned by batch position lookups when one of the looked-up
/// elements is not in the set.
///
/// The lookup fails as a whole, no partial result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound {
    /// Position, in the query sequence, of the first absent element.
    pub position: usize,
}
impl std::error::Error for NotFound {}
impl std::fmt::Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
