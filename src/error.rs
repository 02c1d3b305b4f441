use thiserror::Error;

/// Error type for fallible `runset` operations.
///
/// Most failure modes in this crate are value-encoded rather than surfaced as
/// errors: a malformed byte tail terminates decoding, end-of-stream is `None`,
/// and `Builder::next` reports rejection through its `bool` return. The only
/// operation that produces an `Error` is constructing a set from a sequence of
/// absolute values, which requires strictly increasing input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("non-monotonic input: {value} is less than the next expected value {expected}")]
    NonMonotonic { value: u64, expected: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
