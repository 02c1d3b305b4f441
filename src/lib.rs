//! Compressed sets of u64 values stored as skip/take runs.
//!
//! A [`RunSet`] holds a strictly increasing sequence of integers as an
//! interleaved list of skip and take instructions packed into variable-width
//! bytes, which stays small for the sorted row-id and index-entry lists this
//! representation targets. Sets are enumerated and seeked through [`Cursor`]
//! without expansion, and combined with [`union`], [`intersection`] and
//! [`complement_max`] as pure streaming passes over their encoded forms.

pub mod builder;
pub mod codec;
pub mod cursor;
pub mod error;
pub mod ops;
pub mod run_set;

#[cfg(test)]
mod tests;

pub use builder::Builder;
pub use codec::{Decoder, Encoder, Encoding, Pair};
pub use cursor::{Cursor, PositionsIter, Run, RunsIter};
pub use error::{Error, Result};
pub use ops::{complement, complement_max, intersection, union};
pub use run_set::{RunSet, equal};
