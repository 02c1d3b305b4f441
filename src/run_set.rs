//! Owning container for a compressed sequence of strictly increasing u64
//! values.
//!
//! A [`RunSet`] stores the sequence as alternating skip/take runs packed into
//! a byte buffer; long runs of consecutive values separated by gaps compress
//! to a handful of bytes regardless of how many values they cover.
//!
//! Key properties
//! - Append-only during construction (via [`crate::Builder`] or an
//!   [`Encoder`]), immutable for consumers thereafter.
//! - Any number of concurrent read-only consumers (decoders, cursors,
//!   set-algebra passes) are independent and safe.
//! - Two sets holding the same values may differ byte-for-byte (different
//!   encodings, different splits of continuation pairs); [`equal`] and the
//!   `PartialEq` impl compare the canonical view instead of the bytes.
//!
//! Typical usage
//! - Construct with [`RunSet::from_values`], [`RunSet::from_ranges`] or a
//!   [`crate::Builder`].
//! - Combine with [`crate::union`], [`crate::intersection`],
//!   [`crate::complement_max`].
//! - Enumerate with [`RunSet::positions`], [`RunSet::runs`] or a seekable
//!   [`Cursor`].

use std::fmt;
use std::ops::Range;

use itertools::Itertools;

use crate::{
    Builder,
    codec::{Decoder, Encoder, Encoding},
    cursor::{Cursor, PositionsIter, RunsIter},
    error::{Error, Result},
};

/// A compressed, immutable-once-built set of u64 values, held as an opaque
/// byte sequence in one of the [`Encoding`] formats.
#[derive(Debug, Clone, Default)]
pub struct RunSet {
    bytes: Vec<u8>,
    encoding: Encoding,
}

impl RunSet {
    /// Creates an empty set in the canonical encoding.
    pub fn new() -> RunSet {
        RunSet::with_encoding(Encoding::default())
    }

    /// Creates an empty set in the given encoding.
    pub fn with_encoding(encoding: Encoding) -> RunSet {
        RunSet {
            bytes: Vec::new(),
            encoding,
        }
    }

    /// Wraps an existing encoded byte sequence without validating it. A
    /// malformed tail is tolerated by every consumer and terminates the
    /// stream early.
    pub fn from_bytes(bytes: Vec<u8>, encoding: Encoding) -> RunSet {
        RunSet { bytes, encoding }
    }

    /// Builds a set from a strictly increasing sequence of values.
    ///
    /// Fails with [`Error::NonMonotonic`] on the first value that is not
    /// greater than its predecessor.
    pub fn from_values(values: impl IntoIterator<Item = u64>) -> Result<RunSet> {
        let mut builder = Builder::new();
        for value in values {
            if !builder.next(value) {
                return Err(Error::NonMonotonic {
                    value,
                    expected: builder.next_pos(),
                });
            }
        }
        Ok(builder.finish())
    }

    /// Builds a set from half-open ranges sorted by start.
    ///
    /// Adjacent and overlapping ranges are merged; empty ranges are ignored;
    /// a range starting below the values already covered is dropped.
    pub fn from_ranges(ranges: impl IntoIterator<Item = Range<u64>>) -> RunSet {
        let mut builder = Builder::new();
        let merged = ranges
            .into_iter()
            .filter(|r| !r.is_empty())
            .coalesce(|prev, next| {
                if next.start <= prev.end {
                    Ok(prev.start..prev.end.max(next.end))
                } else {
                    Err((prev, next))
                }
            });
        for range in merged {
            if builder.next(range.start) {
                builder.take(range.end - range.start - 1);
            }
        }
        builder.finish()
    }

    /// Builds a set from alternating raw skip and take values, bypassing the
    /// builder's normalization. A trailing skip without its take is ignored.
    pub fn from_raw_pairs(pairs: &[u64]) -> RunSet {
        let mut set = RunSet::new();
        let mut encoder = set.encoder();
        for pair in pairs.chunks_exact(2) {
            encoder.add(pair[0], pair[1]);
        }
        set
    }

    /// The encoding this set was created with.
    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The encoded byte sequence. Suitable for persistence as-is; rebuild
    /// with [`RunSet::from_bytes`] and the same encoding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> &mut Vec<u8> {
        &mut self.bytes
    }

    /// A decoder over the raw pair stream, positioned at the start.
    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.bytes, self.encoding)
    }

    /// An encoder appending at the end. See [`Encoder`] for the caveat on
    /// encoding onto a non-empty set.
    pub fn encoder(&mut self) -> Encoder<'_> {
        let encoding = self.encoding;
        Encoder::new(&mut self.bytes, encoding)
    }

    /// A seekable cursor over the canonical run decomposition.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.decoder())
    }

    /// Iterates the expanded values.
    pub fn positions(&self) -> PositionsIter<'_> {
        PositionsIter::new(self.cursor())
    }

    /// Iterates the maximal runs.
    pub fn runs(&self) -> RunsIter<'_> {
        RunsIter::new(self.cursor())
    }

    /// Truncates to the empty set without releasing capacity.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Number of values in the expanded sequence.
    pub fn len(&self) -> u64 {
        let mut decoder = self.decoder();
        let mut len = 0u64;
        while let Some(pair) = decoder.next_pair() {
            len = len.wrapping_add(pair.take);
        }
        len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes the expanded sequence.
    ///
    /// Caution: the result of a complement can cover nearly the whole u64
    /// domain; expanding such a set is an allocation of its [`RunSet::len`],
    /// not of its encoded size.
    pub fn expand(&self) -> Vec<u64> {
        let mut output = Vec::with_capacity(self.len() as usize);
        output.extend(self.positions());
        output
    }

    /// The raw pair stream as alternating skip and take values.
    pub fn to_raw_pairs(&self) -> Vec<u64> {
        let mut decoder = self.decoder();
        let mut pairs = Vec::new();
        while let Some(pair) = decoder.next_pair() {
            pairs.push(pair.skip);
            pairs.push(pair.take);
        }
        pairs
    }

    /// Renders the values as a list of runs, single-value runs bare:
    /// `"10, 12, [20 - 24]"`.
    ///
    /// With `max_len = Some(n)`, output exceeding `n` characters is cut and
    /// terminated with `"..."`; `None` renders everything.
    pub fn format(&self, max_len: Option<usize>) -> String {
        let mut out = String::new();
        let mut cursor = self.cursor();
        let mut remaining = max_len;
        let mut first = true;
        while cursor.next_skip_take().is_some() {
            let Some(run) = cursor.interval() else {
                break;
            };
            let piece = if run.last <= run.first {
                format!("{}", run.first)
            } else {
                format!("[{} - {}]", run.first, run.last)
            };
            if let Some(budget) = remaining {
                // Reserve room for a separator and a possible ellipsis.
                let needed = piece.len() + if first { 0 } else { 2 } + 3;
                if budget < needed {
                    if budget >= 3 {
                        out.push_str("...");
                    }
                    break;
                }
                remaining = Some(budget.saturating_sub(piece.len() + 2));
            }
            if !first {
                out.push_str(", ");
            }
            out.push_str(&piece);
            first = false;
        }
        out
    }
}

impl fmt::Display for RunSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Some(120)))
    }
}

/// True if two sets hold the same values, regardless of encoding or byte
/// representation.
///
/// Comparison walks both cursors' canonical views in lock-step; raw decoder
/// output would distinguish sets that merely split their runs differently.
pub fn equal(a: &RunSet, b: &RunSet) -> bool {
    let mut a = a.cursor();
    let mut b = b.cursor();
    loop {
        match (a.next_skip_take(), b.next_skip_take()) {
            (None, None) => return true,
            (a_run, b_run) if a_run == b_run => {}
            _ => return false,
        }
    }
}

impl PartialEq for RunSet {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

impl Eq for RunSet {}
