//! Incremental construction of a [`RunSet`] from raw skip/take instructions
//! or a strictly increasing sequence of absolute values.

use crate::{
    RunSet,
    codec::{EncoderRepr, Encoding},
};

/// Builds a [`RunSet`] by accumulating a pending (skip, take) pair that is
/// flushed to the encoder whenever a discontinuity occurs.
///
/// The builder owns the set it produces; [`Builder::finish`] flushes the
/// pending pair and hands the set back. Feed it either raw instructions
/// ([`Builder::skip`] / [`Builder::take`]) or absolute values
/// ([`Builder::next`]); the two styles can be mixed, as the set-algebra
/// engine does.
pub struct Builder {
    set: RunSet,
    encoder: EncoderRepr,
    /// Next expected absolute value.
    n: u64,
    /// Pending pair, not yet handed to the encoder.
    skip: u64,
    take: u64,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Starts a builder producing a set in the canonical encoding.
    pub fn new() -> Builder {
        Builder::with_encoding(Encoding::default())
    }

    /// Starts a builder producing a set in the given encoding.
    pub fn with_encoding(encoding: Encoding) -> Builder {
        Builder::reuse(RunSet::with_encoding(encoding))
    }

    /// Starts a builder that clears `set` and rebuilds into its allocation.
    pub fn reuse(mut set: RunSet) -> Builder {
        set.clear();
        Builder {
            encoder: EncoderRepr::new(set.encoding()),
            set,
            n: 0,
            skip: 0,
            take: 0,
        }
    }

    /// The next absolute value the builder expects; equivalently, one past
    /// the largest value accepted so far (zero for an empty builder).
    #[inline]
    pub fn next_pos(&self) -> u64 {
        self.n
    }

    /// Skips `skip` values and takes the one after them. A zero skip merges
    /// into the pending take; a nonzero skip flushes the pending pair first.
    ///
    /// Repeated calls do not sum their skips, because of the implied take
    /// between them.
    pub fn skip(&mut self, skip: u64) {
        self.n = self.n.wrapping_add(skip).wrapping_add(1);
        if skip == 0 {
            self.take = self.take.saturating_add(1);
        } else {
            self.flush();
            self.skip = skip;
            self.take = 1;
        }
    }

    /// Extends the pending take by `take` values.
    pub fn take(&mut self, take: u64) {
        self.take = self.take.saturating_add(take);
        self.n = self.n.wrapping_add(take);
    }

    /// Feeds the next absolute value of a strictly increasing sequence,
    /// deriving the skip automatically. Returns `false` and ignores the
    /// value if it is not greater than every value fed so far.
    pub fn next(&mut self, value: u64) -> bool {
        if value < self.n {
            return false;
        }
        self.skip(value - self.n);
        true
    }

    /// Flushes the pending pair and returns the finished set.
    pub fn finish(mut self) -> RunSet {
        self.flush();
        self.set
    }

    fn flush(&mut self) {
        if self.take > 0 {
            self.encoder.add(self.set.bytes_mut(), self.skip, self.take);
            self.skip = 0;
            self.take = 0;
        }
    }
}
