//! Seekable enumeration of an encoded set's expanded sequence.

use crate::codec::Decoder;

/// A maximal run of consecutive set members, `[first, last]` (both inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub first: u64,
    pub last: u64,
}

impl Run {
    /// A run holding a single value.
    #[inline]
    pub fn point(value: u64) -> Run {
        Run {
            first: value,
            last: value,
        }
    }

    /// Number of values in the run. A run spanning the entire u64 domain
    /// wraps to 0, as its true length is not representable.
    #[inline]
    pub fn len(&self) -> u64 {
        self.last.wrapping_sub(self.first).wrapping_add(1)
    }

    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        value >= self.first && value <= self.last
    }
}

/// Walks the canonical run decomposition of one encoded set, with ordinal
/// seeking.
///
/// Unlike the raw [`Decoder`], a cursor folds degenerate wire pairs away:
/// every surfaced run has a nonzero take, and a nonzero skip unless it is the
/// first. The cursor can step by whole runs ([`Cursor::next_skip_take`],
/// [`Cursor::next_interval`]), by single values ([`Cursor::next_value`]), or
/// jump to an ordinal position of the expanded sequence ([`Cursor::seek`])
/// without expanding anything.
///
/// A cursor distinguishes three states: never advanced, mid-stream, and end
/// of stream. End of stream is permanent until [`Cursor::reset`] (or a
/// backward [`Cursor::seek`], which resets internally).
pub struct Cursor<'a> {
    decoder: Decoder<'a>,
    /// Sum of all skips consumed: the count of absent integers before `n`.
    skip_sum: u64,
    /// Values remaining in the current run.
    take: u64,
    /// Next value to yield from the current run.
    n: u64,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(decoder: Decoder<'a>) -> Cursor<'a> {
        Cursor {
            decoder,
            skip_sum: 0,
            take: 0,
            n: 0,
        }
    }

    /// Rewinds to the beginning of the sequence.
    pub fn reset(&mut self) {
        self.decoder.reset();
        self.skip_sum = 0;
        self.take = 0;
        self.n = 0;
    }

    /// True once an advancing call has run off the end of the sequence.
    ///
    /// Both markers are required: a run may legitimately end at `u64::MAX`,
    /// so `n` alone cannot flag the end state.
    #[inline]
    pub fn eos(&self) -> bool {
        self.n == u64::MAX && self.take == u64::MAX
    }

    fn mark_eos(&mut self) {
        self.n = u64::MAX;
        self.take = u64::MAX;
    }

    /// Advances to the next run, returning its normalized (skip, take).
    ///
    /// Zero-take and zero-skip wire pairs are coalesced, so every returned
    /// pair has `take >= 1`, and `skip >= 1` except possibly on the first.
    /// Returns `None` at end of stream.
    pub fn next_skip_take(&mut self) -> Option<(u64, u64)> {
        let mut skip = 0u64;
        let mut take = 0u64;
        // Coalesce zero takes.
        while take == 0 {
            let Some(pair) = self.decoder.next_pair() else {
                self.mark_eos();
                return None;
            };
            skip = skip.wrapping_add(pair.skip);
            take = pair.take;
        }
        // Coalesce zero skips.
        while !self.decoder.eos() && self.decoder.peek_skip() == 0 {
            let Some(pair) = self.decoder.next_pair() else {
                break;
            };
            take = take.wrapping_add(pair.take);
        }
        self.skip_sum = self.skip_sum.wrapping_add(skip);
        self.n = self.n.wrapping_add(self.take).wrapping_add(skip);
        self.take = take;
        Some((skip, take))
    }

    /// Advances to the next run and returns it as an inclusive interval.
    pub fn next_interval(&mut self) -> Option<Run> {
        self.next_skip_take()?;
        Some(self.current_run())
    }

    /// Returns the next single value of the expanded sequence.
    pub fn next_value(&mut self) -> Option<u64> {
        if self.eos() {
            return None;
        }
        if self.take == 0 {
            self.next_skip_take()?;
        }
        let value = self.n;
        self.take -= 1;
        self.n = self.n.wrapping_add(1);
        Some(value)
    }

    /// The current run, priming a never-advanced cursor first. Does not
    /// advance otherwise. After partial consumption through
    /// [`Cursor::next_value`], the reported run starts at the cursor.
    pub fn interval(&mut self) -> Option<Run> {
        if self.eos() {
            return None;
        }
        if self.n == 0 && self.take == 0 {
            self.next_skip_take()?;
        }
        Some(self.current_run())
    }

    /// Seeks to the `pos`-th value of the expanded sequence.
    ///
    /// Returns that value together with the count of consecutive values from
    /// it to the end of its run, exactly the leading (first, len) of the
    /// sequence truncated to start at ordinal `pos`. A following
    /// [`Cursor::next_value`] yields the `pos`-th value itself. Seeking past
    /// the end returns `None` and leaves the cursor at end of stream.
    ///
    /// Seeking within the current run at or past the cursor is O(1); any
    /// other target rescans the encoded form from the start, which is still
    /// sub-linear in the expanded size.
    pub fn seek(&mut self, pos: u64) -> Option<(u64, u64)> {
        if self.eos() {
            self.reset();
        }
        // Ordinal just past the current run.
        let mut take_sum = self.n.wrapping_add(self.take).wrapping_sub(self.skip_sum);
        let cursor_ordinal = take_sum.wrapping_sub(self.take);
        if pos >= cursor_ordinal && pos < take_sum {
            let delta = pos - cursor_ordinal;
            self.n += delta;
            self.take -= delta;
            return Some((self.n, self.take));
        }
        if pos < take_sum {
            self.reset();
            take_sum = 0;
        }
        while take_sum <= pos {
            let (_, take) = self.next_skip_take()?;
            take_sum = take_sum.wrapping_add(take);
        }
        self.take = take_sum - pos;
        self.n = self.skip_sum.wrapping_add(pos);
        Some((self.n, self.take))
    }

    #[inline]
    fn current_run(&self) -> Run {
        Run {
            first: self.n,
            last: self.n.wrapping_add(self.take).wrapping_sub(1),
        }
    }
}

/// Iterator over the expanded values of a set.
pub struct PositionsIter<'a> {
    cursor: Cursor<'a>,
}

impl<'a> PositionsIter<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> PositionsIter<'a> {
        PositionsIter { cursor }
    }
}

impl Iterator for PositionsIter<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.cursor.next_value()
    }
}

/// Iterator over the maximal runs of a set.
pub struct RunsIter<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RunsIter<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> RunsIter<'a> {
        RunsIter { cursor }
    }
}

impl Iterator for RunsIter<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        self.cursor.next_interval()
    }
}
