//! The canonical byte format: tagged varints with run-length shortcuts.
//!
//! Every entry is a tagged varint classified as SKIP or TAKE. The format
//! leans on the expected statistics of run-encoded sequences:
//! - Skips of zero are rare except at the very start, so a leading zero skip
//!   is suppressed entirely (a list that contains 0 starts with a TAKE entry,
//!   and the decoder infers the zero skip).
//! - Takes of zero are rare, so both skips and takes are stored as value − 1;
//!   a literal zero round-trips as the maximum u64 payload, legal but larger.
//! - Consecutive takes often repeat, so a take equal to the previous one is
//!   omitted and the decoder reuses its last seen take.

use crate::codec::{
    Pair,
    varint::{self, Flag},
};

pub(crate) struct SplitDecoder<'a> {
    buf: &'a [u8],
    pos: usize,
    /// Most recent take, stored as take − 1 so the zero state means "one".
    last_take: u64,
}

impl<'a> SplitDecoder<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> SplitDecoder<'a> {
        SplitDecoder {
            buf,
            pos: 0,
            last_take: 0,
        }
    }

    pub(crate) fn next_pair(&mut self) -> Option<Pair> {
        let Some((value, flag)) = varint::read_tagged(self.buf, &mut self.pos) else {
            // Clean end, or a truncated trailing entry; either way the
            // stream is over.
            self.pos = self.buf.len();
            return None;
        };
        match flag {
            Flag::Skip => {
                let skip = value.wrapping_add(1);
                let mut peek = self.pos;
                if let Some((value, Flag::Take)) = varint::read_tagged(self.buf, &mut peek) {
                    self.last_take = value;
                    self.pos = peek;
                }
                Some(Pair {
                    skip,
                    take: self.last_take.wrapping_add(1),
                })
            }
            Flag::Take => {
                // Implicit zero-skip entry.
                self.last_take = value;
                Some(Pair {
                    skip: 0,
                    take: value.wrapping_add(1),
                })
            }
        }
    }

    pub(crate) fn peek_skip(&self) -> u64 {
        let mut peek = self.pos;
        match varint::read_tagged(self.buf, &mut peek) {
            Some((value, Flag::Skip)) => value.wrapping_add(1),
            Some((_, Flag::Take)) => 0,
            None => u64::MAX,
        }
    }

    pub(crate) fn eos(&self) -> bool {
        self.pos >= self.buf.len()
    }

    pub(crate) fn reset(&mut self) {
        self.pos = 0;
        self.last_take = 0;
    }
}

pub(crate) struct SplitEncoder {
    /// Mirrors the decoder: the last emitted take, stored as take − 1.
    last_take: u64,
}

impl SplitEncoder {
    pub(crate) fn new() -> SplitEncoder {
        SplitEncoder { last_take: 0 }
    }

    pub(crate) fn add(&mut self, target: &mut Vec<u8>, skip: u64, take: u64) {
        let emit_skip = skip != 0 || !target.is_empty();
        if emit_skip {
            varint::write_tagged(target, skip.wrapping_sub(1), Flag::Skip);
        }
        let take = take.wrapping_sub(1);
        if !emit_skip || take != self.last_take {
            varint::write_tagged(target, take, Flag::Take);
            self.last_take = take;
        }
    }
}
