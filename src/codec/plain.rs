//! Plain varint format: bare (skip, take) varint alternations.
//!
//! Simpler and somewhat larger on the wire than the canonical tagged format.
//! The decoder fuses zero-skip continuation pairs into the running take, so a
//! take split across several pairs surfaces as one.

use crate::codec::{Pair, varint};

pub(crate) struct PlainDecoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> PlainDecoder<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> PlainDecoder<'a> {
        PlainDecoder { buf, pos: 0 }
    }

    pub(crate) fn next_pair(&mut self) -> Option<Pair> {
        let Some(skip) = varint::read(self.buf, &mut self.pos) else {
            self.pos = self.buf.len();
            return None;
        };
        let Some(mut take) = varint::read(self.buf, &mut self.pos) else {
            // An odd (skip-only) tail still surfaces the skip; the stream
            // ends on the following call.
            self.pos = self.buf.len();
            return Some(Pair { skip, take: 0 });
        };

        // Fuse zero-skip continuations into the running take.
        loop {
            let mut peek = self.pos;
            if varint::read(self.buf, &mut peek) != Some(0) {
                break;
            }
            let Some(extra) = varint::read(self.buf, &mut peek) else {
                break;
            };
            take = take.wrapping_add(extra);
            self.pos = peek;
        }
        Some(Pair { skip, take })
    }

    pub(crate) fn peek_skip(&self) -> u64 {
        let mut peek = self.pos;
        varint::read(self.buf, &mut peek).unwrap_or(u64::MAX)
    }

    pub(crate) fn eos(&self) -> bool {
        self.pos >= self.buf.len()
    }

    pub(crate) fn reset(&mut self) {
        self.pos = 0;
    }
}

pub(crate) struct PlainEncoder;

impl PlainEncoder {
    pub(crate) fn new() -> PlainEncoder {
        PlainEncoder
    }

    pub(crate) fn add(&mut self, target: &mut Vec<u8>, skip: u64, take: u64) {
        varint::write(target, skip);
        varint::write(target, take);
    }
}
