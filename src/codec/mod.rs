//! Byte formats for skip/take pair streams.
//!
//! A pair stream is a sequence of `(skip, take)` instructions; expanding it
//! skips `skip` integers and then takes the next `take` consecutive ones.
//! Three formats encode such a stream, behind one dispatching
//! [`Decoder`]/[`Encoder`] surface:
//! - [`Encoding::Split`]: tagged varints with run-length shortcuts. Canonical;
//!   every set this crate builds uses it.
//! - [`Encoding::Plain`]: bare varint alternations, protobuf-style.
//! - [`Encoding::Packed`]: legacy little-endian u32 words with escape rules.
//!
//! Decoders are best-effort scanners: a truncated tail terminates the stream
//! instead of failing. Degenerate zero-skip and zero-take pairs are legal on
//! the wire; [`crate::Cursor`] is the layer that folds them into a canonical
//! view.

mod packed;
mod plain;
mod split;
pub mod varint;

use packed::{PackedDecoder, PackedEncoder};
use plain::{PlainDecoder, PlainEncoder};
use split::{SplitDecoder, SplitEncoder};

/// Identifies the byte format of a [`crate::RunSet`].
///
/// Selected once at construction time; all decoders, encoders and cursors of
/// a set speak the format the set was created with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Tagged varints with value−1 storage, leading-zero-skip suppression and
    /// repeated-take elision. Best compression; the default.
    #[default]
    Split,
    /// Plain unsigned varints laid out as (skip, take) alternations.
    Plain,
    /// Little-endian u32 pairs with 64-bit escape rules. Wire compatibility
    /// only.
    Packed,
}

/// A raw (skip, take) instruction as stored on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    /// Count of integers absent from the set before the next run.
    pub skip: u64,
    /// Count of consecutive integers present in the current run.
    pub take: u64,
}

/// Streaming reader of the raw pair sequence of one encoded set.
///
/// `next_pair` surfaces pairs exactly as encoded, including zero-skip and
/// zero-take degenerates where the format admits them; `None` means end of
/// stream. Multiple decoders over the same set are independent.
pub struct Decoder<'a> {
    repr: DecoderRepr<'a>,
}

enum DecoderRepr<'a> {
    Split(SplitDecoder<'a>),
    Plain(PlainDecoder<'a>),
    Packed(PackedDecoder<'a>),
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(buf: &'a [u8], encoding: Encoding) -> Decoder<'a> {
        let repr = match encoding {
            Encoding::Split => DecoderRepr::Split(SplitDecoder::new(buf)),
            Encoding::Plain => DecoderRepr::Plain(PlainDecoder::new(buf)),
            Encoding::Packed => DecoderRepr::Packed(PackedDecoder::new(buf)),
        };
        Decoder { repr }
    }

    /// Returns the next raw pair, or `None` at end of stream.
    pub fn next_pair(&mut self) -> Option<Pair> {
        match &mut self.repr {
            DecoderRepr::Split(d) => d.next_pair(),
            DecoderRepr::Plain(d) => d.next_pair(),
            DecoderRepr::Packed(d) => d.next_pair(),
        }
    }

    /// Reports the skip of the next pair without advancing. Zero means the
    /// next pair continues the current run; any nonzero value (including the
    /// sentinel returned at end of stream or on a malformed tail) means a
    /// discontinuity.
    pub fn peek_skip(&self) -> u64 {
        match &self.repr {
            DecoderRepr::Split(d) => d.peek_skip(),
            DecoderRepr::Plain(d) => d.peek_skip(),
            DecoderRepr::Packed(d) => d.peek_skip(),
        }
    }

    /// True once every pair has been surfaced. Unlike a cursor, this is true
    /// before the final `next_pair` call returns `None`.
    pub fn eos(&self) -> bool {
        match &self.repr {
            DecoderRepr::Split(d) => d.eos(),
            DecoderRepr::Plain(d) => d.eos(),
            DecoderRepr::Packed(d) => d.eos(),
        }
    }

    /// Rewinds to the start of the stream.
    pub fn reset(&mut self) {
        match &mut self.repr {
            DecoderRepr::Split(d) => d.reset(),
            DecoderRepr::Plain(d) => d.reset(),
            DecoderRepr::Packed(d) => d.reset(),
        }
    }
}

/// Streaming writer appending raw pairs to one encoded set.
///
/// An encoder must be the only writer a set sees over its lifetime: the
/// canonical format elides entries against earlier ones, so a fresh encoder
/// over a non-empty set may elide against the wrong state.
pub struct Encoder<'a> {
    repr: EncoderRepr,
    target: &'a mut Vec<u8>,
}

pub(crate) enum EncoderRepr {
    Split(SplitEncoder),
    Plain(PlainEncoder),
    Packed(PackedEncoder),
}

impl<'a> Encoder<'a> {
    pub(crate) fn new(target: &'a mut Vec<u8>, encoding: Encoding) -> Encoder<'a> {
        Encoder {
            repr: EncoderRepr::new(encoding),
            target,
        }
    }

    /// Appends one (skip, take) pair.
    pub fn add(&mut self, skip: u64, take: u64) {
        self.repr.add(self.target, skip, take);
    }
}

impl EncoderRepr {
    pub(crate) fn new(encoding: Encoding) -> EncoderRepr {
        match encoding {
            Encoding::Split => EncoderRepr::Split(SplitEncoder::new()),
            Encoding::Plain => EncoderRepr::Plain(PlainEncoder::new()),
            Encoding::Packed => EncoderRepr::Packed(PackedEncoder::new()),
        }
    }

    pub(crate) fn add(&mut self, target: &mut Vec<u8>, skip: u64, take: u64) {
        match self {
            EncoderRepr::Split(e) => e.add(target, skip, take),
            EncoderRepr::Plain(e) => e.add(target, skip, take),
            EncoderRepr::Packed(e) => e.add(target, skip, take),
        }
    }
}
