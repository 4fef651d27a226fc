//! The shared tokenizer contract: position tracking, option normalization,
//! token and number decoding, and skip semantics.
//!
//! Concrete byte sources implement only the two raw byte-movement primitives
//! ([`Tokenizer::read_buffer`] and [`Tokenizer::peek_buffer`]) plus access to
//! their embedded [`StreamState`]; the decoding and bookkeeping layers are
//! provided once, here, in terms of those primitives. Reading and peeking a
//! token are literally symmetric: they share all decode logic and differ
//! only in which primitive moves the bytes. This is the seam where different
//! backing sources plug in without duplicating bookkeeping.
//!
//! The cursor (`position`) counts bytes consumed so far. It is mutated only
//! by consuming reads and by [`Tokenizer::ignore`]; peeks never move it,
//! on success or failure.

use std::path::PathBuf;

use crate::{
    Error, ReadChunkOptions, Result, TokenReader, options::NormalizedReadOptions,
};

/// Metadata about the backing source.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileInfo {
    /// Path of the backing file, when the source is one.
    pub path: Option<PathBuf>,

    /// Total byte length of the source, when known. Used for bounds-aware
    /// skipping.
    pub size: Option<u64>,
}

/// Width of the numeric scratch buffer; the widest fixed-width numeric token.
const NUM_SCRATCH_LEN: usize = 8;

/// State shared by every tokenizer: the logical cursor, source metadata, and
/// the numeric scratch buffer.
///
/// Concrete sources embed one and hand it out through
/// [`Tokenizer::stream`]/[`Tokenizer::stream_mut`].
#[derive(Debug, Default)]
pub struct StreamState {
    position: u64,
    file_info: FileInfo,
    num_scratch: [u8; NUM_SCRATCH_LEN],
}

impl StreamState {
    /// State for a source described by `file_info`, with the cursor at 0.
    #[must_use]
    pub fn new(file_info: FileInfo) -> Self {
        Self {
            position: 0,
            file_info,
            num_scratch: [0; NUM_SCRATCH_LEN],
        }
    }

    /// The logical cursor: bytes consumed so far by reading operations.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Metadata about the backing source.
    #[must_use]
    pub fn file_info(&self) -> &FileInfo {
        &self.file_info
    }

    pub(crate) fn set_position(&mut self, position: u64) {
        self.position = position;
    }

    pub(crate) fn advance(&mut self, bytes: u64) {
        self.position += bytes;
    }

    /// Resolve a request's defaults against the current cursor and the
    /// destination buffer, validating the caller contract: the requested
    /// position must not be behind the cursor, and the destination window
    /// must fit in the buffer.
    pub(crate) fn normalize(
        &self,
        buffer_len: usize,
        options: ReadChunkOptions,
    ) -> Result<NormalizedReadOptions> {
        if let Some(requested) = options.position {
            if requested < self.position {
                return Err(Error::PositionBehindCursor {
                    requested,
                    current: self.position,
                });
            }
        }

        let offset = options.offset.unwrap_or(0);
        let length = options.length.unwrap_or(buffer_len.saturating_sub(offset));

        if offset.checked_add(length).is_none_or(|end| end > buffer_len) {
            return Err(Error::WindowOutOfBounds {
                offset,
                length,
                buffer_len,
            });
        }

        Ok(NormalizedReadOptions {
            offset,
            length,
            position: options.position.unwrap_or(self.position),
            may_be_less: options.may_be_less,
        })
    }
}

/// The read/peek contract every backing source satisfies.
///
/// Implementors supply [`read_buffer`](Tokenizer::read_buffer),
/// [`peek_buffer`](Tokenizer::peek_buffer) and access to an embedded
/// [`StreamState`]; token decoding comes for free through [`TokenRead`].
///
/// Operations issued sequentially observe `position` updates in program
/// order. There is no internal locking: a single instance must not be used
/// from concurrently running operations.
pub trait Tokenizer {
    /// The shared stream state embedded in this source.
    fn stream(&self) -> &StreamState;

    /// Mutable access to the shared stream state.
    fn stream_mut(&mut self) -> &mut StreamState;

    /// Read bytes at `options.position` (default: the cursor) into
    /// `buffer[options.offset..]`, up to `options.length` bytes, advancing
    /// the cursor by the number of bytes actually read.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfStream`] when fewer bytes than requested are available
    /// and [`may_be_less`](ReadChunkOptions::may_be_less) is not set;
    /// [`Error::PositionBehindCursor`] / [`Error::WindowOutOfBounds`] on an
    /// invalid request; adapter failures unchanged.
    fn read_buffer(&mut self, buffer: &mut [u8], options: ReadChunkOptions) -> Result<usize>;

    /// Same as [`read_buffer`](Tokenizer::read_buffer), except the cursor is
    /// never moved, regardless of success or failure.
    ///
    /// # Errors
    ///
    /// Same policy as [`read_buffer`](Tokenizer::read_buffer).
    fn peek_buffer(&mut self, buffer: &mut [u8], options: ReadChunkOptions) -> Result<usize>;

    /// The logical cursor: bytes consumed so far by reading operations.
    fn position(&self) -> u64 {
        self.stream().position()
    }

    /// Metadata about the backing source.
    fn file_info(&self) -> &FileInfo {
        self.stream().file_info()
    }

    /// Advance the cursor by `length` bytes without retrieving them.
    ///
    /// When the source size is known, the skip is clamped to the bytes that
    /// remain; the return value is the number of bytes actually skipped.
    /// Skipping past the end of a known-size source is a benign outcome, not
    /// an error.
    fn ignore(&mut self, length: u64) -> u64 {
        let state = self.stream_mut();
        let skipped = match state.file_info.size {
            Some(size) => length.min(size.saturating_sub(state.position)),
            None => length,
        };
        state.advance(skipped);
        skipped
    }

    /// Release any resources held by the source. After closing, no further
    /// operation is valid.
    ///
    /// # Errors
    ///
    /// Concrete sources may fail while releasing their handle; the default
    /// holds nothing and never fails.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Token and number decoding on top of any [`Tokenizer`].
///
/// Blanket-implemented, so every concrete source gets it for free.
pub trait TokenRead: Tokenizer {
    /// Read and decode `token` at the cursor, consuming its bytes.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfStream`] when fewer than `token.len()` bytes remain;
    /// the cursor still reflects the bytes that were consumed.
    fn read_token<T: TokenReader>(&mut self, token: &T) -> Result<T::Value> {
        self.read_token_at(token, self.position())
    }

    /// Read and decode `token` at `position`, which must not be behind the
    /// cursor. Consuming.
    ///
    /// # Errors
    ///
    /// As [`read_token`](TokenRead::read_token), plus
    /// [`Error::PositionBehindCursor`] for a position behind the cursor.
    fn read_token_at<T: TokenReader>(&mut self, token: &T, position: u64) -> Result<T::Value> {
        let mut buffer = vec![0u8; token.len()];
        let read = self.read_buffer(
            &mut buffer,
            ReadChunkOptions {
                position: Some(position),
                ..ReadChunkOptions::default()
            },
        )?;
        if read < token.len() {
            return Err(Error::EndOfStream);
        }
        Ok(token.get(&buffer, 0))
    }

    /// Decode `token` at the cursor without consuming its bytes.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfStream`] when fewer than `token.len()` bytes remain.
    fn peek_token<T: TokenReader>(&mut self, token: &T) -> Result<T::Value> {
        self.peek_token_at(token, self.position())
    }

    /// Decode `token` at `position` without consuming its bytes.
    ///
    /// # Errors
    ///
    /// As [`peek_token`](TokenRead::peek_token), plus
    /// [`Error::PositionBehindCursor`] for a position behind the cursor.
    fn peek_token_at<T: TokenReader>(&mut self, token: &T, position: u64) -> Result<T::Value> {
        let mut buffer = vec![0u8; token.len()];
        let read = self.peek_buffer(
            &mut buffer,
            ReadChunkOptions {
                position: Some(position),
                ..ReadChunkOptions::default()
            },
        )?;
        if read < token.len() {
            return Err(Error::EndOfStream);
        }
        Ok(token.get(&buffer, 0))
    }

    /// Read and decode a fixed-width numeric token of at most 8 bytes
    /// through the shared scratch buffer, with no transient allocation.
    /// Consuming.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfStream`] when fewer than `token.len()` bytes remain.
    fn read_number<T: TokenReader>(&mut self, token: &T) -> Result<T::Value> {
        let len = token.len();
        debug_assert!(
            len <= NUM_SCRATCH_LEN,
            "numeric token wider than the scratch buffer"
        );
        // The scratch is reused across calls; work on a copy and store it
        // back. Only the first `len` bytes of the window are ever decoded.
        let mut scratch = self.stream().num_scratch;
        let read = self.read_buffer(
            &mut scratch,
            ReadChunkOptions {
                length: Some(len),
                ..ReadChunkOptions::default()
            },
        )?;
        self.stream_mut().num_scratch = scratch;
        if read < len {
            return Err(Error::EndOfStream);
        }
        Ok(token.get(&scratch, 0))
    }

    /// Decode a fixed-width numeric token of at most 8 bytes through the
    /// shared scratch buffer, without consuming its bytes.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfStream`] when fewer than `token.len()` bytes remain.
    fn peek_number<T: TokenReader>(&mut self, token: &T) -> Result<T::Value> {
        let len = token.len();
        debug_assert!(
            len <= NUM_SCRATCH_LEN,
            "numeric token wider than the scratch buffer"
        );
        let mut scratch = self.stream().num_scratch;
        let read = self.peek_buffer(
            &mut scratch,
            ReadChunkOptions {
                length: Some(len),
                ..ReadChunkOptions::default()
            },
        )?;
        self.stream_mut().num_scratch = scratch;
        if read < len {
            return Err(Error::EndOfStream);
        }
        Ok(token.get(&scratch, 0))
    }
}

impl<T: Tokenizer + ?Sized> TokenRead for T {}
