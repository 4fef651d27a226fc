use std::{io, path::PathBuf};

use thiserror::Error;

/// Alias for results produced by tokenizer operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures surfaced by tokenizer operations.
///
/// Adapter-level I/O failures propagate unchanged through the [`Io`] variant;
/// nothing is wrapped, retried, or suppressed at this layer.
///
/// [`Io`]: Error::Io
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Fewer bytes were available than requested and the caller did not opt
    /// into partial results via [`may_be_less`].
    ///
    /// This is the normal "no more data" signal for parsers probing ahead,
    /// not an exceptional condition.
    ///
    /// [`may_be_less`]: crate::ReadChunkOptions::may_be_less
    #[error("unexpected end of stream")]
    EndOfStream,

    /// A requested read position lies behind the tokenizer's current
    /// position. The cursor only moves forward; asking for earlier bytes is
    /// a caller bug, distinct from end-of-stream.
    #[error("requested position {requested} is behind the current position {current}")]
    PositionBehindCursor {
        /// The position the caller asked for.
        requested: u64,
        /// The tokenizer's cursor at the time of the request.
        current: u64,
    },

    /// The requested destination window (`offset + length`) does not fit in
    /// the destination buffer.
    #[error("destination window {offset}+{length} exceeds buffer of {buffer_len} bytes")]
    WindowOutOfBounds {
        /// Requested offset into the destination buffer.
        offset: usize,
        /// Requested number of bytes.
        length: usize,
        /// Actual destination buffer length.
        buffer_len: usize,
    },

    /// The path given to [`from_file`](crate::from_file) does not refer to a
    /// regular file.
    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The tokenizer was used after [`close`](crate::Tokenizer::close).
    #[error("tokenizer used after close")]
    Closed,

    /// A failure of the underlying byte source, propagated unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this error is the end-of-stream signal.
    ///
    /// Parsers that probe ahead typically treat end-of-stream as a normal
    /// outcome and everything else as fatal.
    #[must_use]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Error::EndOfStream)
    }
}
