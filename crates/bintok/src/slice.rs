//! In-memory contract source for unit tests and the fuzz harness.
//!
//! Not public API: memory-backed sources are out of scope for the crate
//! surface, but the shared core needs a driver that does not touch the
//! filesystem. Compiled only for tests and the `fuzzing` feature.

use crate::{Error, FileInfo, ReadChunkOptions, Result, StreamState, Tokenizer};

/// Slice-backed [`Tokenizer`] with the same cursor semantics as the
/// file-backed source (forward seek before the read, partial progress kept
/// on a short read).
#[derive(Debug)]
pub struct SliceTokenizer {
    data: Vec<u8>,
    stream: StreamState,
}

impl SliceTokenizer {
    /// Tokenizer over `data`, reporting its length as the known source size.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        let size = data.len() as u64;
        Self::with_file_info(
            data,
            FileInfo {
                path: None,
                size: Some(size),
            },
        )
    }

    /// Tokenizer over `data` with caller-chosen metadata, e.g. an unknown
    /// size to exercise unclamped skips.
    #[must_use]
    pub fn with_file_info(data: Vec<u8>, file_info: FileInfo) -> Self {
        Self {
            data,
            stream: StreamState::new(file_info),
        }
    }

    fn copy_window(&self, buffer: &mut [u8], offset: usize, length: usize, position: u64) -> usize {
        let start = usize::try_from(position)
            .unwrap_or(usize::MAX)
            .min(self.data.len());
        let take = length.min(self.data.len() - start);
        buffer[offset..offset + take].copy_from_slice(&self.data[start..start + take]);
        take
    }
}

impl Tokenizer for SliceTokenizer {
    fn stream(&self) -> &StreamState {
        &self.stream
    }

    fn stream_mut(&mut self) -> &mut StreamState {
        &mut self.stream
    }

    fn read_buffer(&mut self, buffer: &mut [u8], options: ReadChunkOptions) -> Result<usize> {
        let norm = self.stream.normalize(buffer.len(), options)?;
        self.stream.set_position(norm.position);
        let read = self.copy_window(buffer, norm.offset, norm.length, norm.position);
        self.stream.advance(read as u64);
        if read < norm.length && !norm.may_be_less {
            return Err(Error::EndOfStream);
        }
        Ok(read)
    }

    fn peek_buffer(&mut self, buffer: &mut [u8], options: ReadChunkOptions) -> Result<usize> {
        let norm = self.stream.normalize(buffer.len(), options)?;
        let read = self.copy_window(buffer, norm.offset, norm.length, norm.position);
        if read < norm.length && !norm.may_be_less {
            return Err(Error::EndOfStream);
        }
        Ok(read)
    }
}
