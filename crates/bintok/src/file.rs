//! File-backed tokenizer: reads from a random-access file by offset.

use std::{
    fs::{self, File},
    path::Path,
};

use tracing::{debug, trace};

use crate::{
    Error, FileInfo, ReadAt, ReadChunkOptions, Result, StreamState, Tokenizer,
};

/// Tokenizer over a random-access file, or any other positioned-read source.
///
/// The handle is owned exclusively by the tokenizer; [`close`] is the single
/// release point, after which every operation fails with [`Error::Closed`].
/// Dropping the tokenizer releases the handle as well, so wrapping one in a
/// narrower scope guarantees release on all exit paths.
///
/// [`close`]: Tokenizer::close
#[derive(Debug)]
pub struct FileTokenizer<F: ReadAt = File> {
    source: Option<F>,
    stream: StreamState,
}

impl<F: ReadAt> FileTokenizer<F> {
    /// Wrap an already-open source; the cursor starts at 0.
    #[must_use]
    pub fn new(source: F, file_info: FileInfo) -> Self {
        Self {
            source: Some(source),
            stream: StreamState::new(file_info),
        }
    }

    /// Fill `buf` from `position`, looping until the window is full or the
    /// source reports no more bytes, so a legitimately-partial transfer is
    /// not mistaken for end-of-stream.
    fn read_full(&self, buf: &mut [u8], position: u64) -> Result<usize> {
        let source = self.source.as_ref().ok_or(Error::Closed)?;
        let mut filled = 0;
        while filled < buf.len() {
            let read = source.read_at(&mut buf[filled..], position + filled as u64)?;
            if read == 0 {
                break;
            }
            filled += read;
        }
        Ok(filled)
    }
}

impl<F: ReadAt> Tokenizer for FileTokenizer<F> {
    fn stream(&self) -> &StreamState {
        &self.stream
    }

    fn stream_mut(&mut self) -> &mut StreamState {
        &mut self.stream
    }

    fn read_buffer(&mut self, buffer: &mut [u8], options: ReadChunkOptions) -> Result<usize> {
        let norm = self.stream.normalize(buffer.len(), options)?;
        // Forward seek first: the cursor moves to the requested position
        // before the read, and keeps any partial progress if the read comes
        // up short. Callers catching end-of-stream can use `position()` as
        // the authoritative record of how far the cursor actually moved.
        self.stream.set_position(norm.position);
        let read = self.read_full(
            &mut buffer[norm.offset..norm.offset + norm.length],
            norm.position,
        )?;
        self.stream.advance(read as u64);
        if read < norm.length && !norm.may_be_less {
            trace!(requested = norm.length, read, "short read");
            return Err(Error::EndOfStream);
        }
        Ok(read)
    }

    fn peek_buffer(&mut self, buffer: &mut [u8], options: ReadChunkOptions) -> Result<usize> {
        let norm = self.stream.normalize(buffer.len(), options)?;
        let read = self.read_full(
            &mut buffer[norm.offset..norm.offset + norm.length],
            norm.position,
        )?;
        if read < norm.length && !norm.may_be_less {
            return Err(Error::EndOfStream);
        }
        Ok(read)
    }

    fn close(&mut self) -> Result<()> {
        if self.source.take().is_some() {
            trace!(path = ?self.stream.file_info().path, "closed");
        }
        Ok(())
    }
}

/// Open `path` for reading and construct a [`FileTokenizer`] over it,
/// capturing the file's path and size.
///
/// # Errors
///
/// [`Error::NotAFile`] when the path does not resolve to a regular file;
/// adapter failures (missing path, permissions) propagate unchanged, before
/// any read is attempted.
///
/// # Examples
///
/// ```no_run
/// let tokenizer = bintok::from_file("sample.bin")?;
/// # Ok::<(), bintok::Error>(())
/// ```
pub fn from_file(path: impl AsRef<Path>) -> Result<FileTokenizer> {
    let path = path.as_ref();
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(Error::NotAFile(path.to_path_buf()));
    }
    let file = File::open(path)?;
    debug!(path = %path.display(), size = metadata.len(), "opened file tokenizer");
    Ok(FileTokenizer::new(
        file,
        FileInfo {
            path: Some(path.to_path_buf()),
            size: Some(metadata.len()),
        },
    ))
}
