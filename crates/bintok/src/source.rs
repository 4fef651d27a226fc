//! The byte-source adapter: positioned reads against random-access sources.

use std::{fs::File, io};

/// One positioned read against a random-access byte source.
///
/// This is the seam between the file-backed tokenizer and the platform's
/// low-level read primitive. The position is explicit per call; an
/// implementation must not rely on any cursor of its own, and a return of
/// `Ok(0)` means no bytes are available at `position`.
pub trait ReadAt {
    /// Read up to `buf.len()` bytes at absolute `position` into `buf`,
    /// returning the number of bytes read.
    ///
    /// # Errors
    ///
    /// Any failure of the underlying source, propagated unchanged.
    fn read_at(&self, buf: &mut [u8], position: u64) -> io::Result<usize>;
}

#[cfg(unix)]
impl ReadAt for File {
    fn read_at(&self, buf: &mut [u8], position: u64) -> io::Result<usize> {
        std::os::unix::fs::FileExt::read_at(self, buf, position)
    }
}

#[cfg(windows)]
impl ReadAt for File {
    fn read_at(&self, buf: &mut [u8], position: u64) -> io::Result<usize> {
        std::os::windows::fs::FileExt::seek_read(self, buf, position)
    }
}
