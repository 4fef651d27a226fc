//! Sequential and random-access reading of binary data from an underlying
//! byte source.
//!
//! A [`Tokenizer`] exposes both consuming reads, which advance a logical
//! cursor, and non-consuming peeks, which do not, letting binary-format
//! parsers look ahead before committing to consume bytes. On top of the two
//! raw byte-movement primitives, [`TokenRead`] decodes fixed-width values
//! ("tokens") described by caller-supplied [`TokenReader`] descriptors.
//!
//! Exhaustion is an expected outcome for a probing parser, so it is surfaced
//! as a distinguishable error kind ([`Error::EndOfStream`]) rather than a
//! generic failure; a request for a position behind the cursor is a caller
//! bug and fails with a separate kind, never with end-of-stream.
//!
//! # Examples
//!
//! ```
//! use std::io::Write;
//!
//! use bintok::{TokenRead, TokenReader, Tokenizer};
//!
//! struct U16Le;
//!
//! impl TokenReader for U16Le {
//!     type Value = u16;
//!
//!     fn len(&self) -> usize {
//!         2
//!     }
//!
//!     fn get(&self, bytes: &[u8], offset: usize) -> u16 {
//!         u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut file = tempfile::NamedTempFile::new()?;
//! file.write_all(&[0x2a, 0x00, 0xff, 0xff])?;
//!
//! let mut tokenizer = bintok::from_file(file.path())?;
//!
//! // Look ahead without committing: the cursor stays put.
//! assert_eq!(tokenizer.peek_number(&U16Le)?, 42);
//! assert_eq!(tokenizer.position(), 0);
//!
//! // Consume the same bytes.
//! assert_eq!(tokenizer.read_number(&U16Le)?, 42);
//! assert_eq!(tokenizer.position(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! A single tokenizer instance must not be shared between concurrently
//! running operations; callers are responsible for serializing access.

mod error;
mod file;
mod options;
mod source;
mod token;
mod tokenizer;

#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub mod slice;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use file::{FileTokenizer, from_file};
pub use options::ReadChunkOptions;
pub use source::ReadAt;
pub use token::TokenReader;
pub use tokenizer::{FileInfo, StreamState, TokenRead, Tokenizer};
