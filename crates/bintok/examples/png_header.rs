//! Walks the chunk headers of a PNG file, peeking at the signature before
//! committing to consume anything.
//!
//! ```text
//! cargo run --example png_header -- image.png
//! ```

use bintok::{Error, TokenRead, TokenReader, Tokenizer};

struct U32Be;

impl TokenReader for U32Be {
    type Value = u32;

    fn len(&self) -> usize {
        4
    }

    fn get(&self, bytes: &[u8], offset: usize) -> u32 {
        u32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }
}

struct FourCc;

impl TokenReader for FourCc {
    type Value = [u8; 4];

    fn len(&self) -> usize {
        4
    }

    fn get(&self, bytes: &[u8], offset: usize) -> [u8; 4] {
        bytes[offset..offset + 4].try_into().unwrap()
    }
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: png_header <file.png>")?;
    let mut tokenizer = bintok::from_file(&path)?;

    // Peek the signature first: rejecting a non-PNG input costs no cursor
    // movement and no allocation beyond the window itself.
    let mut signature = [0u8; 8];
    tokenizer.peek_buffer(&mut signature, Default::default())?;
    if signature != PNG_SIGNATURE {
        return Err(format!("{path}: not a PNG file").into());
    }
    tokenizer.ignore(8);

    // Each chunk is length + type + payload + CRC; we decode the header and
    // skip the rest.
    loop {
        let length = match tokenizer.read_number(&U32Be) {
            Ok(length) => length,
            Err(Error::EndOfStream) => break,
            Err(err) => return Err(err.into()),
        };
        let kind = tokenizer.read_token(&FourCc)?;
        println!(
            "{} at {} ({} bytes)",
            String::from_utf8_lossy(&kind),
            tokenizer.position() - 8,
            length
        );
        if &kind == b"IEND" {
            break;
        }
        tokenizer.ignore(u64::from(length) + 4);
    }

    Ok(())
}
