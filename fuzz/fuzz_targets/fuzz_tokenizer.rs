#![no_main]

//! Drives arbitrary operation sequences against the in-memory contract
//! source and checks the tokenizer invariants against a byte-exact model:
//! consuming reads advance the cursor by exactly the bytes read, peeks never
//! move it, skips clamp to the known size, and every retrieved window
//! matches the backing data.

use arbitrary::Arbitrary;
use bintok::{ReadChunkOptions, TokenRead, TokenReader, Tokenizer, slice::SliceTokenizer};
use libfuzzer_sys::fuzz_target;

/// Little-endian unsigned integer of a runtime-chosen width (1..=8 bytes).
struct VarUintLe(usize);

impl TokenReader for VarUintLe {
    type Value = u64;

    fn len(&self) -> usize {
        self.0
    }

    fn get(&self, bytes: &[u8], offset: usize) -> u64 {
        let mut raw = [0u8; 8];
        raw[..self.0].copy_from_slice(&bytes[offset..offset + self.0]);
        u64::from_le_bytes(raw)
    }
}

#[derive(Arbitrary, Debug)]
enum Op {
    Read { len: u8, may_be_less: bool },
    Peek { len: u8, may_be_less: bool },
    ReadAhead { skip: u8, len: u8 },
    Ignore { len: u8 },
    ReadNumber { width: u8 },
    PeekNumber { width: u8 },
}

#[derive(Arbitrary, Debug)]
struct Case {
    data: Vec<u8>,
    ops: Vec<Op>,
}

fuzz_target!(|case: Case| {
    let size = case.data.len() as u64;
    let data = case.data.clone();
    let mut tok = SliceTokenizer::new(case.data);

    for op in case.ops {
        let before = tok.position();
        match op {
            Op::Read { len, may_be_less } => {
                let len = usize::from(len);
                let available = size.saturating_sub(before).min(len as u64);
                let mut buf = vec![0u8; len];
                let res = tok.read_buffer(
                    &mut buf,
                    ReadChunkOptions {
                        may_be_less,
                        ..Default::default()
                    },
                );
                if may_be_less || available == len as u64 {
                    let read = res.expect("in-bounds read must succeed");
                    assert_eq!(read as u64, available);
                    if read > 0 {
                        let start = before as usize;
                        assert_eq!(&buf[..read], &data[start..start + read]);
                    }
                } else {
                    assert!(res.unwrap_err().is_end_of_stream());
                }
                // Partial progress is kept even when the read fails.
                assert_eq!(tok.position(), before + available);
            }
            Op::Peek { len, may_be_less } => {
                let len = usize::from(len);
                let available = size.saturating_sub(before).min(len as u64);
                let mut buf = vec![0u8; len];
                let res = tok.peek_buffer(
                    &mut buf,
                    ReadChunkOptions {
                        may_be_less,
                        ..Default::default()
                    },
                );
                if may_be_less || available == len as u64 {
                    assert_eq!(res.expect("in-bounds peek must succeed") as u64, available);
                } else {
                    assert!(res.unwrap_err().is_end_of_stream());
                }
                assert_eq!(tok.position(), before);
            }
            Op::ReadAhead { skip, len } => {
                let position = before + u64::from(skip);
                let available = size.saturating_sub(position).min(u64::from(len));
                let mut buf = vec![0u8; usize::from(len)];
                let read = tok
                    .read_buffer(
                        &mut buf,
                        ReadChunkOptions {
                            position: Some(position),
                            may_be_less: true,
                            ..Default::default()
                        },
                    )
                    .expect("forward seek with may_be_less must succeed");
                assert_eq!(read as u64, available);
                assert_eq!(tok.position(), position + available);
            }
            Op::Ignore { len } => {
                let skipped = tok.ignore(u64::from(len));
                assert_eq!(skipped, u64::from(len).min(size.saturating_sub(before)));
                assert_eq!(tok.position(), before + skipped);
            }
            Op::ReadNumber { width } => {
                let width = usize::from(width % 8) + 1;
                let available = size.saturating_sub(before).min(width as u64);
                match tok.read_number(&VarUintLe(width)) {
                    Ok(value) => {
                        assert_eq!(available, width as u64);
                        let start = before as usize;
                        let mut raw = [0u8; 8];
                        raw[..width].copy_from_slice(&data[start..start + width]);
                        assert_eq!(value, u64::from_le_bytes(raw));
                    }
                    Err(err) => {
                        assert!(err.is_end_of_stream());
                        assert!(available < width as u64);
                    }
                }
                assert_eq!(tok.position(), before + available);
            }
            Op::PeekNumber { width } => {
                let width = usize::from(width % 8) + 1;
                let _ = tok.peek_number(&VarUintLe(width));
                assert_eq!(tok.position(), before);
            }
        }
    }
});
