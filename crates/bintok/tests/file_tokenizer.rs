#![allow(missing_docs)]

use std::io::Write;

use bintok::{Error, ReadChunkOptions, TokenRead, TokenReader, Tokenizer};
use rstest::rstest;
use tempfile::NamedTempFile;

struct U32Le;

impl TokenReader for U32Le {
    type Value = u32;

    fn len(&self) -> usize {
        4
    }

    fn get(&self, bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }
}

fn file_with(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn ten_byte_file() -> NamedTempFile {
    file_with(&(0u8..10).collect::<Vec<_>>())
}

#[test]
fn read_peek_read_against_a_real_file() {
    let file = ten_byte_file();
    let mut tok = bintok::from_file(file.path()).unwrap();

    let mut buf = [0u8; 4];
    assert_eq!(tok.read_buffer(&mut buf, ReadChunkOptions::default()).unwrap(), 4);
    assert_eq!(buf, [0, 1, 2, 3]);
    assert_eq!(tok.position(), 4);

    assert_eq!(tok.peek_buffer(&mut buf, ReadChunkOptions::default()).unwrap(), 4);
    assert_eq!(buf, [4, 5, 6, 7]);
    assert_eq!(tok.position(), 4);

    // Requesting more than remains fails, but the cursor records the six
    // bytes that were consumed before the failure.
    let mut large = [0u8; 8];
    let err = tok
        .read_buffer(&mut large, ReadChunkOptions::default())
        .unwrap_err();
    assert!(err.is_end_of_stream());
    assert_eq!(tok.position(), 10);
}

#[test]
fn short_read_then_fail_keeps_partial_progress() {
    let file = file_with(&[0, 1, 2, 3, 4, 5]);
    let mut tok = bintok::from_file(file.path()).unwrap();

    let mut buf = [0u8; 4];
    tok.read_buffer(&mut buf, ReadChunkOptions::default()).unwrap();
    assert_eq!(tok.position(), 4);

    let err = tok
        .read_buffer(&mut buf, ReadChunkOptions::default())
        .unwrap_err();
    assert!(err.is_end_of_stream());
    assert_eq!(tok.position(), 6);
}

#[test]
fn may_be_less_returns_the_available_bytes() {
    let file = ten_byte_file();
    let mut tok = bintok::from_file(file.path()).unwrap();
    tok.ignore(8);

    let mut buf = [0u8; 4];
    let read = tok
        .read_buffer(
            &mut buf,
            ReadChunkOptions {
                may_be_less: true,
                ..ReadChunkOptions::default()
            },
        )
        .unwrap();

    assert_eq!(read, 2);
    assert_eq!(&buf[..2], &[8, 9]);
    assert_eq!(tok.position(), 10);
}

#[test]
fn from_file_on_a_directory_fails_before_any_read() {
    let dir = tempfile::tempdir().unwrap();

    let err = bintok::from_file(dir.path()).unwrap_err();
    assert!(matches!(err, Error::NotAFile(path) if path == dir.path()));
}

#[test]
fn from_file_on_a_missing_path_propagates_io() {
    let dir = tempfile::tempdir().unwrap();

    let err = bintok::from_file(dir.path().join("missing.bin")).unwrap_err();
    assert!(matches!(err, Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound));
}

#[test]
fn from_file_captures_path_and_size() {
    let file = ten_byte_file();
    let tok = bintok::from_file(file.path()).unwrap();

    let info = tok.file_info();
    assert_eq!(info.path.as_deref(), Some(file.path()));
    assert_eq!(info.size, Some(10));
}

#[test]
fn numeric_read_little_endian() {
    let file = file_with(&[0x01, 0x00, 0x00, 0x00]);
    let mut tok = bintok::from_file(file.path()).unwrap();

    assert_eq!(tok.read_number(&U32Le).unwrap(), 1);
    assert_eq!(tok.position(), 4);
}

#[test]
fn token_read_at_a_forward_position() {
    let file = file_with(&[0xFF, 0xFF, 0xFF, 0xFF, 0x2A, 0x00, 0x00, 0x00]);
    let mut tok = bintok::from_file(file.path()).unwrap();

    assert_eq!(tok.peek_token_at(&U32Le, 4).unwrap(), 42);
    assert_eq!(tok.position(), 0);
    assert_eq!(tok.read_token_at(&U32Le, 4).unwrap(), 42);
    assert_eq!(tok.position(), 8);
}

#[rstest]
#[case(3, 100, 7, 10)]
#[case(0, 10, 10, 10)]
#[case(10, 1, 0, 10)]
fn ignore_clamps_to_the_file_size(
    #[case] start: u64,
    #[case] length: u64,
    #[case] expected_skipped: u64,
    #[case] expected_position: u64,
) {
    let file = ten_byte_file();
    let mut tok = bintok::from_file(file.path()).unwrap();

    assert_eq!(tok.ignore(start), start);
    assert_eq!(tok.ignore(length), expected_skipped);
    assert_eq!(tok.position(), expected_position);
}

#[test]
fn operations_after_close_fail_cleanly() {
    let file = ten_byte_file();
    let mut tok = bintok::from_file(file.path()).unwrap();
    tok.close().unwrap();

    let mut buf = [0u8; 4];
    assert!(matches!(
        tok.read_buffer(&mut buf, ReadChunkOptions::default()),
        Err(Error::Closed)
    ));
    assert!(matches!(
        tok.peek_buffer(&mut buf, ReadChunkOptions::default()),
        Err(Error::Closed)
    ));

    // Closing twice is fine.
    tok.close().unwrap();
}

#[test]
fn offset_writes_into_the_middle_of_the_destination() {
    let file = ten_byte_file();
    let mut tok = bintok::from_file(file.path()).unwrap();

    let mut buf = [0xAAu8; 6];
    let read = tok
        .read_buffer(
            &mut buf,
            ReadChunkOptions {
                offset: Some(2),
                length: Some(3),
                ..ReadChunkOptions::default()
            },
        )
        .unwrap();

    assert_eq!(read, 3);
    assert_eq!(buf, [0xAA, 0xAA, 0, 1, 2, 0xAA]);
}

#[test]
fn position_behind_cursor_fails_against_a_file() {
    let file = ten_byte_file();
    let mut tok = bintok::from_file(file.path()).unwrap();
    tok.ignore(5);

    let mut buf = [0u8; 2];
    let err = tok
        .read_buffer(
            &mut buf,
            ReadChunkOptions {
                position: Some(2),
                ..ReadChunkOptions::default()
            },
        )
        .unwrap_err();

    assert!(matches!(
        err,
        Error::PositionBehindCursor {
            requested: 2,
            current: 5
        }
    ));
}
