//! Per-request options for `read_buffer`/`peek_buffer`.

/// Options describing one read or peek request.
///
/// Every field has a default derived from the destination buffer and the
/// tokenizer's cursor, so `ReadChunkOptions::default()` means "fill the whole
/// buffer from the current position, failing on a short read".
///
/// # Examples
///
/// ```
/// use bintok::ReadChunkOptions;
///
/// // Read up to 4 bytes ahead of the cursor, tolerating a short read.
/// let options = ReadChunkOptions {
///     length: Some(4),
///     may_be_less: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadChunkOptions {
    /// Byte offset into the destination buffer where received bytes are
    /// written. Defaults to 0.
    pub offset: Option<usize>,

    /// Number of bytes requested. Defaults to the destination buffer length
    /// minus `offset`. An explicit `Some(0)` requests nothing and is honored
    /// as such.
    pub length: Option<usize>,

    /// Absolute source position to read from. Defaults to the tokenizer's
    /// current position; a position behind it is a caller-contract violation
    /// and fails with [`Error::PositionBehindCursor`](crate::Error::PositionBehindCursor).
    pub position: Option<u64>,

    /// Permit a short read: when set, obtaining fewer bytes than requested
    /// succeeds with the smaller count instead of signalling end-of-stream.
    pub may_be_less: bool,
}

/// A request with every default resolved and the caller contract validated.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NormalizedReadOptions {
    pub offset: usize,
    pub length: usize,
    pub position: u64,
    pub may_be_less: bool,
}
