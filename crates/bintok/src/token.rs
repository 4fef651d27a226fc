/// A fixed-width binary token: a byte length plus a pure decode function.
///
/// Descriptors are passive values supplied by the caller; the tokenizer
/// retrieves [`len`](TokenReader::len) bytes and hands them to
/// [`get`](TokenReader::get). A descriptor is immutable and may be reused
/// across any number of reads and tokenizer instances.
///
/// # Examples
///
/// ```
/// use bintok::TokenReader;
///
/// struct U32Be;
///
/// impl TokenReader for U32Be {
///     type Value = u32;
///
///     fn len(&self) -> usize {
///         4
///     }
///
///     fn get(&self, bytes: &[u8], offset: usize) -> u32 {
///         u32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap())
///     }
/// }
///
/// assert_eq!(U32Be.get(&[0, 0, 1, 0], 0), 256);
/// ```
#[allow(clippy::len_without_is_empty)]
pub trait TokenReader {
    /// The decoded value type.
    type Value;

    /// Number of bytes this token occupies in the stream.
    fn len(&self) -> usize;

    /// Decode the token from exactly [`len`](TokenReader::len) bytes of
    /// `bytes` starting at `offset`.
    ///
    /// Must be pure: identical byte windows decode to identical values.
    fn get(&self, bytes: &[u8], offset: usize) -> Self::Value;
}
