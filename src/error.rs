//! Error types for bytewords decoding operations.

use thiserror::Error;

/// Errors that can occur while decoding a bytewords string.
///
/// Decoding is all-or-nothing: whenever one of these errors is returned,
/// no partial payload is surfaced. Encoding has no error type of its own;
/// it is total for any byte input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BytewordsError {
    /// A token did not resolve to any entry in the word table, or (for
    /// four-letter tokens) its middle letters disagreed with the resolved
    /// entry. Also returned for trailing input too short to form a token.
    #[error("invalid word: {0:?}")]
    InvalidWord(String),

    /// The decoded byte sequence is too short to contain the trailing
    /// 4-byte checksum.
    #[error("decoded data too short to contain a checksum")]
    TooShort,

    /// The checksum recomputed over the recovered payload disagrees with
    /// the checksum embedded in the input.
    #[error("checksum mismatch")]
    ChecksumMismatch,
}
