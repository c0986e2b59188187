//! Bytewords - binary payloads as pronounceable words
//!
//! This crate encodes an arbitrary byte sequence into a string of short
//! pronounceable words and decodes such a string back into the original
//! bytes, detecting transcription errors through an embedded CRC-32
//! checksum. It targets binary data that has to travel over
//! low-bandwidth human channels: voice, handwriting, URI fragments.
//!
//! # Features
//!
//! - **Fixed vocabulary**: 256 four-letter words, one per byte value,
//!   identical across all conforming implementations
//! - **Integrity-checked**: a 4-byte CRC-32 is appended on encode and
//!   verified on decode; corrupted input never decodes silently
//! - **Deterministic**: the same payload and style always produce the
//!   identical string
//! - **Three styles**: speakable, URI-safe, and compact minimal forms
//!
//! # Quick Start
//!
//! ```
//! use bytewords::{encode, decode, Style};
//!
//! let seed = [0x00, 0x01, 0x02, 0x80, 0xff];
//!
//! let spoken = encode(Style::Standard, &seed);
//! assert_eq!(spoken, "able acid also lava zero jade need echo taxi");
//!
//! let compact = encode(Style::Minimal, &seed);
//! assert_eq!(compact, "aeadaolazojendeoti");
//!
//! // Either form round-trips to the original bytes.
//! assert_eq!(decode(Style::Standard, &spoken)?, seed);
//! assert_eq!(decode(Style::Minimal, &compact)?, seed);
//! # Ok::<(), bytewords::BytewordsError>(())
//! ```
//!
//! # Wire Formats
//!
//! | Style    | Separator | Token width | Notes |
//! |----------|-----------|-------------|-------|
//! | standard | space     | 4           | human-readable, speakable |
//! | uri      | hyphen    | 4           | safe inside URI path/query segments |
//! | minimal  | none      | 2           | fixed stride, not self-delimiting |
//!
//! The minimal style uses only the first and last letters of each word,
//! which are unique as a pair across the whole table.
//!
//! # Error Handling
//!
//! Decoding returns `Result<Vec<u8>, BytewordsError>` and is strictly
//! all-or-nothing. Failure cases:
//!
//! - A token that resolves to no table entry, or whose middle letters
//!   disagree with the resolved entry
//! - Fewer decoded bytes than the 4-byte checksum
//! - A checksum that disagrees with the recovered payload
//!
//! Encoding never fails for well-formed byte input of any length,
//! including the empty payload, which encodes as the four checksum words
//! alone.

// Re-export the codec entry points
pub use decoder::decode;
pub use encoder::encode;

// Re-export public types
pub use checksum::checksum;
pub use error::BytewordsError;
pub use types::Style;
pub use words::{minimal_word, word};

// Module declarations
pub mod checksum;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;
pub mod words;
