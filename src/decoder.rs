//! Bytewords decoding and validation.
//!
//! Decoding scans the input left to right, resolving one token at a
//! time, then verifies the trailing checksum over the recovered bytes.
//! There is no re-synchronization after a malformed token and no partial
//! result on any failure path.

use crate::checksum::{checksum, CHECKSUM_LEN};
use crate::error::BytewordsError;
use crate::types::Style;
use crate::words::word_index;

/// Decode a bytewords string back into the payload it encodes.
///
/// Tokens of the style's width are read in order, with a single
/// separator character consumed after each token where the style uses
/// one. Matching is case-insensitive. After the scan, the last four
/// recovered bytes are interpreted as the embedded checksum and verified
/// against a CRC-32 recomputed over the preceding bytes.
///
/// Trailing input too short to form a full token is treated as
/// corruption and rejected, not silently ignored.
///
/// # Arguments
///
/// * `style` - The rendering style the input was encoded with
/// * `input` - The bytewords string to decode
///
/// # Returns
///
/// The payload with the checksum stripped, or a [`BytewordsError`]:
/// [`InvalidWord`](BytewordsError::InvalidWord) for an unresolvable or
/// structurally broken token, [`TooShort`](BytewordsError::TooShort)
/// when fewer bytes than a checksum were recovered, and
/// [`ChecksumMismatch`](BytewordsError::ChecksumMismatch) when the
/// integrity check fails.
///
/// # Examples
///
/// ```
/// use bytewords::{decode, Style};
///
/// let payload = decode(Style::Standard, "able tied also webs lung").unwrap();
/// assert_eq!(payload, vec![0x00]);
/// ```
pub fn decode(style: Style, input: &str) -> Result<Vec<u8>, BytewordsError> {
    let word_len = style.word_len();
    let separator = style.separator().map(|c| c as u8);
    let bytes = input.as_bytes();

    let mut buf = Vec::with_capacity(bytes.len() / word_len + 1);
    let mut pos = 0;
    while bytes.len() - pos >= word_len {
        let token = &bytes[pos..pos + word_len];
        buf.push(word_index(token, word_len)?);
        pos += word_len;
        if let Some(sep) = separator {
            if pos < bytes.len() && bytes[pos] == sep {
                pos += 1;
            }
        }
    }

    // Leftover characters shorter than one token are corruption, not
    // padding; truncating here would mask transcription errors.
    if pos != bytes.len() {
        return Err(BytewordsError::InvalidWord(
            String::from_utf8_lossy(&bytes[pos..]).into_owned(),
        ));
    }

    if buf.len() < CHECKSUM_LEN {
        return Err(BytewordsError::TooShort);
    }
    let body_len = buf.len() - CHECKSUM_LEN;
    if checksum(&buf[..body_len]) != buf[body_len..] {
        return Err(BytewordsError::ChecksumMismatch);
    }
    buf.truncate(body_len);
    Ok(buf)
}
