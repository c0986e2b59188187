//! Bytewords encoding.
//!
//! Encoding appends the payload's CRC-32 and renders every byte of the
//! resulting buffer as one word (or two-letter code) in the requested
//! style. It never fails for any byte input, including an empty payload,
//! which encodes as exactly the four checksum words.

use crate::checksum::{checksum, CHECKSUM_LEN};
use crate::types::Style;
use crate::words::{minimal_word, word};

/// Encode `payload` as a bytewords string in the given style.
///
/// The payload's 4-byte checksum is appended before rendering, so the
/// output always ends with four checksum tokens after the payload tokens.
/// The output is fully deterministic: the same `(style, payload)` pair
/// always produces the identical string.
///
/// The output length is exact: `5 * N - 1` characters for the separated
/// styles and `2 * N` for minimal, where `N = payload.len() + 4`.
///
/// # Arguments
///
/// * `style` - The rendering style (separator and token width)
/// * `payload` - The bytes to encode; any length, including empty
///
/// # Examples
///
/// ```
/// use bytewords::{encode, Style};
///
/// assert_eq!(encode(Style::Standard, &[0x00]), "able tied also webs lung");
/// assert_eq!(encode(Style::Uri, &[0x00]), "able-tied-also-webs-lung");
/// assert_eq!(encode(Style::Minimal, &[0x00]), "aetdaowslg");
/// ```
pub fn encode(style: Style, payload: &[u8]) -> String {
    let crc = checksum(payload);
    // Saturating arithmetic keeps the capacity a pure hint; the buffer
    // grows if the closed-form length ever overflows usize.
    let total = payload.len().saturating_add(CHECKSUM_LEN);
    let capacity = match style.separator() {
        Some(_) => total.saturating_mul(5).saturating_sub(1),
        None => total.saturating_mul(2),
    };

    let mut out = String::with_capacity(capacity);
    for (i, &byte) in payload.iter().chain(crc.iter()).enumerate() {
        if i > 0 {
            if let Some(sep) = style.separator() {
                out.push(sep);
            }
        }
        match style {
            Style::Standard | Style::Uri => out.push_str(word(byte)),
            Style::Minimal => {
                let code = minimal_word(byte);
                out.push(code[0] as char);
                out.push(code[1] as char);
            }
        }
    }
    out
}
