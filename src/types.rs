//! Core data types for bytewords encoding and decoding.

use std::fmt;

/// The textual rendering style of a bytewords string.
///
/// The style is chosen per call and carries no state; it only determines
/// the token width and the separator placed between tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Space-separated four-letter words. Readable and speakable.
    Standard,
    /// Hyphen-separated four-letter words. Safe inside URI path and
    /// query segments.
    Uri,
    /// Concatenated two-letter codes (first and last letter of each
    /// word) with no separator. Most compact, fixed stride, not
    /// self-delimiting without an external length.
    Minimal,
}

impl Style {
    /// The separator placed between tokens, if any.
    pub fn separator(self) -> Option<char> {
        match self {
            Style::Standard => Some(' '),
            Style::Uri => Some('-'),
            Style::Minimal => None,
        }
    }

    /// The width in characters of a single token in this style.
    pub fn word_len(self) -> usize {
        match self {
            Style::Standard | Style::Uri => 4,
            Style::Minimal => 2,
        }
    }

    /// Look up a style by its lowercase name ("standard", "uri", "minimal").
    pub fn from_name(name: &str) -> Option<Style> {
        match name {
            "standard" => Some(Style::Standard),
            "uri" => Some(Style::Uri),
            "minimal" => Some(Style::Minimal),
            _ => None,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Standard => "standard",
            Style::Uri => "uri",
            Style::Minimal => "minimal",
        };
        f.write_str(name)
    }
}
