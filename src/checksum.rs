//! CRC-32 integrity code appended to every encoded payload.

/// Number of checksum bytes appended to the payload before word-encoding.
pub const CHECKSUM_LEN: usize = 4;

/// Compute the 4-byte checksum of `data`.
///
/// This is the standard CRC-32 (the IEEE polynomial used by zip and
/// Ethernet, here via `crc32fast`), serialized in big-endian byte order.
/// Deterministic and pure.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    crc32fast::hash(data).to_be_bytes()
}
