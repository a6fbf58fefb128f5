//! Little-endian framing of the 32-bit counter.
//!
//! A frame is the 4-byte little-endian encoding of a `u32`. Frames exist
//! only transiently inside the queue; they are never persisted or sent over
//! a wire, so there is no header, magic, or checksum, just the payload.

/// Number of bytes in one encoded frame.
pub const FRAME_SIZE: usize = 4;

/// Encode a counter value as a 4-byte little-endian frame.
///
/// Byte 0 is the least significant byte.
#[inline]
pub const fn encode(value: u32) -> [u8; FRAME_SIZE] {
    value.to_le_bytes()
}

/// Decode a 4-byte little-endian frame back into a counter value.
///
/// Exact inverse of [`encode`] for every `u32`, including 0 and `u32::MAX`.
#[inline]
pub const fn decode(bytes: [u8; FRAME_SIZE]) -> u32 {
    u32::from_le_bytes(bytes)
}
