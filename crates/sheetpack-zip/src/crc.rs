//! CRC-32 (IEEE 802.3), the checksum stored in every ZIP header.

/// Reversed form of the IEEE polynomial 0x04C11DB7.
const POLY: u32 = 0xEDB8_8320;

/// Compute the CRC-32 of a byte slice.
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(data);
    hasher.finalize()
}

/// Incremental CRC-32 hasher.
///
/// Feeding data in chunks gives the same result as [`crc32`] over the
/// concatenation.
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    state: u32,
}

impl Crc32 {
    /// Start a new checksum.
    pub fn new() -> Self {
        Self { state: !0 }
    }

    /// Feed more bytes.
    pub fn update(&mut self, data: &[u8]) {
        let mut c = self.state;
        for &byte in data {
            c ^= byte as u32;
            for _ in 0..8 {
                c = if c & 1 != 0 { (c >> 1) ^ POLY } else { c >> 1 };
            }
        }
        self.state = c;
    }

    /// Final checksum value.
    pub fn finalize(self) -> u32 {
        !self.state
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}
