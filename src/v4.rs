//! UUIDv4-related functionality

use crate::typed::typed_uuid;

typed_uuid!(
    /// Represents a random UUID (version 4).
    ///
    /// All bits other than the four version bits and the two variant bits come from a
    /// cryptographically strong random number generator.
    UuidV4,
    4
);

impl UuidV4 {
    /// Creates a UUIDv4 from 16 random octets, overwriting the version and variant bits.
    pub const fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self::from_laid_out(bytes)
    }
}
