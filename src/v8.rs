//! UUIDv8-related functionality

use crate::typed::typed_uuid;

typed_uuid!(
    /// Represents a custom UUID (version 8).
    ///
    /// The layout of the 122 bits besides the version and variant is left to the application.
    /// The generators of this crate fill them all with random bits; applications with their own
    /// layout can use [`UuidV8::from_custom_fields`].
    UuidV8,
    8
);

impl UuidV8 {
    /// Creates a UUIDv8 from 16 octets, overwriting the version and variant bits.
    pub const fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self::from_laid_out(bytes)
    }

    /// Creates a UUIDv8 from the three application-defined fields `custom_a` (48 bits),
    /// `custom_b` (12 bits), and `custom_c` (62 bits).
    ///
    /// # Panics
    ///
    /// Panics if any argument is out of the range of its field.
    pub const fn from_custom_fields(custom_a: u64, custom_b: u16, custom_c: u64) -> Self {
        if custom_a >= 1 << 48 || custom_b >= 1 << 12 || custom_c >= 1 << 62 {
            panic!("invalid field value");
        }

        let a = custom_a.to_be_bytes();
        let b = custom_b.to_be_bytes();
        let c = custom_c.to_be_bytes();
        Self::from_laid_out([
            a[2], a[3], a[4], a[5], a[6], a[7], b[0], b[1], c[0], c[1], c[2], c[3], c[4], c[5],
            c[6], c[7],
        ])
    }

    /// Returns the three application-defined fields: `custom_a` (48 bits), `custom_b` (12 bits),
    /// and `custom_c` (62 bits).
    pub const fn custom_fields(&self) -> (u64, u16, u64) {
        let b = self.as_bytes();
        (
            u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]]),
            u16::from_be_bytes([b[6] & 0x0f, b[7]]),
            u64::from_be_bytes([b[8] & 0x3f, b[9], b[10], b[11], b[12], b[13], b[14], b[15]]),
        )
    }
}
