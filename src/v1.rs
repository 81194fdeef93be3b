//! UUIDv1-related functionality

use crate::codec;
use crate::typed::typed_uuid;

typed_uuid!(
    /// Represents a Gregorian time-based UUID (version 1).
    ///
    /// ```text
    ///  0                   1                   2                   3
    ///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                           time_low                            |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |           time_mid            |  ver  |       time_high       |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |var|         clock_seq         |             node              |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                              node                             |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// ```
    ///
    /// The 60-bit timestamp counts 100-nanosecond intervals since 1582-10-15. The 48-bit node is
    /// filled with random bits by the generators of this crate; it is never read from a network
    /// interface.
    UuidV1,
    1
);

impl UuidV1 {
    /// Creates a UUIDv1 from field values.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit or `clock_seq` is not a 14-bit unsigned integer.
    pub const fn from_fields(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp > codec::MAX_GREGORIAN_TS || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self::from_laid_out([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            (timestamp >> 56) as u8,
            (timestamp >> 48) as u8,
            (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Returns the 60-bit count of 100-nanosecond intervals since 1582-10-15.
    pub const fn timestamp(&self) -> u64 {
        codec::gregorian_ts_v1(self.as_bytes())
    }

    /// Returns the 14-bit clock sequence.
    pub const fn clock_seq(&self) -> u16 {
        codec::clock_seq(self.as_bytes())
    }

    /// Returns the 48-bit node identifier.
    pub fn node(&self) -> [u8; 6] {
        codec::node(self.as_bytes())
    }
}
