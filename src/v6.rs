//! UUIDv6-related functionality

use crate::codec;
use crate::typed::typed_uuid;

typed_uuid!(
    /// Represents a reordered Gregorian time-based UUID (version 6).
    ///
    /// This holds the same fields as [`UuidV1`](crate::UuidV1) but stores the 60-bit timestamp
    /// from the most significant bit down, so that the string representations sort in the order
    /// of creation:
    ///
    /// ```text
    ///  0                   1                   2                   3
    ///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                           time_high                           |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |           time_mid            |  ver  |       time_low        |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |var|         clock_seq         |             node              |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                              node                             |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// ```
    UuidV6,
    6
);

impl UuidV6 {
    /// Creates a UUIDv6 from field values.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit or `clock_seq` is not a 14-bit unsigned integer.
    pub const fn from_fields(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp > codec::MAX_GREGORIAN_TS || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self::from_laid_out([
            (timestamp >> 52) as u8,
            (timestamp >> 44) as u8,
            (timestamp >> 36) as u8,
            (timestamp >> 28) as u8,
            (timestamp >> 20) as u8,
            (timestamp >> 12) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
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
        codec::gregorian_ts_v6(self.as_bytes())
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
