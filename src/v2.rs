//! UUIDv2-related functionality

use std::{fmt, str};

use crate::typed::typed_uuid;
use crate::{codec, Error};

typed_uuid!(
    /// Represents a DCE Security UUID (version 2).
    ///
    /// The layout follows version 1, except that `time_low` is overwritten by a 32-bit local
    /// identifier (a POSIX UID or GID) and `clock_seq_low` by the [`Domain`] octet, leaving a
    /// 6-bit clock sequence:
    ///
    /// ```text
    ///  0                   1                   2                   3
    ///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                           local_id                            |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |           time_mid            |  ver  |       time_high       |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |var| clock_seq |    domain     |             node              |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                              node                             |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// ```
    UuidV2,
    2
);

impl UuidV2 {
    /// Creates a UUIDv2 from field values.
    ///
    /// Only the upper 28 bits of the 60-bit `timestamp` survive; its lower 32 bits are replaced by
    /// `local_id`.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit or `clock_seq` is not a 6-bit unsigned integer.
    pub const fn from_fields(
        local_id: u32,
        domain: Domain,
        timestamp: u64,
        clock_seq: u8,
        node: [u8; 6],
    ) -> Self {
        if timestamp > codec::MAX_GREGORIAN_TS || clock_seq >= 1 << 6 {
            panic!("invalid field value");
        }

        Self::from_laid_out([
            (local_id >> 24) as u8,
            (local_id >> 16) as u8,
            (local_id >> 8) as u8,
            local_id as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            (timestamp >> 56) as u8,
            (timestamp >> 48) as u8,
            clock_seq,
            domain.as_octet(),
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Returns the 32-bit local identifier that replaces `time_low`.
    pub const fn local_id(&self) -> u32 {
        let b = self.as_bytes();
        u32::from_be_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Returns the raw domain octet.
    pub const fn domain_octet(&self) -> u8 {
        self.as_bytes()[9]
    }

    /// Returns the domain, or `None` if the domain octet is neither of the POSIX domains.
    pub const fn domain(&self) -> Option<Domain> {
        Domain::from_octet(self.domain_octet())
    }

    /// Returns the 6-bit clock sequence.
    pub const fn clock_seq(&self) -> u8 {
        self.as_bytes()[8] & 0x3f
    }

    /// Returns the 48-bit node identifier.
    pub fn node(&self) -> [u8; 6] {
        codec::node(self.as_bytes())
    }
}

/// The DCE Security domain a UUIDv2 local identifier belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Domain {
    /// POSIX user ID domain (octet value 0).
    Uid,

    /// POSIX group ID domain (octet value 1).
    Gid,
}

impl Domain {
    /// Returns the domain identified by an octet value.
    pub const fn from_octet(octet: u8) -> Option<Self> {
        match octet {
            0 => Some(Self::Uid),
            1 => Some(Self::Gid),
            _ => None,
        }
    }

    /// Returns the octet value stored in a UUIDv2.
    pub const fn as_octet(&self) -> u8 {
        match self {
            Self::Uid => 0,
            Self::Gid => 1,
        }
    }

    /// Returns the human-readable label of the domain.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Uid => "POSIX UID",
            Self::Gid => "POSIX GID",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl str::FromStr for Domain {
    type Err = Error;

    /// Parses `"uid"` or `"gid"` in any letter case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.eq_ignore_ascii_case("uid") {
            Ok(Self::Uid)
        } else if src.eq_ignore_ascii_case("gid") {
            Ok(Self::Gid)
        } else {
            tracing::debug!(domain = src, "rejected DCE domain");
            Err(Error::InvalidArgument(format!("invalid domain: {}", src)))
        }
    }
}
