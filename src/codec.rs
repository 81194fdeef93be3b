//! Bit-layout primitives shared by the version types.
//!
//! Every version type is built by laying its fields out in a 16-byte array big-endian and then
//! stamping the version nibble into octet 6 and the `10` variant bits into octet 8:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            octets 0-3                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          octets 4-5           |  ver  |       octets 6-7      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                       octets 8-11                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           octets 12-15                        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The same module owns the single shape check used both by construction from strings and by the
//! public `is_valid` predicates, so the two cannot disagree.

use crate::{Error, Result, Uuid, Variant};

/// Number of 100-nanosecond intervals between the Gregorian epoch (1582-10-15) and the Unix epoch
/// (1970-01-01).
pub const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// Largest value a 60-bit Gregorian timestamp can hold.
pub const MAX_GREGORIAN_TS: u64 = (1 << 60) - 1;

/// Converts microseconds since the Unix epoch into the 60-bit count of 100-nanosecond intervals
/// since the Gregorian epoch used by versions 1, 2, and 6.
pub const fn gregorian_ts(unix_ts_us: u64) -> u64 {
    unix_ts_us.wrapping_mul(10).wrapping_add(GREGORIAN_OFFSET) & MAX_GREGORIAN_TS
}

/// Returns a 16-bit field with its most significant nibble replaced by `version`.
pub const fn with_version(field: u16, version: u8) -> u16 {
    (field & 0x0fff) | ((version as u16) << 12)
}

/// Returns an octet with its two most significant bits replaced by the RFC 4122 variant `10`.
pub const fn with_rfc_variant(octet: u8) -> u8 {
    (octet & 0x3f) | 0x80
}

/// Stamps the version nibble and the RFC 4122 variant bits into a laid-out byte array.
pub const fn stamp(mut bytes: [u8; 16], version: u8) -> [u8; 16] {
    bytes[6] = (bytes[6] & 0x0f) | (version << 4);
    bytes[8] = with_rfc_variant(bytes[8]);
    bytes
}

/// Reads the 14-bit clock sequence that follows the variant bits in octets 8 and 9.
pub const fn clock_seq(bytes: &[u8; 16]) -> u16 {
    ((bytes[8] & 0x3f) as u16) << 8 | bytes[9] as u16
}

/// Reads the 48-bit node in octets 10 through 15.
pub fn node(bytes: &[u8; 16]) -> [u8; 6] {
    let mut node = [0u8; 6];
    node.copy_from_slice(&bytes[10..]);
    node
}

/// Reads the 60-bit Gregorian timestamp from the version 1 (and 2) layout, where `time_low`,
/// `time_mid`, and `time_hi` appear in that order.
pub const fn gregorian_ts_v1(b: &[u8; 16]) -> u64 {
    ((b[6] & 0x0f) as u64) << 56
        | (b[7] as u64) << 48
        | (b[4] as u64) << 40
        | (b[5] as u64) << 32
        | (b[0] as u64) << 24
        | (b[1] as u64) << 16
        | (b[2] as u64) << 8
        | b[3] as u64
}

/// Reads the 60-bit Gregorian timestamp from the version 6 layout, where the timestamp runs from
/// its most significant bit down.
pub const fn gregorian_ts_v6(b: &[u8; 16]) -> u64 {
    (b[0] as u64) << 52
        | (b[1] as u64) << 44
        | (b[2] as u64) << 36
        | (b[3] as u64) << 28
        | (b[4] as u64) << 20
        | (b[5] as u64) << 12
        | ((b[6] & 0x0f) as u64) << 8
        | b[7] as u64
}

/// Reads the 48-bit Unix millisecond timestamp at the head of the version 7 layout.
pub const fn unix_ts_ms(b: &[u8; 16]) -> u64 {
    u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
}

/// Tests if a value carries the given version nibble and the RFC 4122 variant.
pub fn has_layout(uuid: &Uuid, version: u8) -> bool {
    uuid.version() == version && uuid.variant() == Variant::Rfc4122
}

/// Parses an 8-4-4-4-12 string (hex digits in either case) that carries the RFC 4122 variant and,
/// if `version` is specified, that version nibble.
///
/// Passing `None` gives the relaxed check applied to V3/V5 namespaces.
pub fn parse_rfc(src: &str, version: Option<u8>) -> Option<Uuid> {
    let uuid = src.parse::<Uuid>().ok()?;
    let matches = match version {
        Some(v) => has_layout(&uuid, v),
        None => uuid.variant() == Variant::Rfc4122,
    };
    matches.then_some(uuid)
}

/// Tests if `src` is the string representation of a UUID with the given version.
pub fn is_valid(src: &str, version: u8) -> bool {
    parse_rfc(src, Some(version)).is_some()
}

/// Tests if `src` can serve as the namespace of a name-based UUID.
pub fn is_namespace(src: &str) -> bool {
    parse_rfc(src, None).is_some()
}

/// Decodes a namespace string into its 16 raw octets.
///
/// The shape check gates the input first and reports [`Error::InvalidArgument`]; any failure in the
/// subsequent hex decoding is reported separately as [`Error::Conversion`].
pub(crate) fn namespace_bytes(namespace: &str) -> Result<[u8; 16]> {
    if !is_namespace(namespace) {
        tracing::debug!(namespace, "rejected namespace");
        return Err(Error::InvalidArgument(format!(
            "invalid namespace UUID: {}",
            namespace
        )));
    }
    hex_to_bytes(namespace)
}

/// Strips hyphens from a UUID string and decodes the remaining hex digits.
pub(crate) fn hex_to_bytes(src: &str) -> Result<[u8; 16]> {
    let digits: String = src.chars().filter(|&c| c != '-').collect();
    let mut bytes = [0u8; 16];
    hex::decode_to_slice(&digits, &mut bytes)
        .map_err(|err| Error::Conversion(format!("{}: {}", src, err)))?;
    Ok(bytes)
}
