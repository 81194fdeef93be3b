//! Version and variant detection and metadata extraction for arbitrary UUID strings.
//!
//! Unlike the typed parsers, [`analyze`] accepts any 8-4-4-4-12 hexadecimal string whatever its
//! version nibble and variant bits, and reports what it can recover from them.
//!
//! ```rust
//! use uuidkit::inspector::{analyze, Metadata};
//!
//! let x = analyze(" 017F22E2-79B0-7CC3-98C4-DC0C0C07398F\n")?;
//! assert_eq!(x.version(), 7);
//! assert_eq!(x.variant().label(), "RFC 4122");
//! assert_eq!(
//!     x.metadata(),
//!     &Metadata::UnixTimeBased {
//!         unix_timestamp_ms: 1645557742000,
//!         sortable: true,
//!     }
//! );
//! # Ok::<(), uuidkit::Error>(())
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{codec, Domain, Error, Result, Uuid, Variant};

/// Analyzes a UUID string.
///
/// Surrounding spaces, tabs, line feeds, carriage returns, NULs, and vertical tabs are trimmed, and
/// hex digits are accepted in either case. Other whitespace, such as U+00A0, is not trimmed. Any
/// version nibble and any variant is accepted; an unknown version is reported through
/// [`Metadata::UnknownVersion`] rather than as an error.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the input does not have the 8-4-4-4-12 hexadecimal shape.
pub fn analyze(src: &str) -> Result<Inspection> {
    let normalized = src
        .trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0b'))
        .to_ascii_lowercase();
    let uuid = normalized.parse::<Uuid>().map_err(|_| {
        tracing::debug!(input = src, "rejected string representation");
        Error::invalid_format(None, src)
    })?;
    Ok(Inspection::new(uuid))
}

/// The result of [`analyze`].
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct Inspection {
    #[serde(skip)]
    uuid: Uuid,
    version: u8,
    variant: Variant,
    metadata: Metadata,
}

impl Inspection {
    fn new(uuid: Uuid) -> Self {
        let version = uuid.version();
        Self {
            uuid,
            version,
            variant: uuid.variant(),
            metadata: Metadata::extract(&uuid),
        }
    }

    /// Returns the analyzed value.
    pub const fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    /// Returns the version nibble (0-15).
    pub const fn version(&self) -> u8 {
        self.version
    }

    /// Returns the variant.
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the version-specific metadata.
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Metadata recovered from the fields of a UUID, one shape per version.
///
/// Serializes as a flat map whose keys depend on the version (e.g., `timestamp_100ns`,
/// `clock_sequence`, and `node` for version 1).
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum Metadata {
    /// Version 1.
    TimeBased {
        /// 100-nanosecond intervals since 1582-10-15.
        timestamp_100ns: u64,
        /// Octets 8 and 9 as one integer, variant bits included.
        clock_sequence: u16,
        /// Colon-separated uppercase hex octets, e.g., `9C:8E:99:29:D8:C1`.
        node: String,
    },

    /// Version 2.
    DceSecurity {
        /// `POSIX UID`, `POSIX GID`, or `Unknown domain`.
        domain: &'static str,
        local_identifier: u32,
        note: &'static str,
    },

    /// Versions 3 and 5.
    NameBased {
        /// `MD5` or `SHA-1`.
        hash_type: &'static str,
        deterministic: bool,
        note: String,
    },

    /// Version 4.
    Random {
        entropy_source: &'static str,
        deterministic: bool,
        note: &'static str,
    },

    /// Version 6.
    ReorderedTimeBased {
        /// 100-nanosecond intervals since 1582-10-15.
        timestamp_100ns: u64,
        sortable: bool,
    },

    /// Version 7.
    UnixTimeBased {
        /// Milliseconds since 1970-01-01.
        unix_timestamp_ms: u64,
        sortable: bool,
    },

    /// Version 8.
    Custom { info: &'static str },

    /// Versions 0 and 9 through 15.
    UnknownVersion { error: &'static str },
}

impl Metadata {
    fn extract(uuid: &Uuid) -> Self {
        let bytes = uuid.as_bytes();
        match uuid.version() {
            1 => Self::TimeBased {
                timestamp_100ns: codec::gregorian_ts_v1(bytes),
                clock_sequence: u16::from_be_bytes([bytes[8], bytes[9]]),
                node: format_node(&codec::node(bytes)),
            },
            2 => Self::DceSecurity {
                domain: Domain::from_octet(bytes[9]).map_or("Unknown domain", |d| d.label()),
                local_identifier: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
                note: "UUIDv2 replaces timestamp low bits with a UID/GID",
            },
            version @ (3 | 5) => Self::NameBased {
                hash_type: if version == 3 { "MD5" } else { "SHA-1" },
                deterministic: true,
                note: format!("UUIDv{} encodes a hash of namespace + name", version),
            },
            4 => Self::Random {
                entropy_source: "Cryptographic random bytes",
                deterministic: false,
                note: "UUIDv4 contains no embedded metadata",
            },
            6 => Self::ReorderedTimeBased {
                timestamp_100ns: codec::gregorian_ts_v6(bytes),
                sortable: true,
            },
            7 => Self::UnixTimeBased {
                unix_timestamp_ms: codec::unix_ts_ms(bytes),
                sortable: true,
            },
            8 => Self::Custom {
                info: "UUIDv8 is application-defined, structure unknown",
            },
            version => {
                tracing::debug!(version, uuid = %uuid, "unknown UUID version");
                Self::UnknownVersion {
                    error: "Unknown UUID version",
                }
            }
        }
    }

    /// Returns the metadata as a map from key names to JSON values.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Returns the value under `key`, or `None` if this version does not report it.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.to_map().remove(key)
    }
}

fn format_node(node: &[u8; 6]) -> String {
    node.iter()
        .map(|e| format!("{:02X}", e))
        .collect::<Vec<_>>()
        .join(":")
}
