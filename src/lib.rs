//! Generation, validation, and inspection of UUID versions 1 through 8
//!
//! ```rust
//! use uuidkit::{TypedUuid, UuidV4, UuidV5, UuidV7};
//!
//! let uuid = UuidV7::generate();
//! println!("{}", uuid); // e.g. "018bcfe5-687b-7a3c-b4e5-16b0ee97ec5d"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let name_based = UuidV5::generate("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "www.example.com")?;
//! assert_eq!(name_based.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//!
//! assert!(UuidV4::is_valid(&UuidV4::generate().to_string()));
//! assert!(!UuidV4::is_valid(&uuid.to_string()));
//! # Ok::<(), uuidkit::Error>(())
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Versions
//!
//! Each version has its own value type that can only hold values carrying that version nibble
//! and the RFC 4122 variant (`10`):
//!
//! | Type       | Contents                                                         |
//! | ---------- | ---------------------------------------------------------------- |
//! | [`UuidV1`] | Gregorian 100-ns timestamp, random clock sequence, random node   |
//! | [`UuidV2`] | V1 fields with `time_low` replaced by a POSIX UID/GID            |
//! | [`UuidV3`] | MD5 digest of a namespace and a name                             |
//! | [`UuidV4`] | 122 random bits                                                  |
//! | [`UuidV5`] | SHA-1 digest of a namespace and a name                           |
//! | [`UuidV6`] | V1 fields reordered so that strings sort by creation time        |
//! | [`UuidV7`] | Unix millisecond timestamp and 74 random bits                    |
//! | [`UuidV8`] | 122 application-defined bits (random unless laid out explicitly) |
//!
//! All of them implement [`TypedUuid`], which provides validation, string and JSON conversion.
//! Node identifiers are random; hardware addresses are never read.
//!
//! # Inspection
//!
//! [`analyze`] accepts any 8-4-4-4-12 string and reports its version, its variant, and the
//! metadata recoverable from its fields:
//!
//! ```rust
//! let x = uuidkit::analyze("6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
//! assert_eq!(x.version(), 1);
//! assert_eq!(x.metadata().get("node"), Some("00:C0:4F:D4:30:C8".into()));
//! # Ok::<(), uuidkit::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the `generate` functions backed by a process-wide generator.
//!
//! Optional features:
//!
//! - `uuid`: enables conversion from and to the `Uuid` type of `uuid` crate.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

pub mod codec;

mod error;
pub use error::{Error, Result};

pub(crate) mod typed;
pub use typed::TypedUuid;

mod v1;
pub use v1::UuidV1;

mod v2;
pub use v2::{Domain, UuidV2};

mod v3;
pub use v3::UuidV3;

mod v4;
pub use v4::UuidV4;

mod v5;
pub use v5::UuidV5;

mod v6;
pub use v6::UuidV6;

mod v7;
pub use v7::UuidV7;

mod v8;
pub use v8::UuidV8;

pub mod generator;
pub use generator::{Generator, RandSource, StdSystemTime, TimeSource};

mod global_gen;

pub mod inspector;
pub use inspector::{analyze, Inspection, Metadata};
