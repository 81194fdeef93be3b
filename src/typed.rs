//! Capability set shared by the version-specific UUID types.

use std::{fmt, marker::PhantomData, str};

use serde::{de, Deserializer};

use crate::{codec, Error, Uuid};

/// A UUID type whose values all carry one fixed version nibble and the RFC 4122 variant.
///
/// Every implementor is an immutable wrapper around [`Uuid`] that can only be constructed from a
/// value passing [`TypedUuid::is_valid`]. Equality compares the 16 octets, which is equivalent to
/// comparing the canonical lowercase string forms.
///
/// # Examples
///
/// ```rust
/// use uuidkit::{TypedUuid, UuidV4};
///
/// assert!(UuidV4::is_valid("2CA4B2CE-6C13-40D4-BCCF-37D222820F6F"));
/// assert!(!UuidV4::is_valid("017f22e2-79b0-7cc3-98c4-dc0c0c07398f"));
///
/// let x = UuidV4::from_json(r#""2CA4B2CE-6C13-40D4-BCCF-37D222820F6F""#)?;
/// assert_eq!(x.to_string(), "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
/// assert_eq!(x.to_json(), r#""2ca4b2ce-6c13-40d4-bccf-37d222820f6f""#);
/// # Ok::<(), uuidkit::Error>(())
/// ```
pub trait TypedUuid:
    Copy + Eq + fmt::Display + str::FromStr<Err = Error> + Into<Uuid>
{
    /// The version number stamped into every value of this type.
    const VERSION: u8;

    /// Returns a reference to the underlying untyped value.
    fn as_uuid(&self) -> &Uuid;

    /// Narrows an untyped value down to this type, failing with [`Error::InvalidFormat`] if the
    /// version nibble or the variant does not match.
    fn from_uuid(uuid: Uuid) -> crate::Result<Self>;

    /// Tests if `src` is the 8-4-4-4-12 hexadecimal representation (case-insensitive) of a UUID
    /// with this version and the RFC 4122 variant.
    ///
    /// This is a pure shape check; hashes and timestamps are never recomputed.
    fn is_valid(src: &str) -> bool {
        codec::is_valid(src, Self::VERSION)
    }

    /// Returns the JSON representation: the canonical string as a JSON string literal.
    fn to_json(&self) -> String {
        serde_json::Value::String(self.to_string()).to_string()
    }

    /// Creates an object from a JSON string literal holding its string representation.
    ///
    /// Reports [`Error::MalformedJson`] if `json` is not valid JSON, [`Error::NotAJsonString`] if
    /// it is but holds something other than a string, and [`Error::InvalidFormat`] if the string
    /// is not a valid representation of this type.
    fn from_json(json: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(Error::MalformedJson)?;
        match value {
            serde_json::Value::String(src) => src.parse(),
            other => Err(Error::NotAJsonString(json_kind(&other))),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Parses a string into a typed value, logging rejected input.
pub(crate) fn parse<T: TypedUuid>(src: &str, wrap: fn(Uuid) -> T) -> crate::Result<T> {
    match codec::parse_rfc(src, Some(T::VERSION)) {
        Some(uuid) => Ok(wrap(uuid)),
        None => {
            tracing::debug!(version = T::VERSION, input = src, "rejected string representation");
            Err(Error::invalid_format(Some(T::VERSION), src))
        }
    }
}

/// Deserializes a typed value from a string (human-readable formats) or 16 bytes (compact ones).
pub(crate) fn deserialize<'de, T: TypedUuid, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<T, D::Error> {
    if deserializer.is_human_readable() {
        deserializer.deserialize_str(VisitorImpl(PhantomData))
    } else {
        deserializer.deserialize_bytes(VisitorImpl(PhantomData))
    }
}

struct VisitorImpl<T>(PhantomData<T>);

impl<'de, T: TypedUuid> de::Visitor<'de> for VisitorImpl<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a UUIDv{} representation", T::VERSION)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse::<Self::Value>().map_err(de::Error::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        let bytes = <[u8; 16]>::try_from(value).map_err(de::Error::custom)?;
        T::from_uuid(Uuid::from(bytes)).map_err(de::Error::custom)
    }
}

/// Declares a version-specific UUID type and implements [`TypedUuid`] and the conversion,
/// formatting, and serde traits for it.
macro_rules! typed_uuid {
    ($(#[$attr:meta])* $name:ident, $version:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub struct $name($crate::Uuid);

        impl $name {
            /// Stamps the version and variant bits into laid-out octets.
            ///
            /// Stamping is what makes every constructed value pass [`TypedUuid::is_valid`]; the
            /// other 122 bits never affect validity.
            const fn from_laid_out(bytes: [u8; 16]) -> Self {
                Self($crate::Uuid::from_bytes($crate::codec::stamp(bytes, $version)))
            }

            /// Returns a reference to the underlying byte array.
            pub const fn as_bytes(&self) -> &[u8; 16] {
                self.0.as_bytes()
            }

            /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a
            /// stack-allocated string type.
            pub fn encode(&self) -> ::fstr::FStr<36> {
                self.0.encode()
            }
        }

        impl $crate::TypedUuid for $name {
            const VERSION: u8 = $version;

            fn as_uuid(&self) -> &$crate::Uuid {
                &self.0
            }

            fn from_uuid(uuid: $crate::Uuid) -> $crate::Result<Self> {
                if $crate::codec::has_layout(&uuid, $version) {
                    Ok(Self(uuid))
                } else {
                    Err($crate::Error::invalid_format(Some($version), &uuid.encode()))
                }
            }
        }

        impl ::std::fmt::Display for $name {
            /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            /// Creates an object from the 8-4-4-4-12 hexadecimal string representation,
            /// rejecting any other version or variant.
            fn from_str(src: &str) -> $crate::Result<Self> {
                $crate::typed::parse(src, $name)
            }
        }

        impl From<$name> for $crate::Uuid {
            fn from(src: $name) -> Self {
                src.0
            }
        }

        impl From<$name> for [u8; 16] {
            fn from(src: $name) -> Self {
                src.0.into()
            }
        }

        impl From<$name> for String {
            fn from(src: $name) -> Self {
                src.to_string()
            }
        }

        impl TryFrom<$crate::Uuid> for $name {
            type Error = $crate::Error;

            fn try_from(src: $crate::Uuid) -> $crate::Result<Self> {
                <Self as $crate::TypedUuid>::from_uuid(src)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::Error;

            fn try_from(src: &str) -> $crate::Result<Self> {
                src.parse()
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::Error;

            fn try_from(src: String) -> $crate::Result<Self> {
                src.parse()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                self.as_bytes()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&self.encode())
                } else {
                    serializer.serialize_bytes(self.as_bytes())
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                $crate::typed::deserialize(deserializer)
            }
        }
    };
}

pub(crate) use typed_uuid;
