//! UUIDv5-related functionality

use sha1::{Digest, Sha1};

use crate::typed::typed_uuid;
use crate::{codec, Result, Uuid};

typed_uuid!(
    /// Represents a name-based UUID (version 5) derived from a SHA-1 digest.
    ///
    /// The first 16 octets of the digest of the namespace's 16 octets followed by the name's
    /// octets fill the whole value, with the version and variant bits stamped over it.
    UuidV5,
    5
);

impl UuidV5 {
    /// Creates a UUIDv5 from a namespace and a name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::{Uuid, UuidV5};
    ///
    /// let x = UuidV5::new(&Uuid::NAMESPACE_DNS, "www.example.com");
    /// assert_eq!(x.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
    /// ```
    pub fn new(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(namespace.as_bytes());
        hasher.update(name.as_ref());
        let digest = hasher.finalize();

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self::from_digest(bytes)
    }

    /// Creates a UUIDv5 from the string representation of a namespace and a name.
    ///
    /// The namespace may be of any version but must carry the RFC 4122 variant; otherwise this
    /// function returns [`Error::InvalidArgument`](crate::Error::InvalidArgument). A namespace that
    /// passes that check but cannot be decoded into octets yields
    /// [`Error::Conversion`](crate::Error::Conversion).
    pub fn from_namespace_and_name(namespace: &str, name: impl AsRef<[u8]>) -> Result<Self> {
        let namespace = Uuid::from(codec::namespace_bytes(namespace)?);
        let value = Self::new(&namespace, name);
        tracing::trace!(uuid = %value, "generated UUIDv5");
        Ok(value)
    }

    /// An alias of [`UuidV5::from_namespace_and_name`].
    pub fn generate(namespace: &str, name: impl AsRef<[u8]>) -> Result<Self> {
        Self::from_namespace_and_name(namespace, name)
    }

    /// Creates a UUIDv5 from the leading 16 octets of a precomputed SHA-1 digest.
    pub const fn from_digest(digest: [u8; 16]) -> Self {
        Self::from_laid_out(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::UuidV5;
    use crate::{Error, TypedUuid, Uuid};

    const DNS: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

    /// Returns a collection of prepared cases computed by an independent implementation
    fn prepare_cases() -> &'static [(Uuid, &'static str, &'static str)] {
        &[
            (
                Uuid::NAMESPACE_DNS,
                "www.example.com",
                "2ed6657d-e927-568b-95e1-2665a8aea6a2",
            ),
            (
                Uuid::NAMESPACE_DNS,
                "example.com",
                "cfbff0d1-9375-5685-968c-48ce8b15ae17",
            ),
            (
                Uuid::NAMESPACE_DNS,
                "python.org",
                "886313e1-3b8a-5372-9b90-0c9aee199e5d",
            ),
            (
                Uuid::NAMESPACE_URL,
                "https://example.com/",
                "dd2c1780-811a-5296-81c5-178a0ef488bc",
            ),
            (Uuid::NAMESPACE_DNS, "", "4ebd0208-8328-5d69-8c44-ec50939c0967"),
            (
                Uuid::NAMESPACE_DNS,
                "日本",
                "c545f148-2f1e-5792-8646-ecd64f3bb671",
            ),
        ]
    }

    /// Generates prepared cases correctly
    #[test]
    fn generates_prepared_cases_correctly() {
        for (ns, name, text) in prepare_cases() {
            assert_eq!(&UuidV5::new(ns, name).to_string(), text);
            let from_str = UuidV5::from_namespace_and_name(&ns.to_string(), name).unwrap();
            assert_eq!(&from_str.to_string(), text);
        }
    }

    /// Generates consistent deterministic values
    #[test]
    fn generates_consistent_deterministic_values() {
        let a = UuidV5::from_namespace_and_name(DNS, "www.example.com").unwrap();
        let b = UuidV5::from_namespace_and_name(DNS, "www.example.com").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, UuidV5::generate(DNS, "www.example.com").unwrap());
        assert!(UuidV5::is_valid(&a.to_string()));
        assert!(UuidV5::is_valid("2ed6657d-e927-568b-95e1-2665a8aea6a2"));
        assert_ne!(a, UuidV5::generate(DNS, "example.com").unwrap());
    }

    /// Rejects invalid namespace as invalid argument
    #[test]
    fn rejects_invalid_namespace_as_invalid_argument() {
        assert!(matches!(
            UuidV5::from_namespace_and_name("not-a-valid-uuid", "example.com"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(!UuidV5::is_valid("not-a-uuid"));
    }

    /// Reports undecodable namespace as conversion error
    #[test]
    fn reports_undecodable_namespace_as_conversion_error() {
        let err = crate::codec::hex_to_bytes("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz").unwrap_err();
        assert!(matches!(err, Error::Conversion(_)));
    }
}
