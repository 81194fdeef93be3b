//! UUIDv3-related functionality

use md5::{Digest, Md5};

use crate::typed::typed_uuid;
use crate::{codec, Result, Uuid};

typed_uuid!(
    /// Represents a name-based UUID (version 3) derived from an MD5 digest.
    ///
    /// The digest of the namespace's 16 octets followed by the name's octets fills the whole
    /// value, with the version and variant bits stamped over it.
    UuidV3,
    3
);

impl UuidV3 {
    /// Creates a UUIDv3 from a namespace and a name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::{Uuid, UuidV3};
    ///
    /// let x = UuidV3::new(&Uuid::NAMESPACE_DNS, "example.com");
    /// assert_eq!(x.to_string(), "9073926b-929f-31c2-abc9-fad77ae3e8eb");
    /// ```
    pub fn new(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        let mut hasher = Md5::new();
        hasher.update(namespace.as_bytes());
        hasher.update(name.as_ref());
        Self::from_digest(hasher.finalize().into())
    }

    /// Creates a UUIDv3 from the string representation of a namespace and a name.
    ///
    /// The namespace may be of any version but must carry the RFC 4122 variant; otherwise this
    /// function returns [`Error::InvalidArgument`](crate::Error::InvalidArgument).
    pub fn from_namespace_and_name(namespace: &str, name: impl AsRef<[u8]>) -> Result<Self> {
        let namespace = Uuid::from(codec::namespace_bytes(namespace)?);
        let value = Self::new(&namespace, name);
        tracing::trace!(uuid = %value, "generated UUIDv3");
        Ok(value)
    }

    /// An alias of [`UuidV3::from_namespace_and_name`].
    pub fn generate(namespace: &str, name: impl AsRef<[u8]>) -> Result<Self> {
        Self::from_namespace_and_name(namespace, name)
    }

    /// Creates a UUIDv3 from a precomputed MD5 digest.
    pub const fn from_digest(digest: [u8; 16]) -> Self {
        Self::from_laid_out(digest)
    }
}
