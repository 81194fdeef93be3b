//! Error type shared by the typed constructors, generators, and the inspector.

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input does not have the hex-and-hyphen shape required by the target version.
    #[error("invalid UUID{} format: {:?}", version_suffix(.version), .input)]
    InvalidFormat {
        /// The version the input was checked against, or `None` for the relaxed shape.
        version: Option<u8>,
        /// The rejected input.
        input: String,
    },

    /// A generator received a semantically out-of-range argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A namespace string passed the shape check but could not be decoded into bytes.
    #[error("failed to convert UUID to bytes: {0}")]
    Conversion(String),

    /// The input to `from_json` is not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// The input to `from_json` is valid JSON but not a string value.
    #[error("invalid JSON: expected a string, found {0}")]
    NotAJsonString(&'static str),
}

fn version_suffix(version: &Option<u8>) -> String {
    version.map(|v| format!("v{}", v)).unwrap_or_default()
}

impl Error {
    pub(crate) fn invalid_format(version: Option<u8>, input: &str) -> Self {
        Self::InvalidFormat {
            version,
            input: input.to_owned(),
        }
    }
}

/// Result type for UUID operations.
pub type Result<T> = std::result::Result<T, Error>;
