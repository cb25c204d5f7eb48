//! Error types for the temp-mail client.

use thiserror::Error;

/// Errors that can occur during temp-mail operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument (email address or message id) was empty.
    ///
    /// Raised before any request is sent.
    #[error("missing {name}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
    },

    /// The domain list used to build an address was empty.
    #[error("No domains available")]
    NoDomains,

    /// The configured base URL could not be used as an API root.
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The service answered with a non-2xx status.
    #[error("Request failed: {status} ({url})")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// Transport-level failure (DNS, connect, TLS, timeout, truncated body).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON for the expected type.
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status carried by [`Error::Status`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was caused by caller input rather than the network or server.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. } | Error::NoDomains)
    }
}
