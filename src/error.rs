//! Error types for the request pipeline.

use thiserror::Error;

/// Boxed error used to carry an underlying transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures a request can resolve to.
///
/// Every failure in the pipeline surfaces as exactly one of these variants
/// through the returned `Result`; nothing panics or escapes the async
/// boundary. Callers are expected to match on the variant.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed before producing an HTTP response.
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    /// The transport produced something that could not be read as an HTTP
    /// response.
    #[error("response was not a valid HTTP response")]
    InvalidResponse,

    /// The response status code was outside the accepted set.
    #[error("{message}")]
    Status {
        /// The status code the server returned.
        status: u16,
        /// Human-readable rejection, embeds the numeric code.
        message: String,
    },

    /// The transport returned no response body at all.
    #[error("response body was empty")]
    EmptyBody,

    /// The response body could not be decoded into the expected model.
    #[error("failed to decode response body")]
    Decode,
}

impl ApiError {
    /// Builds the rejection for a status code outside the accepted set.
    pub(crate) fn unacceptable_status(status: u16) -> Self {
        Self::Status {
            status,
            message: format!("HTTP returned status code {status}"),
        }
    }
}
