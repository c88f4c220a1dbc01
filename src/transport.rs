//! HTTP transport abstraction.
//!
//! The pipeline is decoupled from any specific HTTP implementation through
//! the [`Transport`] trait. [`ReqwestTransport`] is the bundled default;
//! alternative implementations (or test doubles) only need to produce one
//! terminal [`TransportReply`] or error per dispatched request.

use std::future::Future;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use url::Url;

use crate::method::RestMethod;

/// A request handed to the transport for dispatch.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Target URL.
    pub url: Url,
    /// HTTP method.
    pub method: RestMethod,
    /// Headers attached to this request.
    pub headers: HeaderMap,
    /// Serialized request body, if any.
    pub body: Option<Bytes>,
}

/// The terminal event of a dispatched request.
#[derive(Debug, Clone)]
pub struct TransportReply {
    /// HTTP status code, or `None` if the transport could not produce an
    /// interpretable HTTP response.
    pub status: Option<u16>,
    /// Response body. `None` means the transport returned no body at all;
    /// `Some` of a zero-length buffer is a returned body of length zero,
    /// and the two are not interchangeable.
    pub body: Option<Bytes>,
}

/// Performs HTTP requests asynchronously.
///
/// Implementations emit exactly one terminal event per dispatched request:
/// a [`TransportReply`] on completion, or an error when the request never
/// produced a response.
pub trait Transport: Send + Sync {
    /// The error type returned for a failed dispatch.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Dispatches `request` and resolves with its terminal event.
    fn perform(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportReply, Self::Error>> + Send;
}

/// Default transport backed by a pooled [`reqwest::Client`].
///
/// Always reports a status code. The body is reported as returned bytes,
/// possibly zero-length; reqwest does not distinguish an absent body from
/// an empty one.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an already-configured `reqwest::Client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    type Error = reqwest::Error;

    async fn perform(&self, request: TransportRequest) -> Result<TransportReply, reqwest::Error> {
        let mut builder = self
            .client
            .request(request.method.to_reqwest(), request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(TransportReply {
            status: Some(status),
            body: Some(body),
        })
    }
}
