//! Request execution with tracing instrumentation.
//!
//! This module provides the [`ApiClient`] struct for executing HTTP
//! requests: serialize body parameters, dispatch on the transport, validate
//! the reply, and decode the body into the caller's expected type.

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tracing::{instrument, Span};
use url::Url;

use crate::body::BodyEncoding;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::response::ResponseFormat;
use crate::transport::{ReqwestTransport, Transport, TransportRequest};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    timeout: Duration,
    default_headers: HeaderMap,
}

impl ApiClientBuilder {
    fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }

    /// Sets the request timeout handed to the underlying transport.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = ApiClient::builder()
    ///     .timeout(Duration::from_secs(60))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header sent with every request.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ApiError::Transport(Box::new(e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ApiError::Transport(Box::new(e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ApiError::Transport(Box::new(e)))?;

        Ok(ApiClient {
            transport: ReqwestTransport::new(client),
        })
    }
}

/// Async client for executing typed API requests.
///
/// Wraps a [`Transport`] (by default a pooled `reqwest::Client`) and runs
/// the full validate-and-decode pipeline for each request. The client holds
/// no per-request state, so one instance can serve any number of concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport = ReqwestTransport> {
    transport: T,
}

impl ApiClient {
    /// Creates a new builder for the default reqwest-backed client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Creates a client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }
}

impl<T: Transport> ApiClient<T> {
    /// Wraps a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Executes one request and decodes the response body with `F`.
    ///
    /// The pipeline runs in a fixed order and resolves exactly once:
    ///
    /// 1. If `body_parameters` is present, serialize it with `encoding` into
    ///    the request body.
    /// 2. Dispatch on the transport; a transport error resolves to
    ///    [`ApiError::Transport`] and nothing further runs.
    /// 3. A reply without a status code resolves to
    ///    [`ApiError::InvalidResponse`].
    /// 4. If `valid_status_codes` is present and the status is not a member,
    ///    resolve to [`ApiError::Status`]. When absent, any status proceeds.
    /// 5. A reply without a body resolves to [`ApiError::EmptyBody`]. A
    ///    returned zero-length body is not empty and proceeds to decode.
    /// 6. `F::decode` returning `None` resolves to [`ApiError::Decode`];
    ///    otherwise the decoded value is returned.
    ///
    /// ## Errors
    ///
    /// One of the [`ApiError`] variants above; no other failures exist.
    #[instrument(
        name = "api_request",
        skip_all,
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn send<F>(
        &self,
        url: Url,
        method: RestMethod,
        body_parameters: Option<&BTreeMap<String, String>>,
        encoding: BodyEncoding,
        valid_status_codes: Option<&HashSet<u16>>,
    ) -> Result<F::Output, ApiError>
    where
        F: ResponseFormat,
    {
        Span::current().record("http.method", method.to_string().as_str());
        Span::current().record("http.url", url.as_str());

        let mut headers = HeaderMap::new();
        let body = body_parameters.map(|params| {
            if let Some(content_type) = encoding.content_type() {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
            }
            encoding.encode(params)
        });

        let reply = self
            .transport
            .perform(TransportRequest {
                url,
                method,
                headers,
                body,
            })
            .await
            .map_err(|e| ApiError::Transport(Box::new(e)))?;

        let Some(status) = reply.status else {
            return Err(ApiError::InvalidResponse);
        };
        Span::current().record("http.status_code", status);

        if let Some(valid) = valid_status_codes {
            if !valid.contains(&status) {
                let otel_status = if status >= 500 { "ERROR" } else { "UNSET" };
                Span::current().record("otel.status_code", otel_status);
                return Err(ApiError::unacceptable_status(status));
            }
        }

        let Some(body) = reply.body else {
            Span::current().record("otel.status_code", "ERROR");
            return Err(ApiError::EmptyBody);
        };

        let Some(decoded) = F::decode(&body) else {
            Span::current().record("otel.status_code", "ERROR");
            return Err(ApiError::Decode);
        };

        Span::current().record("otel.status_code", "OK");
        Ok(decoded)
    }
}
