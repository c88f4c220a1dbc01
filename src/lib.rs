//! Typed HTTP resource client.
//!
//! Describe an API endpoint once - URL, method, response model - and get a
//! fluent request pipeline that dispatches the call, validates the HTTP
//! response, and decodes the body into the declared type. Every failure
//! mode surfaces through one closed error taxonomy instead of per-endpoint
//! plumbing.
//!
//! ## Core Types
//!
//! - [`ApiResource`] - Describes an endpoint: URL, method, and response model
//! - [`ApiRequest`] - Fluent, typed request builder for a resource
//! - [`ApiClient`] - Executes requests and runs the validate-and-decode pipeline
//! - [`ApiError`] - Closed taxonomy of request failures
//!
//! ## Response Decoding
//!
//! - [`ResponseFormat`] - Seam between raw bytes and typed values
//! - [`JsonFormat`] - Standard JSON decoding (what [`ApiRequest`] binds to)
//! - [`PlainTextFormat`] - UTF-8 text bodies
//!
//! ## Transports
//!
//! - [`Transport`] - Asynchronous HTTP dispatch contract
//! - [`ReqwestTransport`] - Bundled default over a pooled `reqwest::Client`
//!
//! ## Example
//!
//! ```rust,ignore
//! use restline::{ApiRequest, ApiResource, RestMethod};
//! use url::Url;
//!
//! #[derive(Debug, serde::Deserialize)]
//! struct Co2Reading {
//!     ppm: f64,
//! }
//!
//! struct LatestCo2;
//!
//! impl ApiResource for LatestCo2 {
//!     type Model = Co2Reading;
//!
//!     fn url(&self) -> Url {
//!         Url::parse("https://api.example.com/co2/latest").unwrap()
//!     }
//!
//!     fn method(&self) -> RestMethod {
//!         RestMethod::Get
//!     }
//! }
//!
//! let reading = ApiRequest::new(LatestCo2)?
//!     .accept_status_code(200)
//!     .execute()
//!     .await?;
//! println!("{} ppm", reading.ppm);
//! ```

mod body;
mod client;
mod error;
mod method;
mod request;
mod resource;
mod response;
mod transport;

pub use body::BodyEncoding;
pub use client::{ApiClient, ApiClientBuilder};
pub use error::{ApiError, BoxError};
pub use method::RestMethod;
pub use request::ApiRequest;
pub use resource::ApiResource;
pub use response::{JsonFormat, PlainTextFormat, ResponseFormat};
pub use transport::{ReqwestTransport, Transport, TransportReply, TransportRequest};
