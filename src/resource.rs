//! Endpoint descriptions.

use serde::de::DeserializeOwned;
use url::Url;

use crate::method::RestMethod;

/// Describes a single API endpoint: where to call it, how to call it, and
/// what shape of data it returns.
///
/// Implementations are pure data and carry no behavior; the associated
/// `Model` type binds the endpoint to its decoded response shape at compile
/// time. Keep implementations as plain value types so they stay trivially
/// constructible and comparable in tests.
///
/// ## Examples
///
/// ```rust
/// use restline::{ApiResource, RestMethod};
/// use url::Url;
///
/// #[derive(Debug, serde::Deserialize)]
/// struct Co2Reading {
///     ppm: f64,
/// }
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct LatestCo2;
///
/// impl ApiResource for LatestCo2 {
///     type Model = Co2Reading;
///
///     fn url(&self) -> Url {
///         Url::parse("https://api.example.com/co2/latest").unwrap()
///     }
///
///     fn method(&self) -> RestMethod {
///         RestMethod::Get
///     }
/// }
/// ```
pub trait ApiResource {
    /// The decoded response shape for this endpoint.
    type Model: DeserializeOwned;

    /// The URL the request is dispatched to.
    fn url(&self) -> Url;

    /// The HTTP method the request is dispatched with.
    fn method(&self) -> RestMethod;
}
