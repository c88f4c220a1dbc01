//! Fluent, typed request building.

use std::collections::{BTreeMap, HashSet};

use crate::body::BodyEncoding;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resource::ApiResource;
use crate::response::JsonFormat;
use crate::transport::{ReqwestTransport, Transport};

/// A configurable request for one [`ApiResource`].
///
/// Chain configuration calls, then [`execute`](Self::execute):
///
/// ```rust,ignore
/// let reading = ApiRequest::new(LatestCo2)?
///     .accept_status_code(200)
///     .execute()
///     .await?;
/// ```
///
/// Configuration calls replace any previously stored value. The builder can
/// be executed more than once; each call issues an independent request with
/// the stored configuration.
pub struct ApiRequest<R: ApiResource, T: Transport = ReqwestTransport> {
    resource: R,
    client: ApiClient<T>,
    body_parameters: Option<BTreeMap<String, String>>,
    body_encoding: BodyEncoding,
    valid_status_codes: Option<HashSet<u16>>,
}

impl<R: ApiResource> ApiRequest<R> {
    /// Creates a request for `resource` with its own default client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(resource: R) -> Result<Self, ApiError> {
        Ok(Self::with_client(resource, ApiClient::new()?))
    }
}

impl<R: ApiResource, T: Transport> ApiRequest<R, T> {
    /// Creates a request for `resource` on an existing client.
    pub fn with_client(resource: R, client: ApiClient<T>) -> Self {
        Self {
            resource,
            client,
            body_parameters: None,
            body_encoding: BodyEncoding::default(),
            valid_status_codes: None,
        }
    }

    /// Sets the body parameters, replacing any previous value.
    pub fn with_body_parameters<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.body_parameters = Some(
            params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Selects how body parameters are serialized.
    pub fn body_encoding(mut self, encoding: BodyEncoding) -> Self {
        self.body_encoding = encoding;
        self
    }

    /// Sets the status codes considered successful, replacing any previous
    /// value. When never called, every status code is accepted.
    pub fn accept_status_codes<I>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        self.valid_status_codes = Some(codes.into_iter().collect());
        self
    }

    /// Accepts exactly one status code.
    pub fn accept_status_code(self, code: u16) -> Self {
        self.accept_status_codes([code])
    }

    /// Issues the request and decodes the JSON response into `R::Model`.
    ///
    /// Dispatches to the URL and method declared by the resource. The
    /// returned future resolves exactly once, with either the decoded model
    /// or the first failure in the pipeline.
    ///
    /// ## Errors
    ///
    /// Any [`ApiError`] variant produced by the execution pipeline.
    pub async fn execute(&self) -> Result<R::Model, ApiError> {
        self.client
            .send::<JsonFormat<R::Model>>(
                self.resource.url(),
                self.resource.method(),
                self.body_parameters.as_ref(),
                self.body_encoding,
                self.valid_status_codes.as_ref(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::RestMethod;
    use url::Url;

    #[derive(Debug, serde::Deserialize)]
    struct Example {
        #[allow(dead_code)]
        value: i64,
    }

    struct DataResource;

    impl ApiResource for DataResource {
        type Model = Example;

        fn url(&self) -> Url {
            Url::parse("https://api.example.com/data").unwrap()
        }

        fn method(&self) -> RestMethod {
            RestMethod::Get
        }
    }

    #[test]
    fn test_body_parameters_replace_previous_value() {
        let request = ApiRequest::new(DataResource)
            .unwrap()
            .with_body_parameters([("old", "1")])
            .with_body_parameters([("new", "2")]);

        let stored = request.body_parameters.as_ref().unwrap();
        assert_eq!(stored.get("new").map(String::as_str), Some("2"));
        assert!(!stored.contains_key("old"));
    }

    #[test]
    fn test_accept_status_code_is_singleton_set() {
        let request = ApiRequest::new(DataResource).unwrap().accept_status_code(200);

        assert_eq!(
            request.valid_status_codes,
            Some([200].into_iter().collect())
        );
    }

    #[test]
    fn test_accept_status_codes_replace_previous_value() {
        let request = ApiRequest::new(DataResource)
            .unwrap()
            .accept_status_code(200)
            .accept_status_codes([201, 204]);

        let stored = request.valid_status_codes.as_ref().unwrap();
        assert!(!stored.contains(&200));
        assert!(stored.contains(&201) && stored.contains(&204));
    }

    #[test]
    fn test_unconfigured_request_stores_nothing() {
        let request = ApiRequest::new(DataResource).unwrap();

        assert!(request.body_parameters.is_none());
        assert!(request.valid_status_codes.is_none());
        assert_eq!(request.body_encoding, BodyEncoding::Concatenated);
    }
}
