//! HTTP method types for REST resources.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods a resource can be requested with.
///
/// ## Examples
///
/// ```rust
/// use restline::RestMethod;
///
/// let method = RestMethod::Get;
/// assert_eq!(method.to_string(), "GET");
/// assert!(!method.has_body());
///
/// // Parse from string
/// let parsed: RestMethod = "POST".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Post);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP PATCH - Partially update a resource.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if this method typically carries a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}
