//! Request execution.

mod executor;

pub use executor::{ApiClient, ApiClientBuilder};
