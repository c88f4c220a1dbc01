//! Response decoding.
//!
//! [`ResponseFormat`] is the seam between raw response bytes and typed
//! values. Decoding failure is deliberately opaque: a format reports `None`
//! and the pipeline maps that to [`ApiError::Decode`](crate::ApiError::Decode)
//! without distinguishing why the bytes did not fit.

use std::marker::PhantomData;

use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Decodes raw response bytes into a typed output.
pub trait ResponseFormat {
    /// The decoded type.
    type Output;

    /// Decodes `body`, returning `None` on any structural mismatch.
    fn decode(body: &Bytes) -> Option<Self::Output>;
}

/// Standard JSON decoding into any deserializable model.
///
/// This is the format the typed request pipeline binds to a resource's
/// `Model` type.
#[derive(Debug)]
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned> ResponseFormat for JsonFormat<T> {
    type Output = T;

    fn decode(body: &Bytes) -> Option<T> {
        serde_json::from_slice(body).ok()
    }
}

/// UTF-8 text bodies, decoded as-is.
#[derive(Debug)]
pub struct PlainTextFormat;

impl ResponseFormat for PlainTextFormat {
    type Output = String;

    fn decode(body: &Bytes) -> Option<String> {
        String::from_utf8(body.to_vec()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Example {
        value: i64,
    }

    #[test]
    fn test_json_decodes_matching_body() {
        let body = Bytes::from_static(br#"{"value": 42}"#);
        assert_eq!(
            JsonFormat::<Example>::decode(&body),
            Some(Example { value: 42 })
        );
    }

    #[test]
    fn test_json_rejects_malformed_body() {
        let body = Bytes::from_static(b"not valid json");
        assert_eq!(JsonFormat::<Example>::decode(&body), None);
    }

    #[test]
    fn test_json_rejects_zero_length_body() {
        assert_eq!(JsonFormat::<Example>::decode(&Bytes::new()), None);
    }

    #[test]
    fn test_plain_text_decodes_utf8() {
        let body = Bytes::from_static(b"hello");
        assert_eq!(PlainTextFormat::decode(&body), Some("hello".to_string()));
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let body = Bytes::from_static(&[0xff, 0xfe]);
        assert_eq!(PlainTextFormat::decode(&body), None);
    }
}
