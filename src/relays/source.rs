use std::fmt;

use async_trait::async_trait;
use serde_json::error::Category;

use super::types::RelayList;

/// Errors that can occur while fetching the relay list.
///
/// Every variant is terminal for the run: the UI shows the message and
/// waits for the user to quit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Could not reach the API (DNS, connect, TLS, timeout, truncated body).
    Network(String),
    /// API answered with a non-success status.
    Api { status: u16, message: String },
    /// Body is not well-formed JSON.
    Decode(String),
    /// Well-formed JSON that does not match the relay-list shape.
    Schema(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Decode(msg) => write!(f, "decode error: {msg}"),
            FetchError::Schema(msg) => write!(f, "unexpected response shape: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => FetchError::Schema(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => FetchError::Decode(err.to_string()),
        }
    }
}

/// Decodes a raw response body into a [`RelayList`].
pub fn decode_relay_list(body: &[u8]) -> Result<RelayList, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

/// Where the relay list comes from.
///
/// The event loop only sees this trait, so tests can swap the HTTP client
/// for a canned response.
#[async_trait]
pub trait RelaySource: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &str;

    /// Fetches and decodes the full relay list. Called once per run.
    async fn fetch(&self) -> Result<RelayList, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StaticSource, sample_relay_list};

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = decode_relay_list(b"{\"locations\": {").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
        assert!(err.to_string().starts_with("decode error"));
    }

    #[test]
    fn test_html_body_is_decode_error() {
        let err = decode_relay_list(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_missing_wireguard_is_schema_error() {
        let err = decode_relay_list(br#"{"locations": {}}"#).unwrap_err();
        match err {
            FetchError::Schema(msg) => assert!(msg.contains("wireguard"), "{msg}"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type_is_schema_error() {
        let err = decode_relay_list(br#"{"locations": [], "wireguard": {"relays": []}}"#)
            .unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
    }

    #[test]
    fn test_valid_body_decodes() {
        let list = decode_relay_list(br#"{"locations": {}, "wireguard": {"relays": []}}"#)
            .unwrap();
        assert!(list.wireguard.relays.is_empty());
    }

    #[test]
    fn test_source_trait_object() {
        let source: Box<dyn RelaySource> =
            Box::new(StaticSource(Ok(sample_relay_list(2))));
        assert_eq!(source.name(), "static");
        let list = tokio_test::block_on(source.fetch()).unwrap();
        assert_eq!(list.wireguard.relays.len(), 2);
    }

    #[test]
    fn test_error_display() {
        let err = FetchError::Api {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 503): Service Unavailable");
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
    }
}
