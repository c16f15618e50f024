//! HTTP relay source backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{FetchError, RelaySource, decode_relay_list};
use super::types::RelayList;

/// Public relay list endpoint.
pub const DEFAULT_API_URL: &str = "https://api.mullvad.net/app/v1/relays";

/// Fetches the relay list with a single GET against a fixed URL.
pub struct HttpRelaySource {
    url: String,
    client: reqwest::Client,
}

impl HttpRelaySource {
    /// Creates a source for `url`. `timeout` bounds the whole request,
    /// including reading the body.
    pub fn new(url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("relayview/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build configured HTTP client ({e}), using defaults");
                reqwest::Client::new()
            });
        Self { url, client }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RelaySource for HttpRelaySource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<RelayList, FetchError> {
        info!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Relay API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let message = status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
            warn!("Relay API error: {} - {}", status.as_u16(), message);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Relay API body: {} bytes", body.len());

        let list = decode_relay_list(&body)?;
        info!(
            "Decoded {} relays across {} locations",
            list.wireguard.relays.len(),
            list.locations.len()
        );
        Ok(list)
    }
}
