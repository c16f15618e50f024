//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::core::state::App;
use crate::relays::{FetchError, Location, Relay, RelayList, RelaySource, WireguardList};

/// A source that hands back a fixed result without touching the network.
pub struct StaticSource(pub Result<RelayList, FetchError>);

#[async_trait]
impl RelaySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<RelayList, FetchError> {
        self.0.clone()
    }
}

/// A source whose fetch never completes.
pub struct PendingSource;

#[async_trait]
impl RelaySource for PendingSource {
    fn name(&self) -> &str {
        "pending"
    }

    async fn fetch(&self) -> Result<RelayList, FetchError> {
        std::future::pending().await
    }
}

/// Creates a test App in the Loading phase with a 10-row page.
pub fn test_app() -> App {
    App::new(10)
}

pub fn relay(hostname: &str, location: &str, active: bool, ipv4: &str) -> Relay {
    Relay {
        hostname: hostname.to_string(),
        location: location.to_string(),
        active,
        ipv4_addr_in: ipv4.to_string(),
    }
}

/// A relay list with `count` relays spread over three locations, every
/// fifth relay pointing at a location key that is not in the map.
pub fn sample_relay_list(count: usize) -> RelayList {
    let locations: BTreeMap<String, Location> = [
        ("se-sto", "Sweden", "Stockholm"),
        ("de-fra", "Germany", "Frankfurt"),
        ("us-nyc", "USA", "New York, NY"),
    ]
    .into_iter()
    .map(|(key, country, city)| {
        (
            key.to_string(),
            Location {
                country: country.to_string(),
                city: city.to_string(),
            },
        )
    })
    .collect();

    let keys = ["se-sto", "de-fra", "us-nyc", "se-sto", "zz-none"];
    let relays = (0..count)
        .map(|i| {
            let key = keys[i % keys.len()];
            relay(
                &format!("{key}-wg-{:03}", i + 1),
                key,
                i % 3 != 0,
                &format!("10.0.{}.{}", i / 256, i % 256),
            )
        })
        .collect();

    RelayList {
        locations,
        wireguard: WireguardList { relays },
    }
}
