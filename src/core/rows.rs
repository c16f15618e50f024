//! # Row Projection
//!
//! Flattens the decoded relay list into one display row per relay.
//! Pure: no I/O, no sorting, API order is the visible order.

use std::collections::BTreeMap;

use crate::relays::{Location, Relay};

/// Column titles, in the order [`TableRow::cells`] yields values.
pub const HEADERS: [&str; 5] = ["Hostname", "Location key", "Active", "IPv4 Address", "Country"];

/// One rendered line of the relay table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub hostname: String,
    pub location: String,
    pub active: String,
    pub ipv4_addr_in: String,
    /// Empty when the relay's location key is not in the locations map.
    pub country: String,
}

impl TableRow {
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.hostname,
            &self.location,
            &self.active,
            &self.ipv4_addr_in,
            &self.country,
        ]
    }
}

/// Projects relays into table rows, resolving each location key.
pub fn project(relays: &[Relay], locations: &BTreeMap<String, Location>) -> Vec<TableRow> {
    relays
        .iter()
        .map(|relay| {
            let country = locations
                .get(&relay.location)
                .map(|loc| loc.country.clone())
                .unwrap_or_default();
            TableRow {
                hostname: relay.hostname.clone(),
                location: relay.location.clone(),
                active: relay.active.to_string(),
                ipv4_addr_in: relay.ipv4_addr_in.clone(),
                country,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relays::decode_relay_list;
    use crate::test_support::{relay, sample_relay_list};

    #[test]
    fn test_single_relay_row() {
        let body = br#"{"locations":{"se":{"country":"Sweden","city":"Stockholm"}},"wireguard":{"relays":[{"hostname":"se1-wg","location":"se","active":true,"ipv4_addr_in":"1.2.3.4"}]}}"#;
        let list = decode_relay_list(body).unwrap();
        let rows = project(&list.wireguard.relays, &list.locations);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells(), ["se1-wg", "se", "true", "1.2.3.4", "Sweden"]);
    }

    #[test]
    fn test_missing_location_yields_empty_country() {
        let relays = vec![relay("xx1-wg", "xx-nowhere", false, "10.0.0.1")];
        let rows = project(&relays, &BTreeMap::new());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "");
        assert_eq!(rows[0].active, "false");
    }

    #[test]
    fn test_order_and_count_preserved() {
        let list = sample_relay_list(25);
        let rows = project(&list.wireguard.relays, &list.locations);
        assert_eq!(rows.len(), list.wireguard.relays.len());
        for (row, relay) in rows.iter().zip(&list.wireguard.relays) {
            assert_eq!(row.hostname, relay.hostname);
        }
    }

    #[test]
    fn test_empty_relays() {
        let list = sample_relay_list(0);
        assert!(project(&list.wireguard.relays, &list.locations).is_empty());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let list = sample_relay_list(7);
        let first = project(&list.wireguard.relays, &list.locations);
        let second = project(&list.wireguard.relays, &list.locations);
        assert_eq!(first, second);
    }
}
