use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single WireGuard exit node as listed by the relay API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Relay {
    pub hostname: String,
    /// Key into [`RelayList::locations`].
    pub location: String,
    pub active: bool,
    pub ipv4_addr_in: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub country: String,
    pub city: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WireguardList {
    pub relays: Vec<Relay>,
}

/// The decoded body of the relay-list endpoint.
///
/// Only the fields the table needs are modelled; anything else in the
/// document is ignored by serde.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayList {
    pub locations: BTreeMap<String, Location>,
    pub wireguard: WireguardList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_list_ignores_unknown_fields() {
        let json = r#"{
            "locations": {"se-sto": {"country": "Sweden", "city": "Stockholm", "latitude": 59.3}},
            "openvpn": {"relays": []},
            "wireguard": {
                "port_ranges": [[53, 53]],
                "relays": [{
                    "hostname": "se-sto-wg-001",
                    "location": "se-sto",
                    "active": true,
                    "owned": true,
                    "ipv4_addr_in": "185.213.154.68",
                    "public_key": "abc="
                }]
            }
        }"#;
        let list: RelayList = serde_json::from_str(json).unwrap();
        assert_eq!(list.locations["se-sto"].city, "Stockholm");
        assert_eq!(list.wireguard.relays.len(), 1);
        assert_eq!(list.wireguard.relays[0].ipv4_addr_in, "185.213.154.68");
    }

    #[test]
    fn test_relay_missing_required_field_is_rejected() {
        let json = r#"{"locations": {}, "wireguard": {"relays": [{"hostname": "x"}]}}"#;
        assert!(serde_json::from_str::<RelayList>(json).is_err());
    }

    #[test]
    fn test_active_must_be_boolean() {
        let json = r#"{"locations": {}, "wireguard": {"relays": [
            {"hostname": "x", "location": "y", "active": "yes", "ipv4_addr_in": "1.1.1.1"}
        ]}}"#;
        assert!(serde_json::from_str::<RelayList>(json).is_err());
    }
}
