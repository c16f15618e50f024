pub mod http;
pub mod source;
pub mod types;

pub use http::{DEFAULT_API_URL, HttpRelaySource};
pub use source::{FetchError, RelaySource, decode_relay_list};
pub use types::{Location, Relay, RelayList, WireguardList};
