//! relayview library exports for testing

pub mod core;
pub mod relays;
pub mod tui;

#[cfg(test)]
pub mod test_support;
