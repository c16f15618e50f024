//! # Core Application Logic
//!
//! This module contains relayview's state machine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   relays   │
//!          │  Adapter   │                │  (fetch)   │
//!          │ (ratatui)  │                │ (reqwest)  │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and its `Phase`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`rows`]: Projection of relays into table rows
//! - [`cursor`]: Table selection and scrolling
//! - [`config`]: Environment-driven settings

pub mod action;
pub mod config;
pub mod cursor;
pub mod rows;
pub mod state;
