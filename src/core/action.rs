//! # Actions
//!
//! Everything that can happen in relayview becomes an `Action`.
//! The spinner timer fires? That's `Action::Tick`.
//! The fetch finishes? That's `Action::FetchCompleted(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect` for
//! the adapter to carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::cursor::{Nav, TableCursor};
use crate::core::rows::project;
use crate::core::state::{App, Phase};
use crate::relays::{FetchError, RelayList};

/// A key press after the adapter has interpreted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Quit,
    Nav(Nav),
    Other,
}

#[derive(Debug)]
pub enum Action {
    Tick,
    Key(KeyPress),
    FetchCompleted(Result<RelayList, FetchError>),
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Key(KeyPress::Quit) => {
            info!("Quit requested in phase {:?}", app.phase);
            return Effect::Quit;
        }
        Action::Tick => {
            if app.phase == Phase::Loading {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
        }
        Action::Key(KeyPress::Nav(nav)) => {
            if app.phase == Phase::Ready {
                app.cursor.apply(nav);
            }
        }
        Action::Key(KeyPress::Other) => {}
        Action::FetchCompleted(result) => {
            if app.phase != Phase::Loading {
                warn!("Ignoring fetch result in phase {:?}", app.phase);
                return Effect::None;
            }
            match result {
                Ok(list) => {
                    app.rows = project(&list.wireguard.relays, &list.locations);
                    app.cursor = TableCursor::new(app.rows.len(), app.page_size);
                    app.phase = Phase::Ready;
                    info!("Relay table ready with {} rows", app.rows.len());
                }
                Err(e) => {
                    warn!("Fetch failed: {e}");
                    app.error = Some(e.to_string());
                    app.phase = Phase::Failed;
                }
            }
        }
    }
    debug!("Phase after update: {:?}", app.phase);
    Effect::None
}
