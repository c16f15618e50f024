//! # Application State
//!
//! Core state for relayview. Domain data only, no TUI types.
//!
//! ```text
//! App
//! ├── phase: Phase              // Loading → Ready | Failed
//! ├── spinner_frame: usize      // advances on every tick while Loading
//! ├── rows: Vec<TableRow>       // projected relay rows (Ready)
//! ├── cursor: TableCursor       // selection + scroll offset (Ready)
//! ├── error: Option<String>     // fetch failure message (Failed)
//! └── page_size: usize          // visible table rows
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::cursor::TableCursor;
use crate::core::rows::TableRow;

/// Top-level UI phase. Only ever moves forward out of `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed,
}

pub struct App {
    pub phase: Phase,
    pub spinner_frame: usize,
    pub rows: Vec<TableRow>,
    pub cursor: TableCursor,
    pub error: Option<String>,
    pub page_size: usize,
}

impl App {
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: Phase::Loading,
            spinner_frame: 0,
            rows: Vec::new(),
            cursor: TableCursor::new(0, page_size),
            error: None,
            page_size,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(10);
        assert_eq!(app.phase, Phase::Loading);
        assert!(app.is_loading());
        assert!(app.rows.is_empty());
        assert!(app.error.is_none());
        assert_eq!(app.cursor.selected(), None);
    }
}
