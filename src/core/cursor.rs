//! # Table Cursor
//!
//! Selection and scroll position for the relay table, kept free of any
//! widget types so the reducer can drive it in tests.
//!
//! `offset` is the first visible row; `page` is how many rows fit on screen.
//! The selected row is always inside `offset..offset + page`.

/// A navigation request against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Up,
    Down,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCursor {
    selected: Option<usize>,
    offset: usize,
    len: usize,
    page: usize,
}

impl TableCursor {
    /// Cursor over `len` rows with `page` rows visible. Selects the first
    /// row when there is one.
    pub fn new(len: usize, page: usize) -> Self {
        Self {
            selected: if len == 0 { None } else { Some(0) },
            offset: 0,
            len,
            page: page.max(1),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Applies a navigation step, clamping at both ends.
    pub fn apply(&mut self, nav: Nav) {
        let Some(current) = self.selected else {
            return;
        };
        let half = (self.page / 2).max(1);
        let target = match nav {
            Nav::Up => current.saturating_sub(1),
            Nav::Down => current.saturating_add(1),
            Nav::PageUp => current.saturating_sub(self.page),
            Nav::PageDown => current.saturating_add(self.page),
            Nav::HalfPageUp => current.saturating_sub(half),
            Nav::HalfPageDown => current.saturating_add(half),
            Nav::Top => 0,
            Nav::Bottom => self.len - 1,
        };
        self.select(target);
    }

    fn select(&mut self, index: usize) {
        let index = index.min(self.len.saturating_sub(1));
        self.selected = Some(index);
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.page {
            self.offset = index + 1 - self.page;
        }
    }
}
