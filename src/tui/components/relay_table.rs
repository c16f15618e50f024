//! # Relay Table Component
//!
//! Bordered, scrollable table of relays with a one-line help footer.
//!
//! Follows the transient wrapper pattern: the row data and cursor live in
//! the core `App`; `RelayTable` borrows them for one frame. The ratatui
//! `TableState` is rebuilt from the core cursor every frame, so scrolling
//! logic stays in core and is testable without a terminal.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use crate::core::cursor::TableCursor;
use crate::core::rows::{HEADERS, TableRow};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Column widths, in header order.
const COLUMN_WIDTHS: [u16; 5] = [20, 12, 7, 15, 15];

/// Borders (top + bottom) plus the header row and its bottom margin.
const TABLE_CHROME_HEIGHT: u16 = 4;

const KEY_HELP: &str = "↑/k up • ↓/j down • b/f page • g/G top/bottom • q quit";

pub struct RelayTable<'a> {
    pub rows: &'a [TableRow],
    pub cursor: &'a TableCursor,
    pub theme: &'a Theme,
}

impl<'a> RelayTable<'a> {
    pub fn new(rows: &'a [TableRow], cursor: &'a TableCursor, theme: &'a Theme) -> Self {
        Self {
            rows,
            cursor,
            theme,
        }
    }

    /// Height of the bordered table for the cursor's page size.
    pub fn table_height(&self) -> u16 {
        let page = u16::try_from(self.cursor.page()).unwrap_or(u16::MAX);
        page.saturating_add(TABLE_CHROME_HEIGHT)
    }
}

/// Footer text: key hints plus the selected position.
pub fn help_text(cursor: &TableCursor) -> String {
    match cursor.selected() {
        Some(index) => format!("{KEY_HELP}   {}/{}", index + 1, cursor.len()),
        None => format!("{KEY_HELP}   0/0"),
    }
}

impl Component for RelayTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [table_area, help_area, _] = Layout::vertical([
            Constraint::Length(self.table_height()),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let header = Row::new(HEADERS)
            .style(self.theme.header)
            .bottom_margin(1);

        let rows = self.rows.iter().map(|row| Row::new(row.cells()));

        let table = Table::new(rows, COLUMN_WIDTHS.map(Constraint::Length))
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border),
            )
            .row_highlight_style(self.theme.selected);

        let mut state = TableState::default()
            .with_offset(self.cursor.offset())
            .with_selected(self.cursor.selected());
        frame.render_stateful_widget(table, table_area, &mut state);

        let help = Paragraph::new(Line::from(format!("  {}", help_text(self.cursor))))
            .style(self.theme.help);
        frame.render_widget(help, help_area);
    }
}
