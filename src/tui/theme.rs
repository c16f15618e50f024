//! # Theme
//!
//! All colours and styles the renderer uses, passed in as a value rather
//! than read from statics.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Outer table border.
    pub border: Style,
    /// Column header row.
    pub header: Style,
    /// Highlight for the selected row.
    pub selected: Style,
    pub spinner: Style,
    pub status: Style,
    pub help: Style,
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Indexed(240)),
            header: Style::default()
                .fg(Color::Indexed(240))
                .add_modifier(Modifier::UNDERLINED),
            selected: Style::default()
                .fg(Color::Indexed(229))
                .bg(Color::Indexed(57)),
            spinner: Style::default().fg(Color::Yellow),
            status: Style::default(),
            help: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
        }
    }
}
