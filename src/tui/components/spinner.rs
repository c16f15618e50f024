//! # Spinner Component
//!
//! Moon-phase loading indicator shown while the relay list is in flight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const MOON_FRAMES: [&str; 8] = ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];

pub const LOADING_TEXT: &str = "Fetching data...";

/// Glyph for an ever-increasing frame counter.
pub fn glyph(frame_index: usize) -> &'static str {
    MOON_FRAMES[frame_index % MOON_FRAMES.len()]
}

pub struct Spinner<'a> {
    pub frame_index: usize,
    pub theme: &'a Theme,
}

impl<'a> Spinner<'a> {
    pub fn new(frame_index: usize, theme: &'a Theme) -> Self {
        Self { frame_index, theme }
    }
}

impl Component for Spinner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(glyph(self.frame_index), self.theme.spinner),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, self.theme.status),
        ]);
        let paragraph =
            Paragraph::new(line).block(Block::default().padding(Padding::new(3, 0, 2, 0)));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_cycles() {
        assert_eq!(glyph(0), "🌑");
        assert_eq!(glyph(4), "🌕");
        assert_eq!(glyph(8), glyph(0));
        assert_eq!(glyph(usize::MAX), MOON_FRAMES[usize::MAX % 8]);
    }
}
