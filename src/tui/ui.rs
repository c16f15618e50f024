use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::{App, Phase};
use crate::tui::component::Component;
use crate::tui::components::{RelayTable, Spinner};
use crate::tui::theme::Theme;

/// Draws one full frame for the current phase.
pub fn draw_ui(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    match app.phase {
        Phase::Loading => Spinner::new(app.spinner_frame, theme).render(frame, area),
        Phase::Ready => RelayTable::new(&app.rows, &app.cursor, theme).render(frame, area),
        Phase::Failed => {
            let message = app.error.as_deref().unwrap_or("unknown error");
            draw_error_view(frame, area, message, theme);
        }
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str, theme: &Theme) {
    let error_paragraph = Paragraph::new(format!("Error: {error_msg}"))
        .block(Block::bordered().title("ERROR").border_style(theme.error))
        .style(theme.error)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}
