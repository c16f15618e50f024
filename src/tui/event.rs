use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::KeyPress;
use crate::core::cursor::Nav;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyPress),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, waiting up to `timeout`.
///
/// Terminal read errors are logged and reported as "no event".
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(event) => translate(event),
            Err(e) => {
                log::warn!("Failed to read terminal event: {e}");
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            log::warn!("Failed to poll terminal events: {e}");
            None
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Some(TuiEvent::Key(key_press(key_event)))
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn key_press(key_event: KeyEvent) -> KeyPress {
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => KeyPress::Quit,
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => KeyPress::Nav(Nav::HalfPageUp),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => KeyPress::Nav(Nav::HalfPageDown),
        (KeyModifiers::CONTROL, _) => KeyPress::Other,
        (_, KeyCode::Char('q')) => KeyPress::Quit,
        (_, KeyCode::Up | KeyCode::Char('k')) => KeyPress::Nav(Nav::Up),
        (_, KeyCode::Down | KeyCode::Char('j')) => KeyPress::Nav(Nav::Down),
        (_, KeyCode::PageUp | KeyCode::Char('b')) => KeyPress::Nav(Nav::PageUp),
        (_, KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ')) => {
            KeyPress::Nav(Nav::PageDown)
        }
        (_, KeyCode::Char('u')) => KeyPress::Nav(Nav::HalfPageUp),
        (_, KeyCode::Char('d')) => KeyPress::Nav(Nav::HalfPageDown),
        (_, KeyCode::Home | KeyCode::Char('g')) => KeyPress::Nav(Nav::Top),
        (_, KeyCode::End | KeyCode::Char('G')) => KeyPress::Nav(Nav::Bottom),
        _ => KeyPress::Other,
    }
}
