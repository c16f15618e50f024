//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Sources
//!
//! Three sources feed `core::update`, all on the loop thread:
//!
//! - **Keyboard**: polled with a timeout from crossterm.
//! - **Spinner timer**: the poll timeout doubles as the tick clock. Ticks
//!   are only generated while the app is Loading.
//! - **Fetch**: a tokio task sends one `Action::FetchCompleted` over an
//!   mpsc channel, drained after each poll.
//!
//! A frame is drawn after every processed event.

mod component;
mod components;
mod event;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::Config;
use crate::core::state::App;
use crate::relays::{HttpRelaySource, RelaySource};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// Runs the full-screen UI until the user quits.
///
/// Returns an error only for terminal I/O failures; the terminal is
/// restored on every exit path.
pub fn run(config: Config) -> std::io::Result<()> {
    let source: Arc<dyn RelaySource> = Arc::new(HttpRelaySource::new(
        config.api_url.clone(),
        config.request_timeout,
    ));

    let mut terminal = ratatui::try_init()?;
    info!("Terminal initialised");

    let result = run_loop(&mut terminal, &config, source);

    ratatui::restore();
    info!("Terminal restored");
    result
}

fn run_loop(
    terminal: &mut DefaultTerminal,
    config: &Config,
    source: Arc<dyn RelaySource>,
) -> std::io::Result<()> {
    let mut app = App::new(config.table_height);
    let theme = Theme::default();

    // Channel for actions from the background fetch
    let (tx, rx) = mpsc::channel();
    let fetch_handle = spawn_fetch(source, tx);

    let mut next_tick = Instant::now() + config.tick_rate;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &theme))?;
            needs_redraw = false;
        }

        // Wait for input until the next tick is due; idle long when not animating
        let timeout = if app.is_loading() {
            next_tick.saturating_duration_since(Instant::now())
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Key(key) => {
                    if update(&mut app, Action::Key(key)) == Effect::Quit {
                        should_quit = true;
                        break;
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        if app.is_loading() && Instant::now() >= next_tick {
            update(&mut app, Action::Tick);
            next_tick = Instant::now() + config.tick_rate;
            needs_redraw = true;
        }

        // Handle the fetch result
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if let Action::FetchCompleted(result) = &action {
                debug!("Event loop received fetch result (ok={})", result.is_ok());
            }
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    if !fetch_handle.is_finished() {
        info!("Abandoning in-flight fetch");
        fetch_handle.abort();
    }
    Ok(())
}

/// Runs `source.fetch()` on the tokio runtime and delivers the outcome as a
/// single `Action::FetchCompleted`.
fn spawn_fetch(
    source: Arc<dyn RelaySource>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning relay fetch ({})", source.name());
    let handle = tokio::spawn(async move {
        let started = Instant::now();
        let result = source.fetch().await;
        debug!(
            "Fetch finished in {}ms (ok={})",
            started.elapsed().as_millis(),
            result.is_ok()
        );
        if tx.send(Action::FetchCompleted(result)).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
    handle.abort_handle()
}
