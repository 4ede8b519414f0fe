use crate::app::{action::Action, hotkey::InputSource, input::map_event_to_action, reducer, state::AppState, ui};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    source: Arc<dyn InputSource>,
    action_rx: mpsc::Receiver<Action>,
) -> Result<()> {
    run_loop_with_reader(terminal, app_state, source, spawn_event_reader, action_rx).await
}

/// Blocking crossterm reader feeding an mpsc channel.
///
/// The reader holds crossterm's event lock for the whole blocking read, so
/// anything that queries the terminal (keyboard enhancement support) must run
/// before this is spawned.
fn spawn_event_reader() -> mpsc::Receiver<Result<Event, std::io::Error>> {
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });
    event_rx
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    source: Arc<dyn InputSource>,
    event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
    action_rx: mpsc::Receiver<Action>,
) -> Result<()> {
    run_loop_with_reader(terminal, app_state, source, move || event_rx, action_rx).await
}

/// Drive the app until it asks to quit. The hotkey listener is registered
/// with `source` before `start_reader` runs and stays registered for exactly
/// the lifetime of this call.
pub async fn run_loop_with_reader<B, F>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    source: Arc<dyn InputSource>,
    start_reader: F,
    mut action_rx: mpsc::Receiver<Action>,
) -> Result<()>
where
    B: Backend,
    F: FnOnce() -> mpsc::Receiver<Result<Event, std::io::Error>>,
{
    let _listener = app_state.hotkeys.listen(source)?;
    let mut event_rx = start_reader();
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| ui::draw(f, app_state))?;

        // --- 2. Event Handling (TEA Runtime) ---
        // Command completions queued by the last update are drained before
        // the next input event.
        let action = tokio::select! {
            biased;

            Some(a) = action_rx.recv() => Some(a),

            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, app_state, terminal.size()?)
            },

            _ = interval.tick() => Some(Action::Tick),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            reducer::update(app_state, action);
            if app_state.should_quit {
                break;
            }
        }
    }

    tracing::info!("event loop finished");
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
