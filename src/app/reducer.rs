use super::{
    action::Action,
    command_palette::ConfirmOutcome,
    hotkey::KeyOutcome,
    state::{AppState, StatusSeverity},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status = None;
                state.status_clear_time = None;
            }
        }
        Action::Resize(_, _) => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Key(key) => handle_key(state, key),
        Action::ExecuteCommand(id) => {
            let outcome = state.hotkeys.palette_mut().execute(&id);
            report_outcome(state, outcome);
        }
        Action::CommandExecuted(label) => {
            state.set_status(format!("{label} done"), StatusSeverity::Info);
            state.record_activity(label);
        }
        Action::Notify(message) => {
            state.set_status(message, StatusSeverity::Info);
        }
    }
}

// Releases never reach here; `input::map_event_to_action` drops them.
fn handle_key(state: &mut AppState, key: KeyEvent) {
    match state.hotkeys.handle_key(key) {
        KeyOutcome::Confirmed(outcome) => report_outcome(state, outcome),
        KeyOutcome::Handled => {}
        KeyOutcome::Ignored => match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => state.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.should_quit = true;
            }
            _ => {}
        },
    }
}

fn report_outcome(state: &mut AppState, outcome: ConfirmOutcome) {
    match outcome {
        ConfirmOutcome::Executed { id } => {
            tracing::debug!(%id, "command confirmed");
        }
        ConfirmOutcome::Failed { id, error } => {
            state.set_status(format!("{id} failed: {error}"), StatusSeverity::Error);
        }
        // An empty result set is a normal state; the palette stays open.
        ConfirmOutcome::NoSelection | ConfirmOutcome::Closed => {}
    }
}
