use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crate::components::modals::command_palette::command_at;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => Some(Action::Key(key)),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Mouse(mouse) if app_state.mode() == AppMode::CommandPalette => {
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    command_at(app_state.palette(), area, mouse.column, mouse.row)
                        .map(|cmd| Action::ExecuteCommand(cmd.id.clone()))
                }
                MouseEventKind::ScrollUp => Some(arrow(KeyCode::Up)),
                MouseEventKind::ScrollDown => Some(arrow(KeyCode::Down)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn arrow(code: KeyCode) -> Action {
    Action::Key(KeyEvent::new(code, KeyModifiers::NONE))
}
