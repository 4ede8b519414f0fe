use super::hotkey::HotkeyController;
use crate::theme::Theme;
use std::time::Instant;

pub mod command_palette;
pub mod error;

// Re-exports
pub use command_palette::PaletteState;
pub use error::{StatusSeverity, StatusState, STATUS_TTL};

const ACTIVITY_LIMIT: usize = 50;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Palette closed, host keys active
    CommandPalette, // Palette open and capturing keys
}

#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub status: Option<StatusState>,
    pub status_clear_time: Option<Instant>,

    // --- Palette ---
    pub hotkeys: HotkeyController,

    // --- Executed commands, newest last ---
    pub activity: Vec<String>,

    pub frame_count: u64,
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(hotkeys: HotkeyController, theme: Theme) -> Self {
        Self {
            should_quit: false,
            status: None,
            status_clear_time: None,
            hotkeys,
            activity: Vec::new(),
            frame_count: 0,
            theme,
        }
    }

    pub fn mode(&self) -> AppMode {
        if self.hotkeys.palette().is_open() {
            AppMode::CommandPalette
        } else {
            AppMode::Normal
        }
    }

    pub fn palette(&self) -> &PaletteState {
        self.hotkeys.palette().state()
    }

    pub fn set_status(&mut self, message: impl Into<String>, severity: StatusSeverity) {
        self.status = Some(StatusState::new(message, severity));
        self.status_clear_time = Some(Instant::now() + STATUS_TTL);
    }

    pub fn record_activity(&mut self, entry: String) {
        self.activity.push(entry);
        if self.activity.len() > ACTIVITY_LIMIT {
            let excess = self.activity.len() - ACTIVITY_LIMIT;
            self.activity.drain(..excess);
        }
    }
}
