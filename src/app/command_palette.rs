use super::config::PaletteConfig;
use super::state::PaletteState;
use crate::domain::Registry;
use std::sync::Arc;

#[derive(Debug)]
pub enum ConfirmOutcome {
    Executed { id: String },
    Failed { id: String, error: String },
    /// Nothing under the cursor (or the id is not a visible result). The
    /// session stays open with its query.
    NoSelection,
    /// Confirm arrived while the palette was closed; nothing ran.
    Closed,
}

/// The palette engine a host constructs once and drives with input events.
///
/// Owns the configuration and per-session [`PaletteState`]; shares the
/// [`Registry`] snapshot with the host.
#[derive(Debug)]
pub struct CommandPalette {
    registry: Arc<Registry>,
    config: PaletteConfig,
    state: PaletteState,
}

impl CommandPalette {
    pub fn new(registry: Arc<Registry>, config: PaletteConfig) -> Self {
        Self {
            registry,
            config,
            state: PaletteState::default(),
        }
    }

    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Start a new session, discarding whatever the previous one left behind.
    pub fn open(&mut self) {
        self.state = PaletteState::opened(&self.registry, &self.config);
        tracing::debug!(results = self.state.results().len(), "palette opened");
    }

    pub fn close(&mut self) {
        if !self.state.is_open() {
            return;
        }
        self.state = PaletteState::default();
        tracing::debug!("palette closed");
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        if self.is_open() {
            self.state.set_query(query.into(), &self.registry, &self.config);
        }
    }

    pub fn push_char(&mut self, c: char) {
        let mut query = self.state.query().to_string();
        query.push(c);
        self.set_query(query);
    }

    pub fn backspace(&mut self) {
        let mut query = self.state.query().to_string();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    pub fn clear_query(&mut self) {
        if !self.state.query().is_empty() {
            self.set_query(String::new());
        }
    }

    pub fn move_up(&mut self) {
        self.state.move_up();
    }

    pub fn move_down(&mut self) {
        self.state.move_down();
    }

    /// Swap in a new registry snapshot. An open session is re-matched
    /// against its current query.
    pub fn replace_registry(&mut self, registry: Arc<Registry>) {
        self.registry = registry;
        if self.is_open() {
            self.state.recompute(&self.registry, &self.config);
        }
    }

    /// Run the command under the cursor, then close.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        if !self.is_open() {
            return ConfirmOutcome::Closed;
        }
        match self.state.selected().map(|r| r.id().to_string()) {
            Some(id) => self.execute(&id),
            None => ConfirmOutcome::NoSelection,
        }
    }

    /// Run the command with `id` from the current results (pointer selection), then close.
    pub fn execute(&mut self, id: &str) -> ConfirmOutcome {
        if !self.is_open() {
            return ConfirmOutcome::Closed;
        }
        let Some(command) = self
            .state
            .results()
            .iter()
            .find(|r| r.id() == id)
            .map(|r| r.command.clone())
        else {
            return ConfirmOutcome::NoSelection;
        };

        // Close before running so a failing action cannot leave the palette open.
        self.close();

        tracing::info!(id = %command.id, "executing command");
        match (command.action)() {
            Ok(()) => ConfirmOutcome::Executed {
                id: command.id.clone(),
            },
            Err(e) => {
                let error = format!("{e:#}");
                tracing::error!(id = %command.id, %error, "command failed");
                ConfirmOutcome::Failed {
                    id: command.id.clone(),
                    error,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "command_palette_tests.rs"]
mod tests;
