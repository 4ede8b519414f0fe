use super::command_palette::{CommandPalette, ConfirmOutcome};
use super::keymap::KeyCombo;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub type ListenerId = u64;

/// Process-wide keyboard capture the controller attaches to.
#[cfg_attr(test, mockall::automock)]
pub trait InputSource: Send + Sync {
    fn register(&self) -> anyhow::Result<ListenerId>;
    fn deregister(&self, id: ListenerId);
}

#[derive(Debug, Error)]
pub enum HotkeyError {
    #[error("hotkey listener is already registered")]
    AlreadyListening,
    #[error("failed to register input listener: {0:#}")]
    Register(anyhow::Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    NotListening,
    ListeningClosed,
    ListeningOpen,
}

#[derive(Debug)]
pub enum KeyOutcome {
    /// Not ours; the host may handle the key.
    Ignored,
    /// Consumed by the palette. The host must not run its default handling.
    Handled,
    /// Enter ran the confirm transition. The palette is closed unless there
    /// was nothing to run.
    Confirmed(ConfirmOutcome),
}

impl KeyOutcome {
    pub fn is_consumed(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Registration of the controller with an [`InputSource`].
///
/// Dropping the guard deregisters, on every exit path including unwinding.
#[must_use = "dropping the guard stops the hotkey listener"]
pub struct ListenerGuard {
    source: Arc<dyn InputSource>,
    id: ListenerId,
    listening: Arc<AtomicBool>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.source.deregister(self.id);
        self.listening.store(false, Ordering::SeqCst);
        tracing::debug!(id = self.id, "hotkey listener deregistered");
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

/// Routes global key events into a [`CommandPalette`].
///
/// Closed, only the open combo is recognised. Open, navigation, confirm,
/// dismiss and query editing keys are consumed.
#[derive(Debug)]
pub struct HotkeyController {
    palette: CommandPalette,
    open_combo: KeyCombo,
    listening: Arc<AtomicBool>,
}

impl HotkeyController {
    pub fn new(palette: CommandPalette) -> Self {
        let open_combo = palette.config().open_combo;
        Self {
            palette,
            open_combo,
            listening: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn palette(&self) -> &CommandPalette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut CommandPalette {
        &mut self.palette
    }

    pub fn open_combo(&self) -> KeyCombo {
        self.open_combo
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if !self.listening.load(Ordering::SeqCst) {
            Lifecycle::NotListening
        } else if self.palette.is_open() {
            Lifecycle::ListeningOpen
        } else {
            Lifecycle::ListeningClosed
        }
    }

    /// Attach to `source`. At most one registration is live at a time, so a
    /// remount without teardown cannot stack listeners.
    pub fn listen(&self, source: Arc<dyn InputSource>) -> Result<ListenerGuard, HotkeyError> {
        if self
            .listening
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(HotkeyError::AlreadyListening);
        }

        match source.register() {
            Ok(id) => {
                tracing::debug!(id, "hotkey listener registered");
                Ok(ListenerGuard {
                    source,
                    id,
                    listening: self.listening.clone(),
                })
            }
            Err(e) => {
                self.listening.store(false, Ordering::SeqCst);
                Err(HotkeyError::Register(e))
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Ignored;
        }

        match self.lifecycle() {
            Lifecycle::NotListening => KeyOutcome::Ignored,
            Lifecycle::ListeningClosed => {
                if self.open_combo.matches(&key) {
                    self.palette.open();
                    KeyOutcome::Handled
                } else {
                    KeyOutcome::Ignored
                }
            }
            Lifecycle::ListeningOpen => self.handle_open_key(key),
        }
    }

    fn handle_open_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if self.open_combo.matches(&key) {
            self.palette.close();
            return KeyOutcome::Handled;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.palette.close(),
            KeyCode::Up => self.palette.move_up(),
            KeyCode::Down => self.palette.move_down(),
            KeyCode::Enter => return KeyOutcome::Confirmed(self.palette.confirm()),
            KeyCode::Backspace => self.palette.backspace(),
            KeyCode::Char('u') if ctrl => self.palette.clear_query(),
            KeyCode::Char(c)
                if !ctrl && !key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.palette.push_char(c);
            }
            _ => {}
        }
        KeyOutcome::Handled
    }
}
