use crate::app::hotkey::{InputSource, ListenerId};
use anyhow::Result;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::supports_keyboard_enhancement,
};
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Global key capture on the controlling terminal.
///
/// Registering pushes the kitty keyboard enhancement flags so the terminal
/// reports Super (Cmd) and unambiguous Escape; deregistering pops them. Each
/// push must be matched by exactly one pop or the flags leak past exit.
#[derive(Debug, Default)]
pub struct TerminalInput {
    next_id: AtomicU64,
    // Listener ids that pushed enhancement flags.
    enhanced: Mutex<Vec<ListenerId>>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for TerminalInput {
    fn register(&self) -> Result<ListenerId> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
            if let Ok(mut enhanced) = self.enhanced.lock() {
                enhanced.push(id);
            }
            tracing::debug!(id, "keyboard enhancement enabled");
        } else {
            tracing::debug!(id, "terminal lacks keyboard enhancement, Ctrl+K only");
        }
        Ok(id)
    }

    fn deregister(&self, id: ListenerId) {
        let was_enhanced = match self.enhanced.lock() {
            Ok(mut enhanced) => match enhanced.iter().position(|e| *e == id) {
                Some(pos) => {
                    enhanced.remove(pos);
                    true
                }
                None => false,
            },
            Err(_) => false,
        };

        if was_enhanced {
            if let Err(e) = execute!(io::stdout(), PopKeyboardEnhancementFlags) {
                tracing::warn!(id, "failed to restore keyboard flags: {}", e);
            }
        }
    }
}
