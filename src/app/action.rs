use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Input ---
    Key(KeyEvent),
    ExecuteCommand(String), // Pointer selection of a visible result

    // --- Command Side Effects ---
    // Sent back by command actions through the action channel
    CommandExecuted(String),
    Notify(String),
}
