use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use cmdk::app::{
    action::Action, command_palette::CommandPalette, commands::default_registry, config::PaletteConfig,
    hotkey::HotkeyController, logging, r#loop::run_loop, state::AppState,
};
use cmdk::infrastructure::terminal::TerminalInput;
use cmdk::theme::{PaletteType, Theme};

/// Keyboard-driven command palette for the terminal.
#[derive(Debug, Parser)]
#[command(name = "cmdk", version)]
struct Args {
    /// Palette config file (defaults to ~/.config/cmdk/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to write logs (defaults to cmdk.log in the temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Color palette
    #[arg(long, value_enum, default_value_t = PaletteType::CatppuccinMocha)]
    theme: PaletteType,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_panic_hook();

    // Everything that can fail runs BEFORE terminal setup so errors don't
    // leave the terminal in raw mode.
    let log_path = args.log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    // An explicit path must load; the default location falls back quietly.
    let config = match &args.config {
        Some(path) => PaletteConfig::load_from(path)?,
        None => PaletteConfig::load(),
    };

    let (action_tx, action_rx) = mpsc::channel(100);
    let registry = default_registry(&action_tx)?;
    tracing::info!(commands = registry.len(), "registry loaded");
    if !registry.duplicates().is_empty() {
        let message = format!("Ignored duplicate command ids: {}", registry.duplicates().join(", "));
        action_tx.try_send(Action::Notify(message))?;
    }

    let hotkeys = HotkeyController::new(CommandPalette::new(Arc::new(registry), config));
    let mut app_state = AppState::new(hotkeys, Theme::from_palette_type(args.theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(
        &mut terminal,
        &mut app_state,
        Arc::new(TerminalInput::new()),
        action_rx,
    )
    .await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{err:#}");
        println!("{:?}", err);
    }

    Ok(())
}
