pub mod action;
pub mod command_palette;
pub mod commands;
pub mod config;
pub mod hotkey;
pub mod input;
pub mod keymap;
pub mod logging;
pub mod r#loop;
pub mod reducer;
pub mod state;
pub mod ui;
