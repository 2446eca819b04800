pub mod action;
pub mod command;
pub mod command_palette;
pub mod config;
pub mod features;
pub mod input;
pub mod keyboard;
pub mod keymap;
pub mod r#loop;
pub mod navigation;
pub mod persistence;
pub mod reducer;
pub mod router;
pub mod state;
pub mod ui;
