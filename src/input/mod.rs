//! Input adapters that turn user interaction into explorer commands.

#[cfg(feature = "gui")]
pub mod gui;
