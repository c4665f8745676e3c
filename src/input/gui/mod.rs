//! Windowed front end: `winit` for the window, `pixels` for the fractal
//! surface and `egui` for the control panel.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;
