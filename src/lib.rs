pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::config::explorer_config::{ConfigError, ExplorerArgs, ExplorerConfig};
pub use crate::controllers::explorer::errors::ExplorerError;
pub use crate::controllers::explorer::session::ExplorerSession;
pub use crate::controllers::interactive::{
    ExplorerCommand, InteractiveController, InteractiveControllerPresenterPort, RenderEvent,
};
pub use crate::core::actions::render::{RenderError, render, render_with_colour_map};
pub use crate::core::data::display_size::DisplaySize;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::plane_range::PlaneRange;
pub use crate::core::fractals::fractal_generator::FractalGenerator;
pub use crate::core::fractals::fractal_kinds::{FractalKinds, new_generator};
pub use crate::core::fractals::mandelbrot::algorithm::{MAX_ITERATIONS, Mandelbrot};
pub use crate::core::util::recenter_and_zoom::recenter_and_zoom;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
