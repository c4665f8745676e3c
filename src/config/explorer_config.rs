use crate::core::data::display_size::{DisplaySize, DisplaySizeError};
use crate::core::fractals::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::mandelbrot::algorithm::MAX_ITERATIONS;
use clap::Parser;
use std::error::Error;
use std::fmt;

const DEFAULT_DISPLAY_SIZE: u32 = 800;
const DEFAULT_ZOOM_SCALE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    DisplaySize(DisplaySizeError),
    InvalidZoomScale(f64),
    ZeroMaxIterations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DisplaySize(err) => write!(f, "invalid display size: {}", err),
            Self::InvalidZoomScale(scale) => {
                write!(f, "zoom scale must be positive and finite, got {}", scale)
            }
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DisplaySize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DisplaySizeError> for ConfigError {
    fn from(err: DisplaySizeError) -> Self {
        Self::DisplaySize(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub display_size: DisplaySize,
    pub fractal: FractalKinds,
    /// Extent multiplier applied on every click; below 1 zooms in.
    pub zoom_scale: f64,
    pub colour_map: ColourMapKinds,
    pub max_iterations: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            display_size: DisplaySize::new(DEFAULT_DISPLAY_SIZE)
                .expect("default display size is valid"),
            fractal: FractalKinds::default(),
            zoom_scale: DEFAULT_ZOOM_SCALE,
            colour_map: ColourMapKinds::default(),
            max_iterations: MAX_ITERATIONS,
        }
    }
}

/// Interactive Mandelbrot explorer: click to zoom, reset to start over.
#[derive(Debug, Parser)]
#[command(name = "explorer", version)]
pub struct ExplorerArgs {
    /// Width and height of the square display in pixels
    #[arg(long, default_value_t = DEFAULT_DISPLAY_SIZE)]
    pub size: u32,

    /// Extent multiplier applied on each click (0.5 halves the view)
    #[arg(long, default_value_t = DEFAULT_ZOOM_SCALE)]
    pub zoom_scale: f64,

    /// Palette used for escaped points
    #[arg(long, value_enum, default_value_t = ColourMapKinds::HueCycle)]
    pub colour_map: ColourMapKinds,

    /// Iteration cap before a point is treated as inside the set
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    pub max_iterations: u32,
}

impl ExplorerArgs {
    pub fn into_config(self) -> Result<ExplorerConfig, ConfigError> {
        if !(self.zoom_scale > 0.0) || !self.zoom_scale.is_finite() {
            return Err(ConfigError::InvalidZoomScale(self.zoom_scale));
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        Ok(ExplorerConfig {
            display_size: DisplaySize::new(self.size)?,
            fractal: FractalKinds::default(),
            zoom_scale: self.zoom_scale,
            colour_map: self.colour_map,
            max_iterations: self.max_iterations,
        })
    }
}
