use crate::config::explorer_config::ExplorerConfig;
use crate::controllers::explorer::errors::ExplorerError;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::render::{RenderError, render_with_colour_map};
use crate::core::data::complex::Complex;
use crate::core::data::display_size::DisplaySize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::plane_range::PlaneRange;
use crate::core::data::point::Point;
use crate::core::fractals::colour_mapping::factory::colour_map_factory;
use crate::core::fractals::fractal_generator::FractalGenerator;
use crate::core::fractals::fractal_kinds::fractal_generator_with_max_iterations;
use log::{debug, info, warn};

/// Owns the current view range and everything needed to render it.
///
/// All mutation goes through `&mut self`, so whoever holds the session is the
/// only writer of the range.
pub struct ExplorerSession {
    display_size: DisplaySize,
    generator: Box<dyn FractalGenerator>,
    colour_map: Box<dyn ColourMap>,
    zoom_scale: f64,
    range: PlaneRange,
}

impl ExplorerSession {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ExplorerError> {
        let generator = fractal_generator_with_max_iterations(config.fractal, config.max_iterations)?;
        let colour_map = colour_map_factory(config.colour_map, config.max_iterations);
        let range = generator.initial_range();

        info!(
            "explorer session: {} on a {} display, colour map '{}', zoom scale {}",
            generator.kind(),
            config.display_size,
            colour_map.display_name(),
            config.zoom_scale
        );

        Ok(Self {
            display_size: config.display_size,
            generator,
            colour_map,
            zoom_scale: config.zoom_scale,
            range,
        })
    }

    #[must_use]
    pub fn range(&self) -> PlaneRange {
        self.range
    }

    #[must_use]
    pub fn display_size(&self) -> DisplaySize {
        self.display_size
    }

    #[must_use]
    pub fn generator(&self) -> &dyn FractalGenerator {
        self.generator.as_ref()
    }

    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    pub fn reset(&mut self) -> PlaneRange {
        self.range = self.generator.initial_range();
        debug!("view reset to {:?}", self.range);

        self.range
    }

    /// Converts `pixel` to plane coordinates and zooms toward it.
    ///
    /// On failure the current range is left untouched.
    pub fn zoom_at_pixel(&mut self, pixel: Point) -> Result<PlaneRange, ExplorerError> {
        if !self.display_size.contains_point(pixel) {
            warn!("ignoring click at ({}, {}) outside the display", pixel.x, pixel.y);
            return Err(ExplorerError::ClickOutsideDisplay {
                pixel,
                size: self.display_size,
            });
        }

        let side = self.display_size.get();
        let center = Complex {
            real: self
                .generator
                .map_coordinate(self.range.x(), self.range.width(), side, pixel.x),
            imag: self
                .generator
                .map_coordinate(self.range.y(), self.range.height(), side, pixel.y),
        };

        let zoomed = self
            .generator
            .recenter_and_zoom(&self.range, center, self.zoom_scale)
            .inspect_err(|err| warn!("zoom at {:?} rejected: {}", center, err))?;

        debug!(
            "zoom at pixel ({}, {}) -> {:?}, range {:?}",
            pixel.x, pixel.y, center, zoomed
        );
        self.range = zoomed;

        Ok(zoomed)
    }

    pub fn render(&self) -> Result<PixelBuffer, RenderError> {
        render_with_colour_map(
            self.display_size,
            &self.range,
            self.generator.as_ref(),
            self.colour_map.as_ref(),
        )
    }
}
