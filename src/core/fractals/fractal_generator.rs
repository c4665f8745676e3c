use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::plane_range::{PlaneRange, PlaneRangeError};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::util::map_coordinate::map_coordinate;
use crate::core::util::recenter_and_zoom::recenter_and_zoom;

/// Capabilities every escape-time fractal family provides.
///
/// Rendering and input handling only talk to this trait, so a new family is
/// added by implementing it; nothing downstream matches on the concrete type.
pub trait FractalGenerator: Send + Sync {
    fn kind(&self) -> FractalKinds;

    /// Region shown on start-up and after a reset.
    fn initial_range(&self) -> PlaneRange;

    fn map_coordinate(&self, range_min: f64, extent: f64, axis_len: u32, pixel: u32) -> f64 {
        map_coordinate(range_min, extent, axis_len, pixel)
    }

    fn num_iterations(&self, point: Complex) -> IterationResult;

    fn recenter_and_zoom(
        &self,
        range: &PlaneRange,
        center: Complex,
        scale: f64,
    ) -> Result<PlaneRange, PlaneRangeError> {
        recenter_and_zoom(range, center, scale)
    }
}
