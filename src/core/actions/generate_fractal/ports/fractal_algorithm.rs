use crate::core::data::display_size::DisplaySize;
use crate::core::data::point::Point;

/// Per-pixel computation driven by the grid generators.
pub trait FractalAlgorithm {
    type Success;

    fn display_size(&self) -> DisplaySize;

    fn compute(&self, pixel: Point) -> Self::Success;
}
