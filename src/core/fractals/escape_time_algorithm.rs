use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::display_size::DisplaySize;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::plane_range::PlaneRange;
use crate::core::data::point::Point;
use crate::core::fractals::fractal_generator::FractalGenerator;

/// Binds a generator to one view so the grid drivers can evaluate pixels.
pub struct EscapeTimeAlgorithm<'a, G: FractalGenerator + ?Sized> {
    generator: &'a G,
    range: PlaneRange,
    size: DisplaySize,
}

impl<'a, G: FractalGenerator + ?Sized> EscapeTimeAlgorithm<'a, G> {
    #[must_use]
    pub fn new(generator: &'a G, range: PlaneRange, size: DisplaySize) -> Self {
        Self {
            generator,
            range,
            size,
        }
    }

    #[must_use]
    pub fn pixel_to_plane(&self, pixel: Point) -> Complex {
        let side = self.size.get();

        Complex {
            real: self
                .generator
                .map_coordinate(self.range.x(), self.range.width(), side, pixel.x),
            imag: self
                .generator
                .map_coordinate(self.range.y(), self.range.height(), side, pixel.y),
        }
    }
}

impl<G: FractalGenerator + ?Sized> FractalAlgorithm for EscapeTimeAlgorithm<'_, G> {
    type Success = IterationResult;

    fn display_size(&self) -> DisplaySize {
        self.size
    }

    fn compute(&self, pixel: Point) -> Self::Success {
        self.generator.num_iterations(self.pixel_to_plane(pixel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;

    #[test]
    fn test_pixel_to_plane_uses_both_axes() {
        let generator = Mandelbrot::new();
        let range = PlaneRange::new(-2.0, -1.5, 3.0, 3.0).unwrap();
        let algorithm = EscapeTimeAlgorithm::new(&generator, range, DisplaySize::new(4).unwrap());

        assert_eq!(algorithm.pixel_to_plane(Point { x: 0, y: 0 }), Complex::new(-2.0, -1.5));
        assert_eq!(algorithm.pixel_to_plane(Point { x: 2, y: 1 }), Complex::new(-0.5, -0.75));
    }

    #[test]
    fn test_compute_delegates_to_generator() {
        let generator = Mandelbrot::new();
        let range = PlaneRange::new(-2.0, -1.5, 3.0, 3.0).unwrap();
        let algorithm = EscapeTimeAlgorithm::new(&generator, range, DisplaySize::new(4).unwrap());

        // (-0.5, 0) sits in the main cardioid
        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), IterationResult::Unbounded);
        // (-2, -1.5) escapes on the first step
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), IterationResult::Escaped(0));
    }
}
