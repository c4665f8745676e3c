use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::display_size::DisplaySize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::plane_range::PlaneRange;
use crate::core::fractals::colour_mapping::maps::hue_cycle::HueCycle;
use crate::core::fractals::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::fractal_generator::FractalGenerator;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderError {
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders the whole `size × size` grid over `range` with the default hue ramp.
pub fn render<G: FractalGenerator + ?Sized>(
    size: DisplaySize,
    range: &PlaneRange,
    generator: &G,
) -> Result<PixelBuffer, RenderError> {
    render_with_colour_map(size, range, generator, &HueCycle)
}

pub fn render_with_colour_map<G, CMap>(
    size: DisplaySize,
    range: &PlaneRange,
    generator: &G,
    colour_map: &CMap,
) -> Result<PixelBuffer, RenderError>
where
    G: FractalGenerator + ?Sized,
    CMap: ColourMap + ?Sized,
{
    let algorithm = EscapeTimeAlgorithm::new(generator, *range, size);
    let iterations = generate_fractal_rayon(&algorithm);

    Ok(generate_pixel_buffer(&iterations, colour_map, size)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::iteration_result::IterationResult;
    use crate::core::data::point::Point;
    use crate::core::fractals::colour_mapping::factory::colour_map_factory;
    use crate::core::fractals::colour_mapping::kinds::ColourMapKinds;
    use crate::core::fractals::fractal_kinds::{FractalKinds, new_generator};
    use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;

    /// Escapes everywhere left of the imaginary axis, never on the right.
    struct HalfPlaneGenerator;

    impl FractalGenerator for HalfPlaneGenerator {
        fn kind(&self) -> FractalKinds {
            FractalKinds::Mandelbrot
        }

        fn initial_range(&self) -> PlaneRange {
            PlaneRange::new(-1.0, -1.0, 2.0, 2.0).unwrap()
        }

        fn num_iterations(&self, point: Complex) -> IterationResult {
            if point.real < 0.0 {
                IterationResult::Escaped(0)
            } else {
                IterationResult::Unbounded
            }
        }
    }

    fn size(pixels: u32) -> DisplaySize {
        DisplaySize::new(pixels).unwrap()
    }

    #[test]
    fn test_render_initial_view_has_inside_and_outside_pixels() {
        let generator = new_generator();
        let range = generator.initial_range();

        let buffer = render(size(4), &range, generator.as_ref()).unwrap();

        // pixel (2, 2) maps to (-0.5, 0), inside the main cardioid
        assert_eq!(buffer.pixel(Point { x: 2, y: 2 }).unwrap(), Colour::BLACK);
        // pixel (3, 0) maps to (0.25, -1.5), well outside the set
        assert_ne!(buffer.pixel(Point { x: 3, y: 0 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_render_far_right_column_is_coloured() {
        let generator = Mandelbrot::new();
        let range = generator.initial_range();
        let buffer = render(size(30), &range, &generator).unwrap();

        // pixel x = 29 maps to 0.9 on the real axis, right of the set's 0.25 tip
        let right_edge = EscapeTimeAlgorithm::new(&generator, range, size(30))
            .pixel_to_plane(Point { x: 29, y: 0 });
        assert!((right_edge.real - 0.9).abs() < 1e-12);

        for y in 0..30 {
            assert_ne!(buffer.pixel(Point { x: 29, y }).unwrap(), Colour::BLACK);
        }
    }

    #[test]
    fn test_render_fills_every_pixel() {
        let generator = Mandelbrot::new();
        let buffer = render(size(16), &generator.initial_range(), &generator).unwrap();

        assert_eq!(buffer.display_size(), size(16));
        assert_eq!(buffer.buffer_size(), 16 * 16 * 3);
    }

    #[test]
    fn test_render_matches_sequential_scan() {
        let generator = Mandelbrot::new();
        let range = PlaneRange::new(-0.8, 0.05, 0.15, 0.15).unwrap();
        let algorithm = EscapeTimeAlgorithm::new(&generator, range, size(24));
        let sequential = generate_fractal(&algorithm);
        let expected = generate_pixel_buffer(&sequential, &HueCycle, size(24)).unwrap();

        let rendered = render(size(24), &range, &generator).unwrap();

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_is_generator_agnostic() {
        let generator = HalfPlaneGenerator;
        let buffer = render(size(4), &generator.initial_range(), &generator).unwrap();

        for y in 0..4 {
            assert_ne!(buffer.pixel(Point { x: 0, y }).unwrap(), Colour::BLACK);
            assert_ne!(buffer.pixel(Point { x: 1, y }).unwrap(), Colour::BLACK);
            assert_eq!(buffer.pixel(Point { x: 2, y }).unwrap(), Colour::BLACK);
            assert_eq!(buffer.pixel(Point { x: 3, y }).unwrap(), Colour::BLACK);
        }
    }

    #[test]
    fn test_render_with_alternate_colour_map() {
        let generator = HalfPlaneGenerator;
        let colour_map = colour_map_factory(ColourMapKinds::FireGradient, 100);

        let buffer = render_with_colour_map(
            size(2),
            &generator.initial_range(),
            &generator,
            colour_map.as_ref(),
        )
        .unwrap();

        // fire gradient maps zero iterations to black as well
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rendering_twice_is_deterministic() {
        let generator = Mandelbrot::new();
        let range = generator.initial_range();

        assert_eq!(
            render(size(12), &range, &generator).unwrap(),
            render(size(12), &range, &generator).unwrap()
        );
    }
}
