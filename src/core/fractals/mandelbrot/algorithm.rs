use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::plane_range::PlaneRange;
use crate::core::fractals::fractal_generator::FractalGenerator;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const MAX_ITERATIONS: u32 = 2000;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// `z → z² + c` starting from `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mandelbrot {
    max_iterations: u32,
}

impl Mandelbrot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
        }
    }

    pub fn with_max_iterations(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self::new()
    }
}

impl FractalGenerator for Mandelbrot {
    fn kind(&self) -> FractalKinds {
        FractalKinds::Mandelbrot
    }

    fn initial_range(&self) -> PlaneRange {
        PlaneRange::new(-2.0, -1.5, 3.0, 3.0).expect("mandelbrot initial range is valid")
    }

    fn num_iterations(&self, c: Complex) -> IterationResult {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            z = z.square() + c;

            if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
                return IterationResult::Escaped(iteration);
            }
        }

        IterationResult::Unbounded
    }
}
