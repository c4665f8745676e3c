use crate::core::fractals::fractal_generator::FractalGenerator;
use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[must_use]
pub fn fractal_generator_factory(kind: FractalKinds) -> Box<dyn FractalGenerator> {
    match kind {
        FractalKinds::Mandelbrot => Box::new(Mandelbrot::new()),
    }
}

/// Same as [`fractal_generator_factory`] with an explicit iteration cap.
pub fn fractal_generator_with_max_iterations(
    kind: FractalKinds,
    max_iterations: u32,
) -> Result<Box<dyn FractalGenerator>, MandelbrotError> {
    match kind {
        FractalKinds::Mandelbrot => Ok(Box::new(Mandelbrot::with_max_iterations(max_iterations)?)),
    }
}

/// The generator used when nothing else is selected.
#[must_use]
pub fn new_generator() -> Box<dyn FractalGenerator> {
    fractal_generator_factory(FractalKinds::default())
}
