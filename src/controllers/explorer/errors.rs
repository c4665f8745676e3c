use crate::core::data::display_size::DisplaySize;
use crate::core::data::plane_range::PlaneRangeError;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerError {
    ClickOutsideDisplay { pixel: Point, size: DisplaySize },
    Zoom(PlaneRangeError),
    Generator(MandelbrotError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClickOutsideDisplay { pixel, size } => write!(
                f,
                "click at x:{}, y:{} is outside the {} display",
                pixel.x, pixel.y, size
            ),
            Self::Zoom(err) => write!(f, "cannot zoom any further: {}", err),
            Self::Generator(err) => write!(f, "invalid generator settings: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ClickOutsideDisplay { .. } => None,
            Self::Zoom(err) => Some(err),
            Self::Generator(err) => Some(err),
        }
    }
}

impl From<PlaneRangeError> for ExplorerError {
    fn from(err: PlaneRangeError) -> Self {
        Self::Zoom(err)
    }
}

impl From<MandelbrotError> for ExplorerError {
    fn from(err: MandelbrotError) -> Self {
        Self::Generator(err)
    }
}
