use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRangeError {
    InvalidOrigin { x: f64, y: f64 },
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for PlaneRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrigin { x, y } => {
                write!(f, "plane range origin must be finite: ({}, {})", x, y)
            }
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "plane range size must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for PlaneRangeError {}

/// Rectangle of the complex plane mapped onto the pixel grid.
///
/// The origin `(x, y)` is the corner drawn at pixel `(0, 0)`; the rectangle
/// extends `width` along the real axis and `height` along the imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRange {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl PlaneRange {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, PlaneRangeError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(PlaneRangeError::InvalidOrigin { x, y });
        }

        // `!(w > 0.0)` also rejects NaN
        if !(width > 0.0) || !(height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(PlaneRangeError::InvalidSize { width, height });
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.x + self.width / 2.0,
            imag: self.y + self.height / 2.0,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_range_new_valid() {
        let range = PlaneRange::new(-2.0, -1.5, 3.0, 3.0).unwrap();

        assert_eq!(range.x(), -2.0);
        assert_eq!(range.y(), -1.5);
        assert_eq!(range.width(), 3.0);
        assert_eq!(range.height(), 3.0);
    }

    #[test]
    fn test_plane_range_size_must_be_positive() {
        assert_eq!(
            PlaneRange::new(0.0, 0.0, 0.0, 1.0),
            Err(PlaneRangeError::InvalidSize {
                width: 0.0,
                height: 1.0
            })
        );
        assert_eq!(
            PlaneRange::new(0.0, 0.0, 1.0, -2.0),
            Err(PlaneRangeError::InvalidSize {
                width: 1.0,
                height: -2.0
            })
        );
    }

    #[test]
    fn test_plane_range_rejects_non_finite_size() {
        assert!(matches!(
            PlaneRange::new(0.0, 0.0, f64::NAN, 1.0),
            Err(PlaneRangeError::InvalidSize { .. })
        ));
        assert!(matches!(
            PlaneRange::new(0.0, 0.0, 1.0, f64::INFINITY),
            Err(PlaneRangeError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_plane_range_rejects_non_finite_origin() {
        assert!(matches!(
            PlaneRange::new(f64::NEG_INFINITY, 0.0, 1.0, 1.0),
            Err(PlaneRangeError::InvalidOrigin { .. })
        ));
        assert!(matches!(
            PlaneRange::new(0.0, f64::NAN, 1.0, 1.0),
            Err(PlaneRangeError::InvalidOrigin { .. })
        ));
    }

    #[test]
    fn test_plane_range_center() {
        let range = PlaneRange::new(-2.0, -1.5, 3.0, 3.0).unwrap();

        assert_eq!(range.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_error_display() {
        let err = PlaneRangeError::InvalidSize {
            width: 0.0,
            height: 3.0,
        };

        assert_eq!(
            err.to_string(),
            "plane range size must be positive and finite: 0x3"
        );
    }
}
