use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplaySizeError {
    Zero,
}

impl fmt::Display for DisplaySizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "display size must be greater than zero"),
        }
    }
}

impl Error for DisplaySizeError {}

/// Side length in pixels of the square display grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplaySize(u32);

impl DisplaySize {
    pub fn new(size: u32) -> Result<Self, DisplaySizeError> {
        if size == 0 {
            return Err(DisplaySizeError::Zero);
        }

        Ok(Self(size))
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.0 as usize * self.0 as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.0 && point.y < self.0
    }
}

impl fmt::Display for DisplaySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
