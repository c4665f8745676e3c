use crate::core::data::colour::Colour;
use crate::core::data::display_size::DisplaySize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn display_size_to_buffer_size(size: DisplaySize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        size: DisplaySize,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "display needs {} bytes but buffer holds {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {} display",
                    pixel.x, pixel.y, size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB pixels for one render pass, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: DisplaySize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: DisplaySize) -> Self {
        Self {
            size,
            buffer: vec![0; display_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: DisplaySize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_size = display_size_to_buffer_size(size);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn display_size(&self) -> DisplaySize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.size.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        let row_width = self.size.get() as usize;

        Ok((pixel.y as usize * row_width + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
