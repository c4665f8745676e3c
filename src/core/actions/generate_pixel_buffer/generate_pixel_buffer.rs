use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::display_size::DisplaySize;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError {
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours row-major iteration results into a packed RGB buffer.
pub fn generate_pixel_buffer<CMap: ColourMap + ?Sized>(
    input: &[IterationResult],
    mapper: &CMap,
    size: DisplaySize,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * 3);

    for &value in input {
        let colour = mapper.map(value);
        buffer.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Ok(PixelBuffer::from_data(size, buffer)?)
}
