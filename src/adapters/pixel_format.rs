//! Pixel format conversion for display surfaces.

use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;

const RGB_BYTES: usize = 3;
const RGBA_BYTES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSizeMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for FrameSizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame holds {} bytes but the pixel buffer needs {}",
            self.actual, self.expected
        )
    }
}

impl Error for FrameSizeMismatch {}

/// Copies packed RGB into an RGBA frame, alpha fixed at 255.
///
/// `frame` must hold exactly four bytes per pixel of `buffer`; nothing is
/// written otherwise.
pub fn copy_pixel_buffer_to_rgba(
    buffer: &PixelBuffer,
    frame: &mut [u8],
) -> Result<(), FrameSizeMismatch> {
    let src = buffer.buffer();
    let expected = (src.len() / RGB_BYTES) * RGBA_BYTES;

    if frame.len() != expected {
        return Err(FrameSizeMismatch {
            expected,
            actual: frame.len(),
        });
    }

    for (src_pixel, dst_pixel) in src
        .chunks_exact(RGB_BYTES)
        .zip(frame.chunks_exact_mut(RGBA_BYTES))
    {
        dst_pixel[..RGB_BYTES].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
