use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::plane_range::PlaneRange;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    /// View range the buffer was rendered from.
    pub range: PlaneRange,
    pub render_duration: Duration,
}
