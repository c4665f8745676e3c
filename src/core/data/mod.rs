pub mod colour;
pub mod complex;
pub mod display_size;
pub mod iteration_result;
pub mod pixel_buffer;
pub mod plane_range;
pub mod point;
