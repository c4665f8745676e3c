pub mod colour_mapping;
pub mod escape_time_algorithm;
pub mod fractal_generator;
pub mod fractal_kinds;
pub mod mandelbrot;
