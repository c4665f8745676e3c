/// Pixel coordinate on the display grid, `(0, 0)` at the top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
