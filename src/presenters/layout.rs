use crate::core::data::display_size::DisplaySize;
use crate::core::data::point::Point;

/// Height in logical points of the control strip under the fractal.
pub const CONTROL_PANEL_POINTS: f32 = 56.0;

/// Window surface split into the square fractal on top and the control strip below it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceLayout {
    display_size: DisplaySize,
    panel_height: u32,
}

impl SurfaceLayout {
    /// `scale_factor` is the window's physical pixels per logical point.
    #[must_use]
    pub fn new(display_size: DisplaySize, scale_factor: f64) -> Self {
        let scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };

        Self {
            display_size,
            panel_height: (f64::from(CONTROL_PANEL_POINTS) * scale_factor).ceil() as u32,
        }
    }

    #[must_use]
    pub fn display_size(&self) -> DisplaySize {
        self.display_size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.display_size.get()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.display_size.get().saturating_add(self.panel_height)
    }

    /// Physical pixels reserved for the control strip.
    #[must_use]
    pub fn panel_height(&self) -> u32 {
        self.panel_height
    }

    /// Leading bytes of the RGBA surface frame that hold the fractal.
    #[must_use]
    pub fn fractal_rgba_len(&self) -> usize {
        self.display_size.pixel_count() * 4
    }

    /// Surface pixel to fractal pixel; `None` inside the control strip.
    #[must_use]
    pub fn fractal_pixel(&self, x: usize, y: usize) -> Option<Point> {
        let point = Point {
            x: u32::try_from(x).ok()?,
            y: u32::try_from(y).ok()?,
        };

        self.display_size.contains_point(point).then_some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(side: u32, scale_factor: f64) -> SurfaceLayout {
        SurfaceLayout::new(DisplaySize::new(side).unwrap(), scale_factor)
    }

    #[test]
    fn test_panel_sits_below_the_square_display() {
        let layout = layout(800, 1.0);

        assert_eq!(layout.width(), 800);
        assert_eq!(layout.panel_height(), 56);
        assert_eq!(layout.height(), 856);
        assert_eq!(layout.fractal_rgba_len(), 800 * 800 * 4);
    }

    #[test]
    fn test_panel_height_follows_scale_factor() {
        assert_eq!(layout(100, 2.0).panel_height(), 112);
        assert_eq!(layout(100, 1.25).panel_height(), 70);
    }

    #[test]
    fn test_unusable_scale_factor_falls_back_to_one() {
        assert_eq!(layout(100, 0.0).panel_height(), 56);
        assert_eq!(layout(100, f64::NAN).panel_height(), 56);
    }

    #[test]
    fn test_fractal_pixel_excludes_panel_strip() {
        let layout = layout(4, 1.0);

        assert_eq!(layout.fractal_pixel(0, 0), Some(Point { x: 0, y: 0 }));
        assert_eq!(layout.fractal_pixel(3, 3), Some(Point { x: 3, y: 3 }));
        assert_eq!(layout.fractal_pixel(2, 4), None);
        assert_eq!(layout.fractal_pixel(0, 40), None);
    }
}
