use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use crate::core::fractals::colour_mapping::kinds::ColourMapKinds;

/// Black → red → orange → yellow → white across the iteration cap.
#[derive(Debug)]
pub struct FireGradient {
    max_iterations: u32,
}

impl FireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }
}

impl ColourMap for FireGradient {
    fn map(&self, value: IterationResult) -> Colour {
        let Some(iterations) = value.escape_count() else {
            return Colour::BLACK;
        };

        let t = (iterations as f64 / self.max_iterations as f64).min(1.0);

        let (r, g, b) = if t < 0.25 {
            ((t / 0.25 * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            (255, ((t - 0.25) / 0.25 * 165.0) as u8, 0)
        } else if t < 0.75 {
            (255, (165.0 + (t - 0.5) / 0.25 * 90.0) as u8, 0)
        } else {
            (255, 255, ((t - 0.75) / 0.25 * 255.0) as u8)
        };

        Colour { r, g, b }
    }

    fn display_name(&self) -> &str {
        ColourMapKinds::FireGradient.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(iterations: u32) -> Colour {
        FireGradient::new(100).map(IterationResult::Escaped(iterations))
    }

    #[test]
    fn test_unbounded_is_black() {
        assert_eq!(
            FireGradient::new(100).map(IterationResult::Unbounded),
            Colour::BLACK
        );
    }

    #[test]
    fn test_gradient_stops() {
        assert_eq!(fire(0), Colour { r: 0, g: 0, b: 0 });
        assert_eq!(fire(25), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(fire(50), Colour { r: 255, g: 165, b: 0 });
        assert_eq!(fire(75), Colour { r: 255, g: 255, b: 0 });
    }

    #[test]
    fn test_near_cap_is_near_white() {
        let colour = fire(99);

        assert_eq!((colour.r, colour.g), (255, 255));
        assert!(colour.b > 240);
    }

    #[test]
    fn test_zero_cap_does_not_divide_by_zero() {
        let colour = FireGradient::new(0).map(IterationResult::Escaped(0));

        assert_eq!(colour, Colour::BLACK);
    }
}
