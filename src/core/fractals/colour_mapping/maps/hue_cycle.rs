use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use crate::core::fractals::colour_mapping::kinds::ColourMapKinds;
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

const HUE_OFFSET: f32 = 0.7;
const ITERATIONS_PER_CYCLE: f32 = 200.0;

/// Hue for an escape count: `0.7 + iterations / 200`, wrapped into `[0, 1)`.
#[must_use]
pub fn hue_for_iterations(iterations: u32) -> f32 {
    let hue = HUE_OFFSET + iterations as f32 / ITERATIONS_PER_CYCLE;

    hue - hue.floor()
}

/// Rainbow ramp that repeats every 200 iterations so neighbouring escape
/// bands stay distinguishable at any depth. Points inside the set are black.
#[derive(Debug, Clone, Copy, Default)]
pub struct HueCycle;

impl ColourMap for HueCycle {
    fn map(&self, value: IterationResult) -> Colour {
        value.escape_count().map_or(Colour::BLACK, |iterations| {
            hsb_to_rgb(hue_for_iterations(iterations), 1.0, 1.0)
        })
    }

    fn display_name(&self) -> &str {
        ColourMapKinds::HueCycle.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_is_black() {
        assert_eq!(HueCycle.map(IterationResult::Unbounded), Colour::BLACK);
    }

    #[test]
    fn test_hue_starts_at_offset() {
        assert!((hue_for_iterations(0) - 0.7).abs() < 1e-6);
        assert!((hue_for_iterations(20) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_hue_always_in_unit_interval() {
        for iterations in (0..2000).step_by(7) {
            let hue = hue_for_iterations(iterations);
            assert!((0.0..1.0).contains(&hue), "hue {} for {}", hue, iterations);
        }
    }

    #[test]
    fn test_hue_wraps_past_one() {
        // 0.7 + 100 / 200 = 1.2 → 0.2
        assert!((hue_for_iterations(100) - 0.2).abs() < 1e-6);
        // 0.7 + 1999 / 200 = 10.695 → 0.695
        assert!((hue_for_iterations(1999) - 0.695).abs() < 1e-4);
    }

    #[test]
    fn test_first_escape_is_violet() {
        assert_eq!(
            HueCycle.map(IterationResult::Escaped(0)),
            Colour { r: 51, g: 0, b: 255 }
        );
    }

    #[test]
    fn test_sixty_iterations_wraps_to_red() {
        assert_eq!(
            HueCycle.map(IterationResult::Escaped(60)),
            Colour { r: 255, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_ramp_repeats_every_cycle() {
        assert_eq!(
            HueCycle.map(IterationResult::Escaped(0)),
            HueCycle.map(IterationResult::Escaped(200))
        );
    }

    #[test]
    fn test_escaped_is_never_black() {
        for iterations in 0..400 {
            assert_ne!(HueCycle.map(IterationResult::Escaped(iterations)), Colour::BLACK);
        }
    }
}
