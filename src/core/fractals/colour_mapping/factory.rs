use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::colour_mapping::maps::fire_gradient::FireGradient;
use crate::core::fractals::colour_mapping::maps::hue_cycle::HueCycle;

/// `max_iterations` is only consulted by palettes that normalise against the cap.
#[must_use]
pub fn colour_map_factory(kind: ColourMapKinds, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKinds::HueCycle => Box::new(HueCycle),
        ColourMapKinds::FireGradient => Box::new(FireGradient::new(max_iterations)),
    }
}
