pub mod hsb_to_rgb;
pub mod map_coordinate;
pub mod recenter_and_zoom;
