use crate::core::data::complex::Complex;
use crate::core::data::plane_range::{PlaneRange, PlaneRangeError};

/// Builds a range centred on `center` whose extent is the current extent
/// multiplied by `scale`. `scale < 1` zooms in, `scale > 1` zooms out.
///
/// Fails when the scaled extent is no longer a valid `PlaneRange`, e.g. a
/// non-positive scale or an extent that underflowed to zero at extreme zoom.
pub fn recenter_and_zoom(
    range: &PlaneRange,
    center: Complex,
    scale: f64,
) -> Result<PlaneRange, PlaneRangeError> {
    let x = center.real - (range.width() / 2.0) * scale;
    let y = center.imag - (range.height() / 2.0) * scale;

    PlaneRange::new(x, y, range.width() * scale, range.height() * scale)
}
