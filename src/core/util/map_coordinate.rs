/// Maps pixel index `pixel` on an axis of `axis_len` pixels onto the plane
/// interval `[range_min, range_min + extent)`.
///
/// `axis_len` must be non-zero; `DisplaySize` guarantees this for render and
/// click callers.
#[inline]
#[must_use]
pub fn map_coordinate(range_min: f64, extent: f64, axis_len: u32, pixel: u32) -> f64 {
    debug_assert!(axis_len > 0, "axis length must be non-zero");

    range_min + (pixel as f64 / axis_len as f64) * extent
}
