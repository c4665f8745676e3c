use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerCommand {
    /// Render the current view as-is.
    Render,
    /// Restore the initial view, then render.
    Reset,
    /// Recenter on the clicked pixel, zoom, then render.
    ZoomAt(Point),
}
