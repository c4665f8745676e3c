/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The render worker delivered something.
    ///
    /// Does not redraw by itself; the handler decides after draining events.
    Wake,
}
