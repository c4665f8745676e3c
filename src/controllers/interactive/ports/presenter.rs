use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives every completed command, in submission order.
///
/// Called from the worker thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
