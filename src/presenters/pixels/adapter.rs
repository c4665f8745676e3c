use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::events::GuiEvent;
use log::debug;
use std::sync::{Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;

/// Hands worker events to the UI thread and wakes the event loop.
pub struct PixelsAdapter {
    render_events: Mutex<Vec<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        self.render_events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);

        if self.event_loop_proxy.send_event(GuiEvent::Wake).is_err() {
            debug!("event loop closed; render event left undelivered");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_events: Mutex::new(Vec::new()),
            event_loop_proxy,
        }
    }

    /// Events in the order the worker produced them.
    pub fn take_render_events(&self) -> Vec<RenderEvent> {
        std::mem::take(
            &mut *self
                .render_events
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}
