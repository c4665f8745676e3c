use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::layout::SurfaceLayout;
use winit::{event_loop::EventLoopProxy, window::Window};

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        layout: SurfaceLayout,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<T, pixels::Error>;
}
