use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::layout::SurfaceLayout;
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::{event_loop::EventLoopProxy, window::Window};

#[derive(Debug, Default, Clone, Copy)]
pub struct PixelsPresenterFactory;

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        layout: SurfaceLayout,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window, layout, event_loop_proxy)
    }
}
