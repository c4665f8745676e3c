use crate::config::explorer_config::ExplorerConfig;
use crate::controllers::explorer::session::ExplorerSession;
use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::commands::ExplorerCommand;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::presenters::layout::SurfaceLayout;
use log::info;
use std::marker::PhantomData;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), GuiError> {
        let session = ExplorerSession::new(&self.config)?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();
        let scale_factor = event_loop
            .primary_monitor()
            .map_or(1.0, |monitor| monitor.scale_factor());
        let layout = SurfaceLayout::new(self.config.display_size, scale_factor);

        // pixels needs a 'static surface; the window lives for the whole process
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Explorer")
                .with_inner_size(PhysicalSize::new(layout.width(), layout.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = self
            .presenter_factory
            .build(window, layout, event_loop_proxy)?;
        let controller = InteractiveController::new(session, presenter.share_adapter());
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);

        info!("opening {} explorer window", self.config.display_size);
        app.submit(ExplorerCommand::Render);

        app.run(window, event_loop)?;

        Ok(())
    }
}
