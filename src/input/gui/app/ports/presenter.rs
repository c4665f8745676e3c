use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::point::Point;
use crate::presenters::layout::SurfaceLayout;
use crate::presenters::status::ViewStatus;
use egui::Context as EguiContext;
use std::sync::Arc;

pub trait GuiPresenterPort {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    /// Applies events delivered since the last call; true if anything visible changed.
    fn drain_events(&mut self) -> bool;

    fn status(&self) -> &ViewStatus;

    fn layout(&self) -> SurfaceLayout;

    /// Physical window position to fractal pixel, `None` off the fractal.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<Point>;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
}
