use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::commands::ExplorerCommand;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, warn};
use winit::{
    error::EventLoopError,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::Window,
};

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    controller: InteractiveController,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    cursor_position: Option<(f32, f32)>,
    latest_submitted_generation: u64,
    redraw_pending: bool,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            egui_ctx,
            egui_state,
            cursor_position: None,
            latest_submitted_generation: 0,
            redraw_pending: true,
        }
    }

    pub fn submit(&mut self, command: ExplorerCommand) {
        let Some(generation) = self.controller.submit(command) else {
            warn!("{:?} ignored while the render queue is full", command);
            return;
        };

        self.latest_submitted_generation = generation;
        debug!("submitted {:?} as generation {}", command, generation);
    }

    /// Blocks until the window closes.
    pub fn run(
        mut self,
        window: &'static Window,
        event_loop: EventLoop<GuiEvent>,
    ) -> Result<(), EventLoopError> {
        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                if self.presenter.drain_events() {
                    self.redraw_pending = true;
                }
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                self.handle_window_event(window, event, elwt);
            }
            Event::AboutToWait => {
                if self.redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
    }

    fn handle_window_event(
        &mut self,
        window: &Window,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<GuiEvent>,
    ) {
        let response = self.egui_state.on_window_event(window, event);

        if response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => {
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw_pending = false;

                // pick up anything that arrived between wake-ups
                self.presenter.drain_events();

                let mut egui_output = self.update_ui(window);
                let platform_output = std::mem::take(&mut egui_output.platform_output);
                self.egui_state
                    .handle_platform_output(window, platform_output);

                if egui_output
                    .viewport_output
                    .values()
                    .any(|v| v.repaint_delay.is_zero())
                {
                    self.redraw_pending = true;
                }

                if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                    error!("render error: {err}");
                    elwt.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = Some((position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_position = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if !response.consumed => {
                self.handle_click();
            }
            _ => {}
        }
    }

    fn handle_click(&mut self) {
        let Some(position) = self.cursor_position else {
            return;
        };

        if let Some(pixel) = self.presenter.window_pos_to_pixel(position) {
            self.submit(ExplorerCommand::ZoomAt(pixel));
        }
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let status = self.presenter.status();
        let status_line = status.status_line();
        let error_message = status.last_error_message().map(str::to_owned);
        let waiting = status.last_presented_generation() < self.latest_submitted_generation;
        let mut reset_clicked = false;
        let panel_height = self.presenter.layout().panel_height() as f32;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::TopBottomPanel::bottom("controls")
                .exact_height(panel_height / ctx.pixels_per_point())
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("Reset Display").clicked() {
                            reset_clicked = true;
                        }

                        ui.separator();
                        ui.label(status_line.as_str());

                        if waiting {
                            ui.spinner();
                        }
                    });

                    if let Some(message) = &error_message {
                        ui.colored_label(egui::Color32::LIGHT_RED, message.as_str());
                    }
                });
        });

        if reset_clicked {
            self.submit(ExplorerCommand::Reset);
        }

        output
    }
}
