use crate::adapters::pixel_format::copy_pixel_buffer_to_rgba;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::point::Point;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::layout::SurfaceLayout;
use crate::presenters::pixels::adapter::PixelsAdapter;
use crate::presenters::status::ViewStatus;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{debug, error, warn};
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    surface_width: u32,
    surface_height: u32,
    layout: SurfaceLayout,
    status: ViewStatus,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        layout: SurfaceLayout,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let surface = window.inner_size();
        let surface_texture = SurfaceTexture::new(surface.width, surface.height, window);

        // fractal in the top rows, control strip below
        let mut pixels = Pixels::new(layout.width(), layout.height(), surface_texture)?;
        fill_black(pixels.frame_mut());

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            surface_width: surface.width,
            surface_height: surface.height,
            layout,
            status: ViewStatus::default(),
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn drain_events(&mut self) -> bool {
        let mut changed = false;

        for event in self.adapter.take_render_events() {
            match event {
                RenderEvent::Frame(frame) => {
                    if !self.status.accept_frame(&frame) {
                        continue;
                    }

                    let fractal_len = self.layout.fractal_rgba_len();
                    let Some(target) = self.pixels.frame_mut().get_mut(..fractal_len) else {
                        error!(
                            "dropping frame {}: surface is smaller than the fractal",
                            frame.generation
                        );
                        continue;
                    };

                    if let Err(err) = copy_pixel_buffer_to_rgba(&frame.pixel_buffer, target) {
                        error!("dropping frame {}: {}", frame.generation, err);
                        continue;
                    }

                    changed = true;
                }
                RenderEvent::Error(error) => {
                    self.status.record_error(&error);
                    changed = true;
                }
            }
        }

        changed
    }

    fn status(&self) -> &ViewStatus {
        &self.status
    }

    fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<Point> {
        match self.pixels.window_pos_to_pixel(position) {
            Ok((x, y)) => {
                let pixel = self.layout.fractal_pixel(x, y);
                if pixel.is_none() {
                    debug!("click at ({}, {}) is on the control strip", x, y);
                }
                pixel
            }
            Err((x, y)) => {
                warn!("click at ({}, {}) is off the fractal surface", x, y);
                None
            }
        }
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

fn fill_black(frame: &mut [u8]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&[0, 0, 0, 255]);
    }
}
