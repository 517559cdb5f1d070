use std::time::Duration;

use crate::config::PaintConfig;
use crate::input::{Flow, InputHandler, route_event};
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// The eframe application: one session, its input handler and its renderer.
pub struct PaintApp {
    context: EditorContext,
    input: InputHandler,
    renderer: Renderer,
    frame_interval: Duration,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &PaintConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_context(EditorContext::new(config), config)
    }

    /// Builds the app around an existing session.
    pub fn with_context(context: EditorContext, config: &PaintConfig) -> Self {
        let canvas_rect = egui::Rect::from_min_size(egui::Pos2::ZERO, config.window_size());
        let canvas_size = [context.canvas.width(), context.canvas.height()];
        Self {
            context,
            input: InputHandler::new(canvas_rect, canvas_size),
            renderer: Renderer::new(config),
            frame_interval: config.frame_interval(),
        }
    }

    /// Routes every pending input event in arrival order.
    fn handle_input(&mut self, ctx: &egui::Context) -> Flow {
        self.input.set_canvas_rect(ctx.screen_rect());
        let mut flow = Flow::Continue;
        for event in self.input.process_input(ctx) {
            if route_event(&event, &mut self.context) == Flow::Quit {
                flow = Flow::Quit;
            }
        }
        flow
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.handle_input(ctx) == Flow::Quit {
            // the window is already closing; nothing left to paint
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();
                self.renderer
                    .render(ctx, painter, rect, &self.context.canvas, &self.context.tools);
            });

        ctx.request_repaint_after(self.frame_interval);
    }
}
