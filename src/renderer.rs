use egui::{Align2, Color32, FontId, Painter, Rect, TextureHandle, TextureOptions, pos2, vec2};

use crate::canvas::Canvas;
use crate::config::PaintConfig;
use crate::input::INSTRUCTIONS;
use crate::tools::{ToolState, palette};

const STATUS_BAR_COLOR: Color32 = Color32::from_rgb(240, 240, 240);
const TEXT_COLOR: Color32 = Color32::BLACK;
const FONT_SIZE: f32 = 16.0;
/// Left edges of the four status labels, in canvas pixels
const LABEL_COLUMNS: [f32; 4] = [10.0, 150.0, 300.0, 400.0];
const LABEL_TOP: f32 = 5.0;

/// Texts of the status bar: tool, color, brush size and fill state.
pub fn status_labels(tools: &ToolState) -> [String; 4] {
    [
        format!("Tool: {}", tools.tool().name()),
        format!("Color: {}", palette::describe(tools.color())),
        format!("Size: {}", tools.brush_size()),
        format!("Fill: {}", if tools.fill() { "ON" } else { "OFF" }),
    ]
}

/// Paints the canvas and the UI overlay each frame.
///
/// The canvas texture is only re-uploaded when the canvas version moved.
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_version: Option<u64>,
    status_bar_height: f32,
    instructions_offset: f32,
}

impl Renderer {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            texture: None,
            uploaded_version: None,
            status_bar_height: config.status_bar_height,
            instructions_offset: config.instructions_offset,
        }
    }

    /// Returns true if the canvas changed since the last upload
    pub fn needs_upload(&self, canvas: &Canvas) -> bool {
        self.texture.is_none() || self.uploaded_version != Some(canvas.version())
    }

    fn sync_texture(&mut self, ctx: &egui::Context, canvas: &Canvas) {
        if !self.needs_upload(canvas) {
            return;
        }
        let image = canvas.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_version = Some(canvas.version());
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     ctx (egui::Context): The egui context for the current frame
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): Screen area the canvas is stretched over
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &Painter,
        rect: Rect,
        canvas: &Canvas,
        tools: &ToolState,
    ) {
        self.sync_texture(ctx, canvas);
        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }

        // overlay positions are laid out in canvas pixels
        let scale = rect.width() / canvas.width().max(1) as f32;
        let bar = Rect::from_min_size(rect.min, vec2(rect.width(), self.status_bar_height * scale));
        painter.rect_filled(bar, 0.0, STATUS_BAR_COLOR);

        let font = FontId::proportional(FONT_SIZE * scale);
        for (label, x) in status_labels(tools).into_iter().zip(LABEL_COLUMNS) {
            let pos = rect.min + vec2(x, LABEL_TOP) * scale;
            painter.text(pos, Align2::LEFT_TOP, label, font.clone(), TEXT_COLOR);
        }

        let instructions_pos = pos2(
            rect.min.x + LABEL_COLUMNS[0] * scale,
            rect.max.y - self.instructions_offset * scale,
        );
        painter.text(instructions_pos, Align2::LEFT_TOP, INSTRUCTIONS, font, TEXT_COLOR);
    }
}
