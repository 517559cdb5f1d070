use egui::Color32;

pub mod palette;

mod draw_stroke_tool;
pub use draw_stroke_tool::draw_stroke_segment;

mod shape_tool;
pub use shape_tool::{PendingShape, ShapeCommit, commit_shape};

mod spray_tool;
pub use spray_tool::{spray, spray_points};

/// Smallest brush size.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest brush size.
pub const MAX_BRUSH_SIZE: u32 = 50;

/// The drawing tools selectable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
    Spray,
    Rectangle,
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Pen,
        Tool::Eraser,
        Tool::Spray,
        Tool::Rectangle,
        Tool::Circle,
    ];

    /// Name shown in the status bar
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
            Tool::Spray => "Spray",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
        }
    }

    /// Shape tools commit once on release instead of painting while dragged.
    pub fn is_shape(&self) -> bool {
        matches!(self, Tool::Rectangle | Tool::Circle)
    }
}

/// Tool selection, color, brush size and fill toggle.
///
/// Every field is independent and every setter is total: sizes are clamped,
/// never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    tool: Tool,
    color: Color32,
    brush_size: u32,
    fill: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(5)
    }
}

impl ToolState {
    /// Pen, black, fill off, with the given (clamped) brush size.
    pub fn new(brush_size: u32) -> Self {
        Self {
            tool: Tool::Pen,
            color: palette::BLACK,
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            fill: false,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn fill(&self) -> bool {
        self.fill
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    pub fn grow_brush(&mut self) {
        self.set_brush_size(self.brush_size.saturating_add(1));
    }

    pub fn shrink_brush(&mut self) {
        self.set_brush_size(self.brush_size.saturating_sub(1));
    }

    pub fn toggle_fill(&mut self) {
        self.fill = !self.fill;
    }
}
