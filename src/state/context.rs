//! The drawing session.
//!
//! `EditorContext` owns everything a session mutates: the canvas, the undo
//! history, the tool settings and the pointer state. It is created once by
//! the app and handed by `&mut` to the input router each frame, and by `&` to
//! the renderer. Nothing here is shared or global.
//!
//! # Example
//!
//! ```rust
//! use quick_draw::{Action, EditorContext, PaintConfig, PixelPos, Tool};
//!
//! let mut context = EditorContext::new(&PaintConfig::default());
//! context.apply(Action::SelectColor(quick_draw::tools::palette::PALETTE[2]));
//! context.pointer_down(PixelPos::new(10, 10));
//! context.pointer_move(PixelPos::new(40, 10));
//! context.pointer_up(PixelPos::new(40, 10));
//! assert_eq!(context.tools.tool(), Tool::Pen);
//!
//! context.apply(Action::Undo);
//! assert_eq!(context.canvas.pixel(PixelPos::new(20, 10)), Some(egui::Color32::WHITE));
//! ```
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::canvas::{BACKGROUND, Canvas};
use crate::config::PaintConfig;
use crate::geometry::PixelPos;
use crate::history::History;
use crate::input::Action;
use crate::tools::{self, PendingShape, ShapeCommit, Tool, ToolState};

use super::EditorState;

/// The main context for a drawing session.
#[derive(Debug)]
pub struct EditorContext {
    /// The pixels being drawn on
    pub canvas: Canvas,
    /// Snapshots for undo
    pub history: History,
    /// Active tool, color, brush size and fill toggle
    pub tools: ToolState,
    /// Pointer state
    pub state: EditorState,
    rng: StdRng,
}

impl EditorContext {
    /// Creates a session with a blank canvas, seeding the spray tool from
    /// system entropy.
    pub fn new(config: &PaintConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a session whose spray scatter comes from `rng`.
    ///
    /// The blank canvas is recorded as the first history entry.
    pub fn with_rng(config: &PaintConfig, rng: StdRng) -> Self {
        let canvas = Canvas::new(config.canvas_width, config.canvas_height);
        let mut history = History::new(config.history_capacity);
        history.push(canvas.snapshot());
        Self {
            canvas,
            history,
            tools: ToolState::new(config.initial_brush_size),
            state: EditorState::Idle,
            rng,
        }
    }

    /// Applies a keyboard action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectColor(color) => {
                self.tools.set_color(color);
                log::debug!("Color set to {}", tools::palette::describe(color));
            }
            Action::GrowBrush => {
                self.tools.grow_brush();
                log::debug!("Brush size {}", self.tools.brush_size());
            }
            Action::ShrinkBrush => {
                self.tools.shrink_brush();
                log::debug!("Brush size {}", self.tools.brush_size());
            }
            Action::SelectTool(tool) => {
                self.tools.set_tool(tool);
                log::debug!("Tool set to {}", tool.name());
            }
            Action::ToggleFill => {
                self.tools.toggle_fill();
                log::debug!("Fill {}", if self.tools.fill() { "on" } else { "off" });
            }
            Action::NewCanvas => self.new_canvas(),
            Action::Undo => {
                self.undo();
            }
        }
    }

    /// Clears the canvas to white and records the blank canvas as the newest
    /// undo entry.
    pub fn new_canvas(&mut self) {
        self.canvas.clear(BACKGROUND);
        self.checkpoint();
        log::info!("New canvas");
    }

    /// Restores the most recent snapshot. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.canvas);
        log::debug!(
            "Undo {} ({} left)",
            if undone { "applied" } else { "skipped" },
            self.history.len()
        );
        undone
    }

    /// Primary button pressed at `pos`.
    pub fn pointer_down(&mut self, pos: PixelPos) {
        self.state = EditorState::Drawing {
            last_pos: pos,
            pending: PendingShape::begin(self.tools.tool(), pos),
        };
        self.checkpoint();
    }

    /// Pointer moved to `pos`. Paints only while the primary button is held.
    pub fn pointer_move(&mut self, pos: PixelPos) {
        let EditorState::Drawing { last_pos, pending } = self.state else {
            return;
        };
        match self.tools.tool() {
            Tool::Pen | Tool::Eraser => {
                tools::draw_stroke_segment(&mut self.canvas, &self.tools, last_pos, pos);
                self.state = EditorState::Drawing { last_pos: pos, pending };
            }
            Tool::Spray => tools::spray(&mut self.canvas, &self.tools, &mut self.rng, pos),
            Tool::Rectangle | Tool::Circle => {}
        }
    }

    /// Primary button released at `pos`. Commits a pending rectangle or
    /// circle, records the committed canvas and returns what was drawn.
    ///
    /// A shape leaves two entries: the pre-press canvas and the committed
    /// one. The first undo after a shape restores the committed canvas, the
    /// second removes the shape.
    pub fn pointer_up(&mut self, pos: PixelPos) -> Option<ShapeCommit> {
        let pending = self.state.pending_shape();
        self.state = EditorState::Idle;
        if !self.tools.tool().is_shape() {
            return None;
        }
        let commit = tools::commit_shape(&mut self.canvas, &self.tools, pending, pos);
        match &commit {
            Some(shape) => {
                self.checkpoint();
                log::debug!("Committed {shape:?}");
            }
            None => log::debug!("Shape release at {pos:?} without an anchor"),
        }
        commit
    }

    fn checkpoint(&mut self) {
        self.history.push(self.canvas.snapshot());
    }
}
