use egui::Color32;

use crate::canvas::Canvas;
use crate::geometry::{PixelPos, PixelRect, ShapeStyle};

use super::{Tool, ToolState};

/// Anchor of a rectangle or circle drag, captured on press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingShape {
    pub anchor: PixelPos,
    pub tool: Tool,
}

impl PendingShape {
    /// Starts a shape drag if `tool` is a shape tool.
    pub fn begin(tool: Tool, anchor: PixelPos) -> Option<Self> {
        tool.is_shape().then_some(Self { anchor, tool })
    }
}

/// A shape resolved from a finished drag, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeCommit {
    Rectangle {
        rect: PixelRect,
        color: Color32,
        style: ShapeStyle,
    },
    Circle {
        center: PixelPos,
        radius: i32,
        color: Color32,
        style: ShapeStyle,
    },
}

impl ShapeCommit {
    /// Resolves the shape the active tool draws for a drag from `anchor`
    /// to `release`. `None` when the active tool is not a shape tool.
    pub fn resolve(tools: &ToolState, anchor: PixelPos, release: PixelPos) -> Option<Self> {
        let style = if tools.fill() {
            ShapeStyle::Filled
        } else {
            ShapeStyle::Outline(tools.brush_size())
        };
        let color = tools.color();
        match tools.tool() {
            Tool::Rectangle => Some(ShapeCommit::Rectangle {
                rect: PixelRect::from_corners(anchor, release),
                color,
                style,
            }),
            Tool::Circle => Some(ShapeCommit::Circle {
                center: anchor,
                radius: anchor.distance(release) as i32,
                color,
                style,
            }),
            _ => None,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        match *self {
            ShapeCommit::Rectangle { rect, color, style } => canvas.draw_rect(rect, color, style),
            ShapeCommit::Circle { center, radius, color, style } => {
                canvas.draw_circle(center, radius, color, style)
            }
        }
    }
}

/// Finishes a shape drag on release.
///
/// The shape drawn is chosen by the tool active at release time; the anchor
/// comes from the press. Without a pending anchor nothing is drawn.
pub fn commit_shape(
    canvas: &mut Canvas,
    tools: &ToolState,
    pending: Option<PendingShape>,
    release: PixelPos,
) -> Option<ShapeCommit> {
    let pending = pending?;
    let commit = ShapeCommit::resolve(tools, pending.anchor, release)?;
    commit.draw(canvas);
    Some(commit)
}
