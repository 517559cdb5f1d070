use crate::canvas::{BACKGROUND, Canvas};
use crate::geometry::PixelPos;

use super::{Tool, ToolState};

/// Paints one segment of a freehand stroke for the pen or eraser.
///
/// The pen uses the active color, the eraser paints the background color.
/// Both use the brush size as the line width. Returns `false` for tools
/// that do not draw strokes.
pub fn draw_stroke_segment(
    canvas: &mut Canvas,
    tools: &ToolState,
    from: PixelPos,
    to: PixelPos,
) -> bool {
    let color = match tools.tool() {
        Tool::Pen => tools.color(),
        Tool::Eraser => BACKGROUND,
        _ => return false,
    };
    canvas.draw_line(from, to, color, tools.brush_size());
    true
}
