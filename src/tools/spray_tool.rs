use std::f32::consts::TAU;

use rand::Rng;

use crate::canvas::Canvas;
use crate::geometry::PixelPos;

use super::ToolState;

/// Picks `2 * brush_size` points uniformly by angle and radius inside a disc
/// of radius `brush_size` around `center`.
pub fn spray_points<R: Rng>(rng: &mut R, center: PixelPos, brush_size: u32) -> Vec<PixelPos> {
    let radius = brush_size as f32;
    (0..brush_size * 2)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let distance = rng.gen_range(0.0..=radius);
            let x = center.x as f32 + distance * angle.cos();
            let y = center.y as f32 + distance * angle.sin();
            PixelPos::new(x as i32, y as i32)
        })
        .collect()
}

/// Scatters one-pixel dots of the active color around `center`.
pub fn spray<R: Rng>(canvas: &mut Canvas, tools: &ToolState, rng: &mut R, center: PixelPos) {
    for p in spray_points(rng, center, tools.brush_size()) {
        canvas.draw_point(p, tools.color());
    }
}
