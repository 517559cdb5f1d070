use egui::{Color32, ColorImage};
use image::{Rgba, RgbaImage};

use crate::error::CanvasError;
use crate::geometry::raster;
use crate::geometry::{PixelPos, PixelRect, ShapeStyle};

/// Background color of a fresh canvas; the eraser paints with it too.
pub const BACKGROUND: Color32 = Color32::WHITE;

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), 255])
}

/// The drawing surface: a fixed-size grid of opaque pixels, mutated in place.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
    /// Bumped on every mutation so the renderer knows when to re-upload
    version: u64,
}

/// Frozen copy of the canvas pixels at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pixels: RgbaImage,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel(&self, pos: PixelPos) -> Option<Color32> {
        pixel_at(&self.pixels, pos)
    }
}

fn pixel_at(pixels: &RgbaImage, pos: PixelPos) -> Option<Color32> {
    if pos.x < 0 || pos.y < 0 {
        return None;
    }
    pixels
        .get_pixel_checked(pos.x as u32, pos.y as u32)
        .map(|p| Color32::from_rgb(p[0], p[1], p[2]))
}

impl Canvas {
    /// Creates a canvas filled with the background color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, to_rgba(BACKGROUND)),
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect::from_min_size(PixelPos::default(), self.width() as i32, self.height() as i32)
    }

    /// Color at `pos`, or `None` outside the canvas.
    pub fn pixel(&self, pos: PixelPos) -> Option<Color32> {
        pixel_at(&self.pixels, pos)
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Color32) {
        let rgba = to_rgba(color);
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
        self.touch();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixels: self.pixels.clone(),
        }
    }

    /// Overwrites every pixel from `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), CanvasError> {
        if snapshot.pixels.dimensions() != self.pixels.dimensions() {
            return Err(CanvasError::DimensionMismatch {
                expected: self.pixels.dimensions(),
                found: snapshot.pixels.dimensions(),
            });
        }
        self.pixels.clone_from(&snapshot.pixels);
        self.touch();
        Ok(())
    }

    /// Paints a single pixel; no-op outside the canvas.
    pub fn draw_point(&mut self, pos: PixelPos, color: Color32) {
        if self.put(pos, to_rgba(color)) {
            self.touch();
        }
    }

    /// Draws a line of the given width by stamping a disc along its path.
    pub fn draw_line(&mut self, from: PixelPos, to: PixelPos, color: Color32, width: u32) {
        let rgba = to_rgba(color);
        let radius = (width / 2) as i32;
        for step in raster::line(from, to) {
            for p in raster::disc(step, radius) {
                self.put(p, rgba);
            }
        }
        self.touch();
    }

    pub fn draw_rect(&mut self, rect: PixelRect, color: Color32, style: ShapeStyle) {
        if rect.is_empty() {
            return;
        }
        let rgba = to_rgba(color);
        let area = rect.clip(self.width(), self.height());
        for p in area.pixels() {
            if raster::rect_covers(&rect, style, p) {
                self.put(p, rgba);
            }
        }
        self.touch();
    }

    pub fn draw_circle(
        &mut self,
        center: PixelPos,
        radius: i32,
        color: Color32,
        style: ShapeStyle,
    ) {
        if radius <= 0 {
            return;
        }
        let rgba = to_rgba(color);
        let area = raster::circle_bounds(center, radius).clip(self.width(), self.height());
        for p in area.pixels() {
            if raster::circle_covers(center, radius, style, p) {
                self.put(p, rgba);
            }
        }
        self.touch();
    }

    /// Converts the pixels into an egui image ready for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }

    fn put(&mut self, pos: PixelPos, rgba: Rgba<u8>) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let (x, y) = (pos.x as u32, pos.y as u32);
        if x >= self.width() || y >= self.height() {
            return false;
        }
        self.pixels.put_pixel(x, y, rgba);
        true
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(canvas: &Canvas, color: Color32) -> usize {
        canvas
            .bounds()
            .pixels()
            .filter(|p| canvas.pixel(*p) == Some(color))
            .count()
    }

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = Canvas::new(8, 6);
        assert_eq!(count(&canvas, Color32::WHITE), 48);
        assert_eq!(canvas.pixel(PixelPos::new(8, 0)), None);
        assert_eq!(canvas.pixel(PixelPos::new(-1, 0)), None);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut canvas = Canvas::new(4, 4);
        let before = canvas.snapshot();
        canvas.draw_point(PixelPos::new(1, 1), Color32::RED);
        assert_eq!(before.pixel(PixelPos::new(1, 1)), Some(Color32::WHITE));

        canvas.restore(&before).unwrap();
        assert_eq!(canvas.pixel(PixelPos::new(1, 1)), Some(Color32::WHITE));
    }

    #[test]
    fn test_restore_rejects_other_size() {
        let mut canvas = Canvas::new(4, 4);
        let other = Canvas::new(5, 4).snapshot();
        let err = canvas.restore(&other).unwrap_err();
        assert_eq!(
            err,
            CanvasError::DimensionMismatch { expected: (4, 4), found: (5, 4) }
        );
    }

    #[test]
    fn test_version_tracks_mutation() {
        let mut canvas = Canvas::new(4, 4);
        let v0 = canvas.version();
        canvas.draw_point(PixelPos::new(10, 10), Color32::RED);
        assert_eq!(canvas.version(), v0);
        canvas.draw_point(PixelPos::new(0, 0), Color32::RED);
        assert!(canvas.version() > v0);
    }

    #[test]
    fn test_clipped_drawing() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_line(PixelPos::new(-20, 5), PixelPos::new(30, 5), Color32::BLUE, 1);
        assert_eq!(count(&canvas, Color32::BLUE), 10);

        canvas.draw_circle(PixelPos::new(0, 0), 50, Color32::RED, ShapeStyle::Filled);
        assert_eq!(count(&canvas, Color32::RED), 100);
    }

    #[test]
    fn test_thick_line_width() {
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_line(PixelPos::new(2, 10), PixelPos::new(17, 10), Color32::BLACK, 5);
        // radius 2 disc around a horizontal path covers rows 8..=12
        for y in 8..=12 {
            assert_eq!(canvas.pixel(PixelPos::new(10, y)), Some(Color32::BLACK));
        }
        assert_eq!(canvas.pixel(PixelPos::new(10, 7)), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(PixelPos::new(10, 13)), Some(Color32::WHITE));
    }

    #[test]
    fn test_filled_rect_exact_cover() {
        let mut canvas = Canvas::new(20, 20);
        let rect = PixelRect::from_corners(PixelPos::new(2, 3), PixelPos::new(7, 5));
        canvas.draw_rect(rect, Color32::GREEN, ShapeStyle::Filled);
        assert_eq!(count(&canvas, Color32::GREEN), 10);
        for p in canvas.bounds().pixels() {
            let expected = if rect.contains(p) { Color32::GREEN } else { Color32::WHITE };
            assert_eq!(canvas.pixel(p), Some(expected));
        }
    }

    #[test]
    fn test_empty_rect_draws_nothing() {
        let mut canvas = Canvas::new(10, 10);
        let v0 = canvas.version();
        let rect = PixelRect::from_corners(PixelPos::new(3, 3), PixelPos::new(3, 8));
        canvas.draw_rect(rect, Color32::RED, ShapeStyle::Outline(2));
        assert_eq!(count(&canvas, Color32::RED), 0);
        assert_eq!(canvas.version(), v0);
    }

    #[test]
    fn test_color_image_matches() {
        let mut canvas = Canvas::new(3, 2);
        canvas.clear(Color32::BLACK);
        let image = canvas.to_color_image();
        assert_eq!(image.size, [3, 2]);
        assert!(image.pixels.iter().all(|c| *c == Color32::BLACK));
    }
}
