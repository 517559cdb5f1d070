//! Integer pixel geometry shared by the canvas primitives and the tools.

pub mod raster;

/// A position on the canvas in whole pixels.
///
/// Coordinates may lie outside the canvas; primitives clip when they write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: PixelPos) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        dx.hypot(dy)
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for PixelPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned pixel rectangle, half-open: `min` is inside, `max` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub min: PixelPos,
    pub max: PixelPos,
}

impl PixelRect {
    /// Bounding box spanned by two drag corners, in any order.
    pub fn from_corners(a: PixelPos, b: PixelPos) -> Self {
        Self {
            min: PixelPos::new(a.x.min(b.x), a.y.min(b.y)),
            max: PixelPos::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn from_min_size(min: PixelPos, width: i32, height: i32) -> Self {
        Self {
            min,
            max: min.offset(width, height),
        }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains(&self, p: PixelPos) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// The part of this rect inside `[0, width) x [0, height)`.
    pub fn clip(&self, width: u32, height: u32) -> Self {
        let w = width as i32;
        let h = height as i32;
        Self {
            min: PixelPos::new(self.min.x.clamp(0, w), self.min.y.clamp(0, h)),
            max: PixelPos::new(self.max.x.clamp(0, w), self.max.y.clamp(0, h)),
        }
    }

    /// Every pixel inside the rect, row by row.
    pub fn pixels(self) -> impl Iterator<Item = PixelPos> {
        let (min, max) = (self.min, self.max);
        (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| PixelPos::new(x, y)))
    }
}

/// How a closed shape is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeStyle {
    Filled,
    /// Border of the given width, grown inward from the shape's edge
    Outline(u32),
}
