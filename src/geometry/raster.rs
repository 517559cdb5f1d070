use super::{PixelPos, PixelRect, ShapeStyle};

/// Walks a Bresenham line from `from` to `to`, both ends included.
pub fn line(from: PixelPos, to: PixelPos) -> Vec<PixelPos> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = from.x;
    let mut y = from.y;
    let mut points = Vec::with_capacity((dx - dy) as usize + 1);

    loop {
        points.push(PixelPos::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Pixels of a filled disc; radius 0 is the center pixel alone.
pub fn disc(center: PixelPos, radius: i32) -> impl Iterator<Item = PixelPos> {
    let r = radius.max(0);
    let r2 = r * r;
    (-r..=r).flat_map(move |dy| {
        (-r..=r)
            .filter(move |dx| dx * dx + dy * dy <= r2)
            .map(move |dx| center.offset(dx, dy))
    })
}

/// Whether `p` is painted when `rect` is drawn with `style`.
pub fn rect_covers(rect: &PixelRect, style: ShapeStyle, p: PixelPos) -> bool {
    if !rect.contains(p) {
        return false;
    }
    match style {
        ShapeStyle::Filled => true,
        ShapeStyle::Outline(width) => {
            let inset = (p.x - rect.min.x)
                .min(rect.max.x - 1 - p.x)
                .min(p.y - rect.min.y)
                .min(rect.max.y - 1 - p.y);
            inset < width as i32
        }
    }
}

/// Bounding box of a circle, half-open.
pub fn circle_bounds(center: PixelPos, radius: i32) -> PixelRect {
    PixelRect {
        min: center.offset(-radius, -radius),
        max: center.offset(radius + 1, radius + 1),
    }
}

/// Whether `p` is painted when a circle of `radius` around `center` is drawn
/// with `style`. An outline at least as wide as the radius is a filled disc.
pub fn circle_covers(center: PixelPos, radius: i32, style: ShapeStyle, p: PixelPos) -> bool {
    if radius <= 0 {
        return false;
    }
    let dx = i64::from(p.x - center.x);
    let dy = i64::from(p.y - center.y);
    let d2 = dx * dx + dy * dy;
    let r = i64::from(radius);
    if d2 > r * r {
        return false;
    }
    match style {
        ShapeStyle::Filled => true,
        ShapeStyle::Outline(width) => {
            let inner = r - i64::from(width);
            inner <= 0 || d2 > inner * inner
        }
    }
}
