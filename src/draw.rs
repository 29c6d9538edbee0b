//! Drawing primitives for [`Pixmap`].
//!
//! Coordinates are signed so shapes may hang off the canvas; every pixel
//! that lands outside `[0, width) x [0, height)` is dropped without error.

use core::f64::consts::PI;
use core::ops::RangeInclusive;

use crate::pixel::Rgb8;
use crate::raster::Pixmap;

/// Integer canvas coordinate: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Pixmap {
    /// Color one pixel; a point off the canvas is ignored.
    pub fn set_pixel(&mut self, point: Point, color: Rgb8) {
        self.plot(i64::from(point.x), i64::from(point.y), color);
    }

    /// Bresenham line from `p1` to `p2`, both endpoints included.
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: Rgb8) {
        let (mut x, mut y) = (i64::from(p1.x), i64::from(p1.y));
        let (x2, y2) = (i64::from(p2.x), i64::from(p2.y));

        let dx = (x2 - x).abs();
        let dy = (y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.plot(x, y, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Stroke the outline with corners at `origin` and `origin + (width, height)`.
    pub fn draw_rectangle(&mut self, origin: Point, width: i32, height: i32, color: Rgb8) {
        let right = origin.x.saturating_add(width);
        let bottom = origin.y.saturating_add(height);
        let p2 = Point::new(right, origin.y);
        let p3 = Point::new(right, bottom);
        let p4 = Point::new(origin.x, bottom);

        self.draw_line(origin, p2, color);
        self.draw_line(p2, p3, color);
        self.draw_line(p3, p4, color);
        self.draw_line(p4, origin, color);
    }

    /// Fill `[origin.x, origin.x + width) x [origin.y, origin.y + height)`.
    ///
    /// Non-positive sizes draw nothing.
    pub fn draw_filled_rectangle(&mut self, origin: Point, width: i32, height: i32, color: Rgb8) {
        if width <= 0 || height <= 0 {
            return;
        }
        let x0 = i64::from(origin.x);
        let y0 = i64::from(origin.y);
        for y in self.visible_rows(y0, y0 + i64::from(height) - 1) {
            self.span(x0, x0 + i64::from(width) - 1, y, color);
        }
    }

    /// Stroke the three edges p1-p2, p1-p3 and p3-p2.
    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Rgb8) {
        self.draw_line(p1, p2, color);
        self.draw_line(p1, p3, color);
        self.draw_line(p3, p2, color);
    }

    /// Scanline fill.
    ///
    /// Vertices are sorted top to bottom. Each row gets one span between
    /// the long edge (top to bottom) and the short edge that covers it
    /// (top to middle, then middle to bottom), with span ends rounded to
    /// the nearest column.
    pub fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Rgb8) {
        let mut v = [p1, p2, p3];
        v.sort_by_key(|p| p.y);
        let [top, mid, bottom] = v.map(|p| (f64::from(p.x), i64::from(p.y)));

        let edge_x = |from: (f64, i64), to: (f64, i64), y: i64| -> f64 {
            if to.1 == from.1 {
                from.0
            } else {
                from.0 + (to.0 - from.0) * (y - from.1) as f64 / (to.1 - from.1) as f64
            }
        };

        if top.1 == bottom.1 {
            // every vertex on one row
            let xs = [top.0, mid.0, bottom.0];
            let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            self.span(lo as i64, hi as i64, top.1, color);
            return;
        }

        for y in self.visible_rows(top.1, bottom.1) {
            let long = edge_x(top, bottom, y);
            let short = if y < mid.1 {
                edge_x(top, mid, y)
            } else {
                edge_x(mid, bottom, y)
            };
            self.span(round(long), round(short), y, color);
        }
    }

    /// Polar-sampled circle outline.
    ///
    /// Angles step by `1 / radius` radians, so large circles can show gaps
    /// and small ones revisit pixels. A radius of zero or less draws nothing.
    pub fn draw_circle(&mut self, center: Point, radius: i32, color: Rgb8) {
        if radius <= 0 {
            return;
        }
        for (x, y) in circle_samples(center, radius) {
            self.plot(x, y, color);
        }
    }

    /// Solid disk: every pixel with `dx² + dy² <= radius²`, plus the sampled outline.
    pub fn draw_filled_circle(&mut self, center: Point, radius: i32, color: Rgb8) {
        if radius <= 0 {
            return;
        }
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let r = i64::from(radius);
        for y in self.visible_rows(cy - r, cy + r) {
            let dy = y - cy;
            let half = isqrt(r * r - dy * dy);
            self.span(cx - half, cx + half, y, color);
        }
        self.draw_circle(center, radius, color);
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgb8) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            self.set(x, y, color);
        }
    }

    /// Rows of `top..=bottom` that lie on the canvas.
    fn visible_rows(&self, top: i64, bottom: i64) -> RangeInclusive<i64> {
        let (_, height) = self.size();
        top.max(0)..=bottom.min(i64::from(height) - 1)
    }

    /// Color row `y` from column `x0` to `x1` inclusive, in either order, clipped to the canvas.
    fn span(&mut self, x0: i64, x1: i64, y: i64, color: Rgb8) {
        let (width, height) = self.size();
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        if y < 0 || y >= i64::from(height) || hi < 0 || lo >= i64::from(width) {
            return;
        }
        let lo = lo.max(0) as usize;
        let hi = hi.min(i64::from(width) - 1) as usize;
        let start = y as usize * width as usize;
        self.grid_mut().as_mut_slice()[start + lo..=start + hi].fill(color);
    }
}

fn circle_samples(center: Point, radius: i32) -> impl Iterator<Item = (i64, i64)> {
    let r = f64::from(radius);
    let step = 1.0 / r;
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let mut theta = -0.01;
    core::iter::from_fn(move || {
        if theta > 1.99 * PI {
            return None;
        }
        // `as` truncates toward zero
        let x = cx + (r * libm::cos(theta)) as i64;
        let y = cy + (r * libm::sin(theta)) as i64;
        theta += step;
        Some((x, y))
    })
}

fn round(v: f64) -> i64 {
    libm::round(v) as i64
}

/// Largest `s` with `s * s <= n`.
fn isqrt(n: i64) -> i64 {
    let mut s = libm::sqrt(n as f64) as i64;
    while s * s > n {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    s
}
