use super::Point;

/// Axis-aligned extent in a shape's local space.
///
/// `w` and `h` are half-extents. Local space is Y-up, so the top edge is at
/// `center.y + h`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub center: Point,
    pub w: f64,
    pub h: f64,
}

impl BoundingBox {
    pub fn new(center: Point, w: f64, h: f64) -> Self {
        Self { center, w, h }
    }

    /// Smallest box enclosing every point. `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            center: Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0),
            w: (max_x - min_x) / 2.0,
            h: (max_y - min_y) / 2.0,
        })
    }

    pub fn tl(&self) -> Point {
        Point::new(self.center.x - self.w, self.center.y + self.h)
    }

    pub fn tr(&self) -> Point {
        Point::new(self.center.x + self.w, self.center.y + self.h)
    }

    pub fn br(&self) -> Point {
        Point::new(self.center.x + self.w, self.center.y - self.h)
    }

    pub fn bl(&self) -> Point {
        Point::new(self.center.x - self.w, self.center.y - self.h)
    }

    /// Corners in handle order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [self.tl(), self.tr(), self.br(), self.bl()]
    }

    /// Strict containment; points on the boundary are outside.
    pub fn is_inside(&self, q: Point) -> bool {
        let (w, h) = (self.w.abs(), self.h.abs());
        let d = q - self.center;
        -w < d.x && d.x < w && -h < d.y && d.y < h
    }

    /// Containment including the boundary.
    pub fn contains_inclusive(&self, q: Point) -> bool {
        let (w, h) = (self.w.abs(), self.h.abs());
        let d = q - self.center;
        -w <= d.x && d.x <= w && -h <= d.y && d.y <= h
    }
}
