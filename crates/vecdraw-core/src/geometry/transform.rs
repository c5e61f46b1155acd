use nalgebra::{Matrix3, Vector3};

use super::Point;

/// A 3x3 homogeneous affine transform.
///
/// Transforms are values. Composition is explicit: `compose(outer, inner)`
/// yields a transform that applies `inner` first and `outer` second. The
/// chaining helpers [`Transform2d::translate`], [`Transform2d::rotate`] and
/// [`Transform2d::scale`] right-multiply, so the last call in a chain is the
/// first one applied to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2d {
    matrix: Matrix3<f64>,
}

impl Transform2d {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    pub fn translation(offset: Point) -> Self {
        Self {
            matrix: Matrix3::new(
                1.0, 0.0, offset.x, //
                0.0, 1.0, offset.y, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// Counter-clockwise rotation about the origin, in radians.
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            matrix: Matrix3::new(
                cos, -sin, 0.0, //
                sin, cos, 0.0, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            matrix: Matrix3::new(
                sx, 0.0, 0.0, //
                0.0, sy, 0.0, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// `outer ∘ inner`: applies `inner`, then `outer`.
    pub fn compose(outer: Transform2d, inner: Transform2d) -> Self {
        Self {
            matrix: outer.matrix * inner.matrix,
        }
    }

    /// Local-to-world mapping for a shape: rotate about the local origin,
    /// then translate to `center`.
    pub fn object_to_world(center: Point, rotation: f64) -> Self {
        Self::compose(Self::translation(center), Self::rotation(rotation))
    }

    /// Exact inverse of [`Transform2d::object_to_world`]: translate by
    /// `-center`, then rotate by `-rotation`.
    pub fn world_to_object(center: Point, rotation: f64) -> Self {
        Self::compose(Self::rotation(-rotation), Self::translation(-center))
    }

    pub fn load_identity(&mut self) {
        self.matrix = Matrix3::identity();
    }

    pub fn translate(self, offset: Point) -> Self {
        Self::compose(self, Self::translation(offset))
    }

    pub fn rotate(self, theta: f64) -> Self {
        Self::compose(self, Self::rotation(theta))
    }

    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self::compose(self, Self::scaling(sx, sy))
    }

    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// Applies the matrix to the homogeneous coordinate `(x, y, w)`.
    pub fn transform(&self, p: Point) -> Point {
        let v = self.matrix * Vector3::new(p.x, p.y, p.w);
        Point {
            x: v.x,
            y: v.y,
            w: v.z,
        }
    }

    /// Applies only the linear part, ignoring translation.
    pub fn transform_vector(&self, v: Point) -> Point {
        let mut direction = v;
        direction.w = 0.0;
        let mut out = self.transform(direction);
        out.w = v.w;
        out
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::identity()
    }
}
