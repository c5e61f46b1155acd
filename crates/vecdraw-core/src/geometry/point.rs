use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A 2D point or free vector with a homogeneous `w` component.
///
/// Arithmetic acts on `x` and `y` only; `w` is carried from the left-hand
/// operand and is consumed by [`crate::Transform2d::transform`]. Equality
/// and ordering compare `x` and `y` and ignore `w`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default = "unit_w")]
    pub w: f64,
}

fn unit_w() -> f64 {
    1.0
}

impl Point {
    pub const ORIGIN: Point = Point {
        x: 0.0,
        y: 0.0,
        w: 1.0,
    };

    /// Unit vector along +X.
    pub const UNIT_X: Point = Point {
        x: 1.0,
        y: 0.0,
        w: 1.0,
    };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, w: 1.0 }
    }

    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean norm.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (*self - *other).length()
    }

    /// Angle in `[0, π]` between two vectors.
    ///
    /// NaN when either vector has zero length; use
    /// [`Point::try_angle_between`] when the input is not known to be valid.
    pub fn angle_between(&self, other: Point) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        // Rounding can push the ratio a hair past ±1.
        cos.clamp(-1.0, 1.0).acos()
    }

    pub fn try_angle_between(&self, other: Point) -> Result<f64, GeometryError> {
        if self.length() == 0.0 || other.length() == 0.0 {
            return Err(GeometryError::ZeroLengthVector);
        }
        Ok(self.angle_between(other))
    }

    /// The vector rotated a quarter turn counter-clockwise: `(-y, x)`.
    pub fn perp(&self) -> Point {
        Point::new(-self.y, self.x)
    }

    pub fn normalized(&self) -> Result<Point, GeometryError> {
        let len = self.length();
        if len == 0.0 {
            return Err(GeometryError::ZeroLengthVector);
        }
        Ok(*self / len)
    }

    pub fn abs(&self) -> Point {
        Point::new(self.x.abs(), self.y.abs())
    }

    pub fn approx_eq(&self, other: &Point, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// Component-wise partial order: `a < b` only when both coordinates are
/// smaller. Mixed comparisons are unordered.
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.x < other.x && self.y < other.y {
            Some(Ordering::Less)
        } else if self.x > other.x && self.y > other.y {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            w: self.w,
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            w: self.w,
        }
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul for Point {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        Point {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            w: self.w,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point {
            x: self.x * rhs,
            y: self.y * rhs,
            w: self.w,
        }
    }
}

impl Div for Point {
    type Output = Point;

    fn div(self, rhs: Point) -> Point {
        Point {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            w: self.w,
        }
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point {
            x: self.x / rhs,
            y: self.y / rhs,
            w: self.w,
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            x: -self.x,
            y: -self.y,
            w: self.w,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
