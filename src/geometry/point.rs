use crate::math::transform_3d::{self, Axis};
use crate::math::{Point2, Vector4};

/// A single 3D point stored in homogeneous coordinates.
///
/// The coordinate column is `[x, y, z, 1]`. Each transform builds a fresh
/// 4x4 matrix and left-multiplies it against the stored column; because all
/// transform matrices are affine (bottom row `[0, 0, 0, 1]`), the
/// homogeneous component stays exactly 1 through any chain of translations
/// and rotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coords: Vector4,
}

impl Point {
    /// Creates a point at `(x, y, z)`.
    ///
    /// Coordinates are stored as-is; non-finite values are accepted.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: Vector4::new(x, y, z, 1.0),
        }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Returns the z coordinate.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.coords.z
    }

    /// Returns the homogeneous coordinate column `[x, y, z, w]`.
    #[must_use]
    pub fn coords(&self) -> &Vector4 {
        &self.coords
    }

    /// Translates the point by `dx`, `dy` and `dz`, modifying it in-place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.coords = transform_3d::translation(dx, dy, dz) * self.coords;
    }

    /// Rotates the point about a principal axis, modifying it in-place.
    ///
    /// * `angle` - Rotation angle in radians.
    pub fn rotate(&mut self, angle: f64, axis: Axis) {
        self.coords = transform_3d::rotation(axis, angle) * self.coords;
    }

    /// Projects the point onto the 2D x-y plane for a viewer at distance `d`.
    ///
    /// Applies the perspective matrix to the stored column and divides the
    /// x and y components by the resulting homogeneous component. The point
    /// itself is left untouched.
    ///
    /// `d` is not validated: `d = 0`, or a point whose z equals `d`, drives
    /// the homogeneous divisor to zero and the projected components to
    /// infinity or NaN under IEEE 754 rules.
    #[must_use]
    pub fn perspective_projection(&self, d: f64) -> Point2 {
        let res = transform_3d::perspective(d) * self.coords;
        Point2::new(res.x / res.w, res.y / res.w)
    }
}
