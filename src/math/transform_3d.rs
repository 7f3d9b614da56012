use std::str::FromStr;

use crate::error::{HpointError, Result};
use crate::math::{Matrix4, Vector3};

/// Principal axis of rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl FromStr for Axis {
    type Err = HpointError;

    /// Parses a case-insensitive single-letter axis selector (`"x"`, `"Y"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`HpointError::InvalidAxis`] for anything other than X, Y, or Z.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            _ if s.eq_ignore_ascii_case("x") => Ok(Self::X),
            _ if s.eq_ignore_ascii_case("y") => Ok(Self::Y),
            _ if s.eq_ignore_ascii_case("z") => Ok(Self::Z),
            _ => Err(HpointError::InvalidAxis(s.to_string())),
        }
    }
}

/// Builds the affine translation matrix which shifts by `dx`, `dy` and `dz`
/// units in the x, y and z direction.
#[must_use]
pub fn translation(dx: f64, dy: f64, dz: f64) -> Matrix4 {
    Matrix4::new_translation(&Vector3::new(dx, dy, dz))
}

/// Builds the 4x4 homogeneous rotation matrix about a principal axis.
///
/// * `angle` - Rotation angle in radians.
#[must_use]
pub fn rotation(axis: Axis, angle: f64) -> Matrix4 {
    let c = angle.cos();
    let s = angle.sin();
    match axis {
        Axis::X => Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   -s,  0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
        Axis::Y => Matrix4::new(
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
            -s,  0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
        Axis::Z => Matrix4::new(
            c,   -s,  0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
    }
}

/// Builds the perspective projection matrix onto the x-y plane for a viewer
/// at distance `d` along the z axis.
///
/// `d` is taken as-is: `d = 0` puts a non-finite coefficient in the matrix
/// and the division-by-zero propagates into the projected coordinates.
#[must_use]
pub fn perspective(d: f64) -> Matrix4 {
    Matrix4::new(
        1.0, 0.0, 0.0,      0.0,
        0.0, 1.0, 0.0,      0.0,
        0.0, 0.0, 0.0,      0.0,
        0.0, 0.0, -1.0 / d, 1.0,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::math::{Vector4, TOLERANCE};

    #[test]
    fn parse_axis_is_case_insensitive() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("X".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!("Z".parse::<Axis>().unwrap(), Axis::Z);
    }

    #[test]
    fn parse_invalid_axis_is_rejected() {
        let err = "q".parse::<Axis>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"q\""), "message should name the input: {msg}");
        assert!(msg.contains("X, Y, or Z"), "message should list the axes: {msg}");
        assert!("xy".parse::<Axis>().is_err());
        assert!("".parse::<Axis>().is_err());
    }

    #[test]
    fn zero_translation_is_identity() {
        let matrix = translation(0.0, 0.0, 0.0);
        assert!((matrix - Matrix4::identity()).norm() < TOLERANCE);
    }

    #[test]
    fn translation_matrix_has_offsets_in_last_column() {
        let matrix = translation(2.0, -3.0, 0.5);
        assert!((matrix[(0, 3)] - 2.0).abs() < TOLERANCE);
        assert!((matrix[(1, 3)] + 3.0).abs() < TOLERANCE);
        assert!((matrix[(2, 3)] - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn zero_rotation_is_identity() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let matrix = rotation(axis, 0.0);
            assert!((matrix - Matrix4::identity()).norm() < TOLERANCE);
        }
    }

    #[test]
    fn rotation_matrices_are_affine() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let matrix = rotation(axis, 0.37);
            assert_eq!(matrix[(3, 0)], 0.0);
            assert_eq!(matrix[(3, 1)], 0.0);
            assert_eq!(matrix[(3, 2)], 0.0);
            assert_eq!(matrix[(3, 3)], 1.0);
        }
    }

    #[test]
    fn quarter_turn_about_z_moves_x_axis_onto_y() {
        let v = rotation(Axis::Z, FRAC_PI_2) * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!(v.x.abs() < TOLERANCE);
        assert!((v.y - 1.0).abs() < TOLERANCE);
        assert!(v.z.abs() < TOLERANCE);
        assert!((v.w - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn perspective_matrix_scales_w_by_depth() {
        let matrix = perspective(10.0);
        let v = matrix * Vector4::new(2.0, 4.0, 5.0, 1.0);
        // w = -z/d + 1
        assert!((v.w - 0.5).abs() < TOLERANCE);
        assert!((v.x - 2.0).abs() < TOLERANCE);
        assert!((v.y - 4.0).abs() < TOLERANCE);
        assert_eq!(v.z, 0.0);
    }
}
