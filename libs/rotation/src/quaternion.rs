// This file is part of Gimbal.
//
// Gimbal is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Gimbal is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Gimbal.  If not, see <http://www.gnu.org/licenses/>.
//! Unit quaternion <-> rotation matrix, in closed form.
use crate::RotationError;
use log::trace;
use nalgebra::{Matrix3, Quaternion, UnitQuaternion};

/// Build a rotation quaternion from raw (w, x, y, z) components, normalizing
/// as needed. The sign of the input is kept: q and -q are both accepted.
pub fn try_from_components(
    w: f64,
    x: f64,
    y: f64,
    z: f64,
) -> Result<UnitQuaternion<f64>, RotationError> {
    let q = Quaternion::new(w, x, y, z);
    if !q.coords.iter().all(|v| v.is_finite()) {
        return Err(RotationError::NonFinite);
    }
    UnitQuaternion::try_new(q, f64::EPSILON).ok_or(RotationError::DegenerateQuaternion)
}

pub fn to_matrix(q: &UnitQuaternion<f64>) -> Matrix3<f64> {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    Matrix3::new(
        1.0 - 2.0 * (y * y + z * z),
        2.0 * (x * y - w * z),
        2.0 * (x * z + w * y),
        2.0 * (x * y + w * z),
        1.0 - 2.0 * (x * x + z * z),
        2.0 * (y * z - w * x),
        2.0 * (x * z - w * y),
        2.0 * (y * z + w * x),
        1.0 - 2.0 * (x * x + y * y),
    )
}

/// Extract the rotation from a (nominally orthonormal) matrix.
///
/// Each of 4w², 4x², 4y² and 4z² can be read off the diagonal; we take the
/// square root of whichever is largest and derive the other three components
/// from the off-diagonal sums and differences, so we never divide by a small
/// number. The four candidates always sum to 4, so the chosen one is at least
/// 1 and the result is defined for any finite input.
pub fn from_matrix(m: &Matrix3<f64>) -> UnitQuaternion<f64> {
    let trace = m.trace();
    let candidates = [
        1.0 + trace,
        1.0 + m[(0, 0)] - m[(1, 1)] - m[(2, 2)],
        1.0 - m[(0, 0)] + m[(1, 1)] - m[(2, 2)],
        1.0 - m[(0, 0)] - m[(1, 1)] + m[(2, 2)],
    ];
    let mut branch = 0;
    for (i, &c) in candidates.iter().enumerate().skip(1) {
        if c > candidates[branch] {
            branch = i;
        }
    }
    trace!("matrix -> quaternion using branch {}", branch);

    let root = candidates[branch].sqrt() / 2.0;
    let f = 4.0 * root;
    let q = match branch {
        0 => Quaternion::new(
            root,
            (m[(2, 1)] - m[(1, 2)]) / f,
            (m[(0, 2)] - m[(2, 0)]) / f,
            (m[(1, 0)] - m[(0, 1)]) / f,
        ),
        1 => Quaternion::new(
            (m[(2, 1)] - m[(1, 2)]) / f,
            root,
            (m[(0, 1)] + m[(1, 0)]) / f,
            (m[(0, 2)] + m[(2, 0)]) / f,
        ),
        2 => Quaternion::new(
            (m[(0, 2)] - m[(2, 0)]) / f,
            (m[(0, 1)] + m[(1, 0)]) / f,
            root,
            (m[(1, 2)] + m[(2, 1)]) / f,
        ),
        _ => Quaternion::new(
            (m[(1, 0)] - m[(0, 1)]) / f,
            (m[(0, 2)] + m[(2, 0)]) / f,
            (m[(1, 2)] + m[(2, 1)]) / f,
            root,
        ),
    };
    UnitQuaternion::new_normalize(q)
}

/// True if `a` and `b` describe the same rotation, accepting either sign.
pub fn same_rotation(a: &UnitQuaternion<f64>, b: &UnitQuaternion<f64>, tolerance: f64) -> bool {
    let same = (a.coords - b.coords).amax();
    let flipped = (a.coords + b.coords).amax();
    same.min(flipped) <= tolerance
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::random_rotation;
    use approx::assert_relative_eq;
    use nalgebra::{Rotation3, Vector3};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_matrix_round_trip() {
        let mut rng = fastrand::Rng::with_seed(0x5EED);
        for _ in 0..2_000 {
            let q = random_rotation(&mut rng);
            let back = from_matrix(&to_matrix(&q));
            assert!(same_rotation(&q, &back, 1e-9), "{} != {}", q, back);
        }
    }

    #[test]
    fn test_matches_nalgebra() {
        let mut rng = fastrand::Rng::with_seed(17);
        for _ in 0..200 {
            let q = random_rotation(&mut rng);
            let expect = q.to_rotation_matrix();
            assert_relative_eq!(to_matrix(&q), *expect.matrix(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_every_branch() {
        // Half turns about each axis force each diagonal branch in turn.
        let cases = [
            UnitQuaternion::identity(),
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 2.0 * FRAC_PI_2),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 2.0 * FRAC_PI_2),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 2.0 * FRAC_PI_2),
        ];
        for q in &cases {
            let back = from_matrix(&to_matrix(q));
            assert!(same_rotation(q, &back, 1e-12));
        }
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let m = Rotation3::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
        let q = from_matrix(m.matrix());
        assert_relative_eq!(q.w, (0.5f64).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(q.k, (0.5f64).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(q.i, 0.0, epsilon = 1e-12);
        assert_relative_eq!(q.j, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_orthonormal_input_still_yields_rotation() {
        let m = Matrix3::new(2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0);
        let q = from_matrix(&m);
        assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-12);
        assert!(same_rotation(&q, &UnitQuaternion::identity(), 1e-12));
        let q = from_matrix(&Matrix3::zeros());
        assert!(same_rotation(&q, &UnitQuaternion::identity(), 1e-12));
    }

    #[test]
    fn test_components() {
        let q = try_from_components(2.0, 0.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(q.w, 1.0);
        let q = try_from_components(-1.0, 0.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(q.w, -1.0);
        assert_eq!(
            try_from_components(0.0, 0.0, 0.0, 0.0),
            Err(RotationError::DegenerateQuaternion)
        );
        assert_eq!(
            try_from_components(f64::NAN, 0.0, 0.0, 1.0),
            Err(RotationError::NonFinite)
        );
    }

    #[test]
    fn test_same_rotation_double_cover() {
        let q = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.3);
        let neg = UnitQuaternion::new_unchecked(-q.into_inner());
        assert!(same_rotation(&q, &neg, 1e-15));
        let other = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.31);
        assert!(!same_rotation(&q, &other, 1e-9));
    }
}
