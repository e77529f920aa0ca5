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
use crate::{quaternion, AngleAxis, AxisOrder};
use absolute_unit::{radians, Angle, Radians};
use log::trace;
use nalgebra::{Matrix3, UnitQuaternion};
use std::{f64::consts::PI, fmt};

// Cofactor of the middle angle below which the outer two angles are coupled.
const GIMBAL_LOCK_EPSILON: f64 = 1e-12;

// atan2 yields -π for a negative zero numerator; outer angles live in (-π, π].
fn half_open(angle: f64) -> f64 {
    if angle <= -PI {
        PI
    } else {
        angle
    }
}

/// Three angles about the axes of `order`, composed as
/// `R = R[a0](θ0) · R[a1](θ1) · R[a2](θ2)`: rotate about a0, then about the
/// carried a1, then about the carried a2.
///
/// Decomposition ranges: asymmetric orders give θ1 in [-π/2, π/2],
/// symmetric orders give θ1 in [0, π]; θ0 and θ2 are in (-π, π]. At gimbal
/// lock θ2 is 0 and θ0 carries the coupled rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerAngles {
    angles: [Angle<Radians>; 3],
    order: AxisOrder,
}

impl EulerAngles {
    pub fn new(angles: [Angle<Radians>; 3], order: AxisOrder) -> Self {
        Self { angles, order }
    }

    pub fn identity(order: AxisOrder) -> Self {
        Self::new([radians!(0); 3], order)
    }

    pub fn angles(&self) -> [Angle<Radians>; 3] {
        self.angles
    }

    pub fn order(&self) -> AxisOrder {
        self.order
    }

    pub fn is_finite(&self) -> bool {
        self.angles.iter().all(|a| a.is_finite())
    }

    /// True when the middle angle sits where the outer two angles couple.
    pub fn is_gimbal_locked(&self) -> bool {
        let middle = self.angles[1];
        let cofactor = if self.order.is_symmetric() {
            middle.sin()
        } else {
            middle.cos()
        };
        cofactor.abs() < GIMBAL_LOCK_EPSILON
    }

    pub fn from_quaternion(q: &UnitQuaternion<f64>, order: AxisOrder) -> Self {
        Self::from_matrix(&quaternion::to_matrix(q), order)
    }

    pub fn from_matrix(m: &Matrix3<f64>, order: AxisOrder) -> Self {
        let [a0, a1, _] = order.axes();
        let (i, j) = (a0.index(), a1.index());
        // The axis not named by the first two; for asymmetric orders this is a2.
        let k = 3 - i - j;
        // +1 for cyclic (X->Y->Z) sequences, -1 for the others.
        let s = if j == (i + 1) % 3 { 1.0 } else { -1.0 };

        let (first, middle, cofactor) = if order.is_symmetric() {
            let sin_middle = m[(i, j)].hypot(m[(i, k)]);
            let middle = sin_middle.atan2(m[(i, i)]);
            let first = half_open(m[(j, i)].atan2(-s * m[(k, i)]));
            (first, middle, sin_middle)
        } else {
            let cos_middle = m[(i, i)].hypot(m[(i, j)]);
            let middle = (s * m[(i, k)]).atan2(cos_middle);
            let first = half_open((-s * m[(j, k)]).atan2(m[(k, k)]));
            (first, middle, cos_middle)
        };

        if cofactor < GIMBAL_LOCK_EPSILON {
            // R[a0](θ0) carries the a1 axis to column j of m regardless of θ1.
            trace!("gimbal lock decomposing {}; third angle pinned to 0", order);
            let first = half_open((s * m[(k, j)]).atan2(m[(j, j)]));
            return Self::new([radians!(first), radians!(middle), radians!(0)], order);
        }

        // Take the third angle from R[a0](-θ0) · m, whose row j only depends
        // on it. This keeps the result consistent with whatever θ0 we found.
        let (sin_first, cos_first) = first.sin_cos();
        let row = |c: usize| cos_first * m[(j, c)] + s * sin_first * m[(k, c)];
        let third = half_open(if order.is_symmetric() {
            (-s * row(k)).atan2(row(j))
        } else {
            (s * row(i)).atan2(row(j))
        });
        Self::new(
            [radians!(first), radians!(middle), radians!(third)],
            order,
        )
    }

    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        let axes = self.order.axes();
        let mut q = UnitQuaternion::identity();
        for (angle, axis) in self.angles.iter().zip(axes.iter()) {
            q *= AngleAxis::from_unit_axis(*angle, axis.unit_vector()).to_quaternion();
        }
        q
    }

    pub fn to_matrix(&self) -> Matrix3<f64> {
        quaternion::to_matrix(&self.to_quaternion())
    }
}

impl fmt::Display for EulerAngles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{}, {}, {}]",
            self.order, self.angles[0], self.angles[1], self.angles[2]
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{quaternion::same_rotation, testing::random_rotation, Axis};
    use absolute_unit::degrees;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::{Rotation3, Vector3};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn deg(a: Angle<Radians>) -> f64 {
        degrees!(a).f64()
    }

    fn euler(order: AxisOrder, d: [f64; 3]) -> EulerAngles {
        EulerAngles::new(
            [
                radians!(degrees!(d[0])),
                radians!(degrees!(d[1])),
                radians!(degrees!(d[2])),
            ],
            order,
        )
    }

    #[test]
    fn test_round_trip_all_orders() {
        let mut rng = fastrand::Rng::with_seed(0xE01E5);
        for order in AxisOrder::all() {
            for _ in 0..500 {
                let m = quaternion::to_matrix(&random_rotation(&mut rng));
                let e = EulerAngles::from_matrix(&m, order);
                assert_relative_eq!(e.to_matrix(), m, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_ranges() {
        let mut rng = fastrand::Rng::with_seed(4);
        for order in AxisOrder::all() {
            for _ in 0..200 {
                let e = EulerAngles::from_quaternion(&random_rotation(&mut rng), order);
                let [a, b, c] = e.angles();
                assert!(a.f64() > -PI && a.f64() <= PI, "{}", e);
                assert!(c.f64() > -PI && c.f64() <= PI, "{}", e);
                if order.is_symmetric() {
                    assert!(b.f64() >= 0.0 && b.f64() <= PI, "{}", e);
                } else {
                    assert!(b.f64().abs() <= FRAC_PI_2, "{}", e);
                }
            }
        }
    }

    #[test]
    fn test_half_turns_stay_in_range() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for angle in [PI, -PI] {
                let q = UnitQuaternion::from_axis_angle(&axis.unit_vector(), angle);
                for order in AxisOrder::all() {
                    let e = EulerAngles::from_quaternion(&q, order);
                    let [a, _, c] = e.angles();
                    assert!(a.f64() > -PI && a.f64() <= PI, "{} {}", axis.letter(), e);
                    assert!(c.f64() > -PI && c.f64() <= PI, "{} {}", axis.letter(), e);
                    assert!(same_rotation(&e.to_quaternion(), &q, 1e-9), "{}", e);
                }
            }
        }
    }

    #[test]
    fn test_single_axis_angles_survive() {
        for order in AxisOrder::all().filter(|o| !o.is_symmetric()) {
            let e = euler(order, [10.0, 20.0, 30.0]);
            let back = EulerAngles::from_matrix(&e.to_matrix(), order);
            for (x, y) in e.angles().iter().zip(back.angles().iter()) {
                assert_relative_eq!(deg(*x), deg(*y), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_composition_is_intrinsic_product() {
        let e = euler(AxisOrder::XYZ, [30.0, -40.0, 50.0]);
        let [a, b, c] = e.angles();
        let expect = Rotation3::from_axis_angle(&Vector3::x_axis(), a.f64())
            * Rotation3::from_axis_angle(&Vector3::y_axis(), b.f64())
            * Rotation3::from_axis_angle(&Vector3::z_axis(), c.f64());
        assert_relative_eq!(e.to_matrix(), *expect.matrix(), epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_turn_about_z_in_xyz() {
        let q = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
        let e = EulerAngles::from_quaternion(&q, AxisOrder::XYZ);
        let [a, b, c] = e.angles();
        assert_abs_diff_eq!(deg(a), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(deg(b), 0.0, epsilon = 1e-9);
        assert_relative_eq!(deg(c), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_asymmetric_gimbal_lock() {
        for order in AxisOrder::all().filter(|o| !o.is_symmetric()) {
            for &pitch in &[90.0, -90.0] {
                let input = euler(order, [30.0, pitch, 20.0]);
                let e = EulerAngles::from_matrix(&input.to_matrix(), order);
                assert!(e.is_gimbal_locked(), "{}", e);
                assert_eq!(e.angles()[2].f64(), 0.0);
                assert_relative_eq!(deg(e.angles()[1]), pitch, epsilon = 1e-9);
                // Only the sum or difference of the outer angles is determined.
                let first = deg(e.angles()[0]);
                assert!(
                    (first - 50.0).abs() < 1e-9 || (first - 10.0).abs() < 1e-9,
                    "{}: {}",
                    order,
                    first
                );
                assert!(same_rotation(
                    &e.to_quaternion(),
                    &input.to_quaternion(),
                    1e-9
                ));
            }
        }
    }

    #[test]
    fn test_symmetric_gimbal_lock() {
        for order in AxisOrder::all().filter(|o| o.is_symmetric()) {
            for &middle in &[0.0, 180.0] {
                let input = euler(order, [30.0, middle, 20.0]);
                let e = EulerAngles::from_matrix(&input.to_matrix(), order);
                assert!(e.is_gimbal_locked(), "{}", e);
                assert_eq!(e.angles()[2].f64(), 0.0);
                assert!(same_rotation(
                    &e.to_quaternion(),
                    &input.to_quaternion(),
                    1e-9
                ));
            }
        }
    }

    #[test]
    fn test_pure_pitch_in_xyz() {
        let m = Rotation3::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2);
        let e = EulerAngles::from_matrix(m.matrix(), AxisOrder::XYZ);
        let [a, b, c] = e.angles();
        assert_abs_diff_eq!(a.f64(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(b.f64(), FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(c.f64(), 0.0);
    }

    #[test]
    fn test_identity() {
        for order in AxisOrder::all() {
            let e = EulerAngles::from_matrix(&Matrix3::identity(), order);
            assert!(same_rotation(
                &e.to_quaternion(),
                &UnitQuaternion::identity(),
                1e-12
            ));
            assert_eq!(
                EulerAngles::identity(order).to_matrix(),
                Matrix3::identity()
            );
        }
        assert_eq!(AxisOrder::XYZ.axes(), [Axis::X, Axis::Y, Axis::Z]);
    }
}
