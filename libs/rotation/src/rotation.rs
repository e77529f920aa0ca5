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
use crate::{quaternion, AngleAxis, AxisOrder, EulerAngles};
use nalgebra::{Matrix3, UnitQuaternion};
use std::fmt;

/// A rotation in 3-space, independent of how it was written down. Every
/// representation is derived from the one unit quaternion held here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    q: UnitQuaternion<f64>,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Rotation {
    pub fn identity() -> Self {
        Self {
            q: UnitQuaternion::identity(),
        }
    }

    pub fn from_quaternion(q: UnitQuaternion<f64>) -> Self {
        Self { q }
    }

    pub fn from_angle_axis(angle_axis: &AngleAxis) -> Self {
        Self::from_quaternion(angle_axis.to_quaternion())
    }

    pub fn from_matrix(m: &Matrix3<f64>) -> Self {
        Self::from_quaternion(quaternion::from_matrix(m))
    }

    pub fn from_euler_angles(euler: &EulerAngles) -> Self {
        Self::from_quaternion(euler.to_quaternion())
    }

    pub fn quaternion(&self) -> UnitQuaternion<f64> {
        self.q
    }

    pub fn angle_axis(&self) -> AngleAxis {
        AngleAxis::from_quaternion(&self.q)
    }

    pub fn matrix(&self) -> Matrix3<f64> {
        quaternion::to_matrix(&self.q)
    }

    pub fn euler_angles(&self, order: AxisOrder) -> EulerAngles {
        EulerAngles::from_matrix(&self.matrix(), order)
    }

    /// Equality up to `tolerance` per quaternion component, treating q and
    /// -q as the same rotation.
    pub fn approx_eq(&self, other: &Rotation, tolerance: f64) -> bool {
        quaternion::same_rotation(&self.q, &other.q, tolerance)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "q({:0.6}, {:0.6}, {:0.6}, {:0.6})",
            self.q.w, self.q.i, self.q.j, self.q.k
        )
    }
}
