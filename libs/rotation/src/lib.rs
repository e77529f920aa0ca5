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
mod angle_axis;
mod axis;
mod error;
mod euler;
pub mod quaternion;
mod rotation;
mod unit;

pub use crate::{
    angle_axis::AngleAxis,
    axis::{Axis, AxisOrder},
    error::RotationError,
    euler::EulerAngles,
    rotation::Rotation,
    unit::AngleUnit,
};

#[cfg(test)]
pub(crate) mod testing {
    use nalgebra::{Quaternion, UnitQuaternion};

    /// A rotation drawn uniformly-ish from the unit 4-ball, rejecting
    /// samples too close to the origin to normalize cleanly.
    pub(crate) fn random_rotation(rng: &mut fastrand::Rng) -> UnitQuaternion<f64> {
        loop {
            let c = || rng.f64() * 2.0 - 1.0;
            let q = Quaternion::new(c(), c(), c(), c());
            let n = q.norm();
            if n > 0.1 && n <= 1.0 {
                return UnitQuaternion::new_normalize(q);
            }
        }
    }
}
