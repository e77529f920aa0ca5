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
use crate::RotationError;
use absolute_unit::{radians, Angle, Radians};
use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector3};
use std::fmt;

// Below this, the imaginary part of a quaternion carries no usable direction.
const DEGENERATE_AXIS_EPSILON: f64 = 1e-12;

/// A rotation by `angle` about a unit `axis`.
///
/// (θ, a), (-θ, -a) and (θ + 2π, a) all describe the same rotation; the
/// value is kept as entered rather than canonicalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleAxis {
    angle: Angle<Radians>,
    axis: Unit<Vector3<f64>>,
}

impl Default for AngleAxis {
    fn default() -> Self {
        Self::identity()
    }
}

impl AngleAxis {
    /// Normalizes `axis`; a zero-length axis has no direction to rotate
    /// about and is rejected.
    pub fn new(angle: Angle<Radians>, axis: Vector3<f64>) -> Result<Self, RotationError> {
        if !angle.is_finite() || !axis.iter().all(|v| v.is_finite()) {
            return Err(RotationError::NonFinite);
        }
        let axis = Unit::try_new(axis, 0.0).ok_or(RotationError::DegenerateAxis)?;
        Ok(Self { angle, axis })
    }

    pub fn from_unit_axis(angle: Angle<Radians>, axis: Unit<Vector3<f64>>) -> Self {
        Self { angle, axis }
    }

    pub fn identity() -> Self {
        Self {
            angle: radians!(0),
            axis: Vector3::z_axis(),
        }
    }

    pub fn angle(&self) -> Angle<Radians> {
        self.angle
    }

    pub fn axis(&self) -> &Unit<Vector3<f64>> {
        &self.axis
    }

    pub fn is_finite(&self) -> bool {
        self.angle.is_finite() && self.axis.iter().all(|v| v.is_finite())
    }

    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        let half = self.angle.radians() / 2.0;
        let v = self.axis.into_inner() * half.sin();
        UnitQuaternion::new_unchecked(Quaternion::new(half.cos(), v.x, v.y, v.z))
    }

    /// The angle is 2·acos(w), computed as 2·atan2(|v|, w) to keep precision
    /// near the identity, and lies in [0, 2π]. When |v| vanishes the axis is
    /// undetermined and defaults to +Z.
    pub fn from_quaternion(q: &UnitQuaternion<f64>) -> Self {
        let imag = q.imag();
        let sin_half = imag.norm();
        let angle = radians!(2.0 * sin_half.atan2(q.w));
        let axis = if sin_half > DEGENERATE_AXIS_EPSILON {
            Unit::new_normalize(imag)
        } else {
            Vector3::z_axis()
        };
        Self { angle, axis }
    }
}

impl fmt::Display for AngleAxis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} about [{:0.4}, {:0.4}, {:0.4}]",
            self.angle, self.axis.x, self.axis.y, self.axis.z
        )
    }
}
