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
use crate::{ConverterError, Representation};
use absolute_unit::{Angle, Radians};
use log::trace;
use nalgebra::{Matrix3, UnitQuaternion, Vector3};
use rotation::{quaternion, AngleAxis, AngleUnit, AxisOrder, EulerAngles, Rotation, RotationError};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    Input,
    Output,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Input => write!(f, "Input"),
            Side::Output => write!(f, "Output"),
        }
    }
}

/// A whole-representation replacement for one side. Angles are radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edit {
    AngleAxis(AngleAxis),
    Quaternion(UnitQuaternion<f64>),
    RotationMatrix(Matrix3<f64>),
    EulerAngles([Angle<Radians>; 3]),
}

impl Edit {
    pub fn representation(&self) -> Representation {
        match self {
            Edit::AngleAxis(_) => Representation::AngleAxis,
            Edit::Quaternion(_) => Representation::Quaternion,
            Edit::RotationMatrix(_) => Representation::RotationMatrix,
            Edit::EulerAngles(_) => Representation::EulerAngles,
        }
    }
}

/// One rotation together with its four stored representations and the
/// settings that control the Euler decomposition and angle presentation.
///
/// All four representations denote `rotation()` at all times. The edited
/// representation is kept in normalized form: the axis of an angle-axis
/// edit is unit length, a quaternion edit is unit norm (its sign is kept),
/// a matrix edit is replaced by the nearest rotation we extract from it,
/// and Euler angles are kept as typed.
#[derive(Clone, Debug)]
pub struct RotationSide {
    rotation: Rotation,
    angle_axis: AngleAxis,
    quaternion: UnitQuaternion<f64>,
    matrix: Matrix3<f64>,
    euler_angles: EulerAngles,
    unit: AngleUnit,
}

impl Default for RotationSide {
    fn default() -> Self {
        Self::new(AxisOrder::default(), AngleUnit::default())
    }
}

impl RotationSide {
    pub fn new(order: AxisOrder, unit: AngleUnit) -> Self {
        let mut side = Self {
            rotation: Rotation::identity(),
            angle_axis: AngleAxis::identity(),
            quaternion: UnitQuaternion::identity(),
            matrix: Matrix3::identity(),
            euler_angles: EulerAngles::identity(order),
            unit,
        };
        side.assign(Rotation::identity());
        side
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn angle_axis(&self) -> &AngleAxis {
        &self.angle_axis
    }

    pub fn quaternion(&self) -> &UnitQuaternion<f64> {
        &self.quaternion
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn euler_angles(&self) -> &EulerAngles {
        &self.euler_angles
    }

    pub fn axis_order(&self) -> AxisOrder {
        self.euler_angles.order()
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// The numeric content of one table cell, with angles in this side's
    /// unit. Matrix cells are numbered row-major.
    pub fn cell(&self, repr: Representation, index: usize) -> Option<f64> {
        if index >= repr.cell_count() {
            return None;
        }
        Some(match repr {
            Representation::AngleAxis => match index {
                0 => self.unit.from_radians(self.angle_axis.angle()),
                i => self.angle_axis.axis()[i - 1],
            },
            Representation::Quaternion => match index {
                0 => self.quaternion.w,
                1 => self.quaternion.i,
                2 => self.quaternion.j,
                _ => self.quaternion.k,
            },
            Representation::RotationMatrix => self.matrix[(index / 3, index % 3)],
            Representation::EulerAngles => {
                self.unit.from_radians(self.euler_angles.angles()[index])
            }
        })
    }

    /// Build the edit that results from typing `value` into one cell.
    pub fn edit_for_cell(
        &self,
        repr: Representation,
        index: usize,
        value: f64,
    ) -> Result<Edit, ConverterError> {
        if index >= repr.cell_count() {
            return Err(ConverterError::CellOutOfRange {
                representation: repr,
                index,
            });
        }
        if !value.is_finite() {
            return Err(RotationError::NonFinite.into());
        }
        Ok(match repr {
            Representation::AngleAxis => {
                let mut angle = self.angle_axis.angle();
                let mut axis: Vector3<f64> = self.angle_axis.axis().into_inner();
                match index {
                    0 => angle = self.unit.to_radians(value),
                    i => axis[i - 1] = value,
                }
                Edit::AngleAxis(AngleAxis::new(angle, axis)?)
            }
            Representation::Quaternion => {
                let mut c = [
                    self.quaternion.w,
                    self.quaternion.i,
                    self.quaternion.j,
                    self.quaternion.k,
                ];
                c[index] = value;
                Edit::Quaternion(quaternion::try_from_components(c[0], c[1], c[2], c[3])?)
            }
            Representation::RotationMatrix => {
                let mut m = self.matrix;
                m[(index / 3, index % 3)] = value;
                Edit::RotationMatrix(m)
            }
            Representation::EulerAngles => {
                let mut angles = self.euler_angles.angles();
                angles[index] = self.unit.to_radians(value);
                Edit::EulerAngles(angles)
            }
        })
    }

    /// Replace one representation and recompute the other three from it.
    pub(crate) fn apply(&mut self, edit: Edit) -> Result<(), ConverterError> {
        match edit {
            Edit::AngleAxis(angle_axis) => {
                if !angle_axis.is_finite() {
                    return Err(RotationError::NonFinite.into());
                }
                self.assign(Rotation::from_angle_axis(&angle_axis));
                self.angle_axis = angle_axis;
            }
            Edit::Quaternion(q) => {
                if !q.coords.iter().all(|v| v.is_finite()) {
                    return Err(RotationError::NonFinite.into());
                }
                self.assign(Rotation::from_quaternion(q));
                self.quaternion = q;
            }
            Edit::RotationMatrix(m) => {
                if !m.iter().all(|v| v.is_finite()) {
                    return Err(RotationError::NonFinite.into());
                }
                self.assign(Rotation::from_matrix(&m));
            }
            Edit::EulerAngles(angles) => {
                let euler_angles = EulerAngles::new(angles, self.axis_order());
                if !euler_angles.is_finite() {
                    return Err(RotationError::NonFinite.into());
                }
                self.assign(Rotation::from_euler_angles(&euler_angles));
                self.euler_angles = euler_angles;
            }
        }
        Ok(())
    }

    /// Take on `rotation`, deriving all four representations from it.
    pub(crate) fn assign(&mut self, rotation: Rotation) {
        trace!("assign {}", rotation);
        self.rotation = rotation;
        self.quaternion = rotation.quaternion();
        self.angle_axis = rotation.angle_axis();
        self.matrix = rotation.matrix();
        self.euler_angles = rotation.euler_angles(self.axis_order());
    }

    /// Switch the Euler axis order, re-deriving the angles from the
    /// unchanged rotation.
    pub(crate) fn set_axis_order(&mut self, order: AxisOrder) {
        self.euler_angles = self.rotation.euler_angles(order);
    }

    pub(crate) fn set_unit(&mut self, unit: AngleUnit) {
        self.unit = unit;
    }
}
