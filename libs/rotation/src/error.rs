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
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RotationError {
    #[error("rotation axis has zero length")]
    DegenerateAxis,

    #[error("quaternion has zero norm")]
    DegenerateQuaternion,

    #[error("rotation input contains a non-finite value")]
    NonFinite,

    #[error("axis order index {0} is out of range (expected 0..12)")]
    InvalidAxisOrder(usize),

    #[error("angle unit index {0} is out of range (0 = degrees, 1 = radians)")]
    InvalidAngleUnit(usize),

    #[error("unknown Euler axis order: {0:?}")]
    UnknownAxisOrder(String),

    #[error("unknown angle unit: {0:?}")]
    UnknownAngleUnit(String),
}
