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
use crate::ConverterError;
use bitflags::bitflags;
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Representation {
    AngleAxis,
    Quaternion,
    RotationMatrix,
    EulerAngles,
}

impl Representation {
    pub const ALL: [Representation; 4] = [
        Representation::RotationMatrix,
        Representation::AngleAxis,
        Representation::Quaternion,
        Representation::EulerAngles,
    ];

    /// Number of editable numeric cells in the table for this representation.
    pub fn cell_count(self) -> usize {
        match self {
            Representation::AngleAxis => 4,
            Representation::Quaternion => 4,
            Representation::RotationMatrix => 9,
            Representation::EulerAngles => 3,
        }
    }

    /// Angle cells are shown and edited in the side's angle unit.
    pub fn is_angle_cell(self, index: usize) -> bool {
        match self {
            Representation::AngleAxis => index == 0,
            Representation::EulerAngles => index < 3,
            Representation::Quaternion | Representation::RotationMatrix => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Representation::AngleAxis => "Angle Axis",
            Representation::Quaternion => "Quaternion",
            Representation::RotationMatrix => "Rotation Matrix",
            Representation::EulerAngles => "Euler Angles",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Representation {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "aa" | "angle-axis" | "angleaxis" => Representation::AngleAxis,
            "q" | "quat" | "quaternion" => Representation::Quaternion,
            "m" | "matrix" | "rotation-matrix" => Representation::RotationMatrix,
            "e" | "euler" | "euler-angles" => Representation::EulerAngles,
            _ => return Err(ConverterError::UnknownRepresentation(s.to_owned())),
        })
    }
}

bitflags! {
    /// The representations of one side that a surface must re-read.
    pub struct Invalidation: u8 {
        const ANGLE_AXIS      = 0b0001;
        const QUATERNION      = 0b0010;
        const ROTATION_MATRIX = 0b0100;
        const EULER_ANGLES    = 0b1000;
    }
}

impl From<Representation> for Invalidation {
    fn from(repr: Representation) -> Self {
        match repr {
            Representation::AngleAxis => Invalidation::ANGLE_AXIS,
            Representation::Quaternion => Invalidation::QUATERNION,
            Representation::RotationMatrix => Invalidation::ROTATION_MATRIX,
            Representation::EulerAngles => Invalidation::EULER_ANGLES,
        }
    }
}

impl Invalidation {
    /// Every representation flagged here, in display order.
    pub fn representations(self) -> impl Iterator<Item = Representation> {
        Representation::ALL
            .into_iter()
            .filter(move |&repr| self.contains(repr.into()))
    }
}
