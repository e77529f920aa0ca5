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
use absolute_unit::{degrees, radians, Angle, Radians};
use std::{fmt, str::FromStr};

/// Presentation unit for the angles of one side of the converter. Stored
/// angles are always radians; this only changes how they are read and shown.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn from_index(index: usize) -> Result<Self, RotationError> {
        match index {
            0 => Ok(AngleUnit::Degrees),
            1 => Ok(AngleUnit::Radians),
            _ => Err(RotationError::InvalidAngleUnit(index)),
        }
    }

    pub fn index(self) -> usize {
        match self {
            AngleUnit::Degrees => 0,
            AngleUnit::Radians => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "Degrees",
            AngleUnit::Radians => "Radians",
        }
    }

    /// Interpret a value typed in this unit.
    pub fn to_radians(self, value: f64) -> Angle<Radians> {
        match self {
            AngleUnit::Degrees => radians!(degrees!(value)),
            AngleUnit::Radians => radians!(value),
        }
    }

    /// Express a stored angle in this unit.
    pub fn from_radians(self, angle: Angle<Radians>) -> f64 {
        match self {
            AngleUnit::Degrees => degrees!(angle).f64(),
            AngleUnit::Radians => angle.f64(),
        }
    }

    pub fn format(self, angle: Angle<Radians>, precision: usize) -> String {
        match self {
            AngleUnit::Degrees => format!("{:.*}", precision, degrees!(angle)),
            AngleUnit::Radians => format!("{:.*}", precision, angle),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AngleUnit {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            _ => Err(RotationError::UnknownAngleUnit(s.to_owned())),
        }
    }
}
