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
use nalgebra::{Unit, Vector3};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn unit_vector(self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            'Z' => Some(Axis::Z),
            _ => None,
        }
    }
}

use Axis::{X, Y, Z};

// Selector order: the six symmetric orders first, then the six asymmetric ones.
const EULER_AXES: [[Axis; 3]; AxisOrder::COUNT] = [
    [X, Y, X],
    [X, Z, X],
    [Y, X, Y],
    [Y, Z, Y],
    [Z, X, Z],
    [Z, Y, Z],
    [X, Y, Z],
    [X, Z, Y],
    [Y, X, Z],
    [Y, Z, X],
    [Z, X, Y],
    [Z, Y, X],
];

/// One of the twelve valid Euler axis sequences, identified by its
/// position in the selector table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AxisOrder(usize);

impl AxisOrder {
    pub const COUNT: usize = 12;
    pub const XYZ: AxisOrder = AxisOrder(6);
    pub const ZYX: AxisOrder = AxisOrder(11);
    pub const ZXZ: AxisOrder = AxisOrder(4);

    pub fn from_index(index: usize) -> Result<Self, RotationError> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(RotationError::InvalidAxisOrder(index))
        }
    }

    pub fn from_axes(axes: [Axis; 3]) -> Option<Self> {
        EULER_AXES.iter().position(|&row| row == axes).map(Self)
    }

    pub fn all() -> impl Iterator<Item = AxisOrder> {
        (0..Self::COUNT).map(Self)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn axes(self) -> [Axis; 3] {
        EULER_AXES[self.0]
    }

    /// Symmetric orders repeat their first axis last (e.g. Z-X-Z).
    pub fn is_symmetric(self) -> bool {
        let axes = self.axes();
        axes[0] == axes[2]
    }
}

impl Default for AxisOrder {
    fn default() -> Self {
        Self::XYZ
    }
}

impl fmt::Display for AxisOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c] = self.axes();
        write!(f, "{}-{}-{}", a.letter(), b.letter(), c.letter())
    }
}

impl FromStr for AxisOrder {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }
        let axes = s
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .map(Axis::from_letter)
            .collect::<Option<Vec<Axis>>>();
        match axes.as_deref() {
            Some(&[a, b, c]) => Self::from_axes([a, b, c])
                .ok_or_else(|| RotationError::UnknownAxisOrder(s.to_owned())),
            _ => Err(RotationError::UnknownAxisOrder(s.to_owned())),
        }
    }
}
