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
use crate::impl_unit_for_numerics;
use std::{
    fmt,
    marker::PhantomData,
    ops::{Add, Mul, Neg, Sub},
};

pub trait AngleUnit: Copy {
    fn suffix() -> &'static str;
    fn radians_in_unit() -> f64;
}

/// An angle, stored in radians and presented in `Unit`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle<Unit: AngleUnit> {
    rad: f64,
    phantom: PhantomData<Unit>,
}

impl<Unit: AngleUnit> Angle<Unit> {
    pub fn zero() -> Self {
        Self {
            rad: 0f64,
            phantom: PhantomData,
        }
    }

    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    /// The raw value in radians, independent of `Unit`.
    pub fn radians(self) -> f64 {
        self.rad
    }

    pub fn f64(self) -> f64 {
        f64::from(self)
    }
}

impl<Unit> Default for Angle<Unit>
where
    Unit: AngleUnit,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<Unit> fmt::Display for Angle<Unit>
where
    Unit: AngleUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v = self.rad / Unit::radians_in_unit();
        let precision = f.precision().unwrap_or(4);
        write!(f, "{:0.*}{}", precision, v, Unit::suffix())
    }
}

impl<'a, UnitA, UnitB> From<&'a Angle<UnitA>> for Angle<UnitB>
where
    UnitA: AngleUnit,
    UnitB: AngleUnit,
{
    fn from(v: &'a Angle<UnitA>) -> Self {
        Self {
            rad: v.rad,
            phantom: PhantomData,
        }
    }
}

impl<UnitA, UnitB> Add<Angle<UnitA>> for Angle<UnitB>
where
    UnitA: AngleUnit,
    UnitB: AngleUnit,
{
    type Output = Angle<UnitB>;

    fn add(self, other: Angle<UnitA>) -> Self {
        Self {
            rad: self.rad + other.rad,
            phantom: PhantomData,
        }
    }
}

impl<UnitA, UnitB> Sub<Angle<UnitA>> for Angle<UnitB>
where
    UnitA: AngleUnit,
    UnitB: AngleUnit,
{
    type Output = Angle<UnitB>;

    fn sub(self, other: Angle<UnitA>) -> Self {
        Self {
            rad: self.rad - other.rad,
            phantom: PhantomData,
        }
    }
}

impl<Unit> Neg for Angle<Unit>
where
    Unit: AngleUnit,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            rad: -self.rad,
            phantom: PhantomData,
        }
    }
}

macro_rules! impl_angle_unit_for_numeric_type {
    ($Num:ty) => {
        impl<Unit> From<$Num> for Angle<Unit>
        where
            Unit: AngleUnit,
        {
            fn from(v: $Num) -> Self {
                Self {
                    rad: v as f64 * Unit::radians_in_unit(),
                    phantom: PhantomData,
                }
            }
        }

        impl<Unit> From<&$Num> for Angle<Unit>
        where
            Unit: AngleUnit,
        {
            fn from(v: &$Num) -> Self {
                Self {
                    rad: *v as f64 * Unit::radians_in_unit(),
                    phantom: PhantomData,
                }
            }
        }

        impl<Unit> From<Angle<Unit>> for $Num
        where
            Unit: AngleUnit,
        {
            fn from(v: Angle<Unit>) -> $Num {
                (v.rad / Unit::radians_in_unit()) as $Num
            }
        }

        impl<Unit> Mul<$Num> for Angle<Unit>
        where
            Unit: AngleUnit,
        {
            type Output = Self;

            fn mul(self, rhs: $Num) -> Self {
                Self {
                    rad: self.rad * rhs as f64,
                    phantom: PhantomData,
                }
            }
        }
    };
}
impl_unit_for_numerics!(impl_angle_unit_for_numeric_type);
