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
use crate::{Representation, RotationSide, Side};
use std::fmt;

const MIN_COLUMN_WIDTH: usize = 8;

/// A plain-text rendering of one representation's table on one side.
pub struct Table<'a> {
    side: Side,
    repr: Representation,
    state: &'a RotationSide,
    precision: usize,
}

impl<'a> Table<'a> {
    pub fn new(
        side: Side,
        repr: Representation,
        state: &'a RotationSide,
        precision: usize,
    ) -> Self {
        Self {
            side,
            repr,
            state,
            precision,
        }
    }

    pub fn title(&self) -> String {
        format!("{} ({})", self.repr, self.side)
    }

    fn headers(&self) -> Vec<String> {
        match self.repr {
            Representation::AngleAxis => ["Angle", "X", "Y", "Z"].map(String::from).to_vec(),
            Representation::Quaternion => ["W", "X", "Y", "Z"].map(String::from).to_vec(),
            Representation::RotationMatrix => Vec::new(),
            Representation::EulerAngles => self
                .state
                .axis_order()
                .axes()
                .iter()
                .map(|axis| axis.letter().to_string())
                .collect(),
        }
    }

    /// The text of every cell, in cell order.
    pub fn cells(&self) -> Vec<String> {
        (0..self.repr.cell_count())
            .filter_map(|index| {
                let value = clean(self.state.cell(self.repr, index)?, self.precision);
                Some(if self.repr.is_angle_cell(index) {
                    let unit = self.state.unit();
                    unit.format(unit.to_radians(value), self.precision)
                } else {
                    format!("{:.*}", self.precision, value)
                })
            })
            .collect()
    }
}

// Values that round to zero print as zero, never "-0.0000".
fn clean(value: f64, precision: usize) -> f64 {
    if value.abs() < 0.5 * 10f64.powi(-(precision as i32)) {
        0.0
    } else {
        value
    }
}

impl<'a> fmt::Display for Table<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let headers = self.headers();
        let cells = self.cells();
        let width = cells
            .iter()
            .chain(headers.iter())
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_COLUMN_WIDTH)
            + 2;
        writeln!(f, "{}", self.title())?;
        if !headers.is_empty() {
            for header in &headers {
                write!(f, "{:>width$}", header, width = width)?;
            }
            writeln!(f)?;
        }
        let columns = if self.repr == Representation::RotationMatrix {
            3
        } else {
            cells.len()
        };
        for row in cells.chunks(columns.max(1)) {
            for cell in row {
                write!(f, "{:>width$}", cell, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
