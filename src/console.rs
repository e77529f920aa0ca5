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
use ansi::{Color, Escape};
use converter::{Invalidation, RotationSide, Side, Surface, Table};
use log::warn;
use std::io::{self, Write};

/// Prints each invalidated table to stdout as it changes.
pub struct ConsoleSurface {
    precision: usize,
    color: bool,
}

impl ConsoleSurface {
    pub fn new(precision: usize, color: bool) -> Self {
        Self { precision, color }
    }

    fn title_style(side: Side) -> Escape {
        match side {
            Side::Input => Escape::new().fg(Color::BrightCyan).bold(),
            Side::Output => Escape::new().fg(Color::BrightGreen).bold(),
        }
    }

    pub fn render(&self, side: Side, which: Invalidation, state: &RotationSide) -> String {
        let mut out = String::new();
        for repr in which.representations() {
            let table = Table::new(side, repr, state, self.precision).to_string();
            let mut lines = table.lines();
            if let Some(title) = lines.next() {
                if self.color {
                    out += &Self::title_style(side).paint(title);
                } else {
                    out += title;
                }
                out.push('\n');
            }
            for line in lines {
                out += line;
                out.push('\n');
            }
        }
        out
    }
}

impl Surface for ConsoleSurface {
    fn invalidate(&mut self, side: Side, which: Invalidation, state: &RotationSide) {
        let text = self.render(side, which, state);
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            warn!("failed to draw {} tables: {}", side, e);
        }
    }
}
