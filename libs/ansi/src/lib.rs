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
use bitflags::bitflags;
use std::fmt;

pub const RESET: &str = "\x1B[0m";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
    BrightBlack = 90,
    BrightRed = 91,
    BrightGreen = 92,
    BrightYellow = 93,
    BrightBlue = 94,
    BrightMagenta = 95,
    BrightCyan = 96,
    BrightWhite = 97,
}

impl Color {
    fn fg_code(self) -> u8 {
        self as u8
    }

    fn bg_code(self) -> u8 {
        self as u8 + 10
    }
}

bitflags! {
    struct StyleFlags: u8 {
        const BOLD      = 0b00001;
        const DIMMED    = 0b00010;
        const ITALIC    = 0b00100;
        const UNDERLINE = 0b01000;
        const REVERSE   = 0b10000;
    }
}

impl StyleFlags {
    fn codes(self) -> impl Iterator<Item = u8> {
        [
            (StyleFlags::BOLD, 1),
            (StyleFlags::DIMMED, 2),
            (StyleFlags::ITALIC, 3),
            (StyleFlags::UNDERLINE, 4),
            (StyleFlags::REVERSE, 7),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, code)| code)
    }
}

/// An SGR escape sequence, built up from colors and styles.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Escape {
    foreground: Option<Color>,
    background: Option<Color>,
    styles: StyleFlags,
}

impl Default for Escape {
    fn default() -> Self {
        Self::new()
    }
}

impl Escape {
    pub fn new() -> Self {
        Escape {
            foreground: None,
            background: None,
            styles: StyleFlags::empty(),
        }
    }

    pub fn fg(mut self, clr: Color) -> Self {
        self.foreground = Some(clr);
        self
    }

    pub fn bg(mut self, clr: Color) -> Self {
        self.background = Some(clr);
        self
    }

    pub fn bold(mut self) -> Self {
        self.styles |= StyleFlags::BOLD;
        self
    }

    pub fn dimmed(mut self) -> Self {
        self.styles |= StyleFlags::DIMMED;
        self
    }

    pub fn italic(mut self) -> Self {
        self.styles |= StyleFlags::ITALIC;
        self
    }

    pub fn underline(mut self) -> Self {
        self.styles |= StyleFlags::UNDERLINE;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.styles |= StyleFlags::REVERSE;
        self
    }

    /// Wrap `text` in this escape and a trailing reset.
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}{}", self, text, RESET)
    }
}

impl fmt::Display for Escape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let codes = self
            .styles
            .codes()
            .chain(self.foreground.map(Color::fg_code))
            .chain(self.background.map(Color::bg_code))
            .map(|code| code.to_string())
            .collect::<Vec<_>>();
        if codes.is_empty() {
            return write!(f, "{}", RESET);
        }
        write!(f, "\x1B[{}m", codes.join(";"))
    }
}
