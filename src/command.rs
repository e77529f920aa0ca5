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
use anyhow::{bail, ensure, Context, Result};
use converter::Representation;
use rotation::{AngleUnit, AxisOrder};
use std::str::FromStr;

/// A selector given either as a table index or by name. Indices are passed
/// through to the converter unchecked so that it can reject them itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection<T> {
    Index(usize),
    Named(T),
}

impl<T> FromStr for Selection<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(index) = s.parse::<usize>() {
            return Ok(Selection::Index(index));
        }
        Ok(Selection::Named(s.parse::<T>()?))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    AngleAxis { angle: f64, axis: [f64; 3] },
    Quaternion([f64; 4]),
    Matrix([f64; 9]),
    Euler([f64; 3]),
    Cell {
        repr: Representation,
        index: usize,
        value: f64,
    },
    InputOrder(Selection<AxisOrder>),
    OutputOrder(Selection<AxisOrder>),
    InputUnit(Selection<AngleUnit>),
    OutputUnit(Selection<AngleUnit>),
    Show,
    Orders,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands (angles are in the input unit):
  aa <angle> <x> <y> <z>        set the input angle-axis
  quat <w> <x> <y> <z>          set the input quaternion
  matrix <m00> <m01> ... <m22>  set the input rotation matrix, row-major
  euler <a> <b> <c>             set the input Euler angles
  cell <repr> <index> <value>   edit one input cell (repr: aa, quat, matrix, euler)
  input-order <sel>             input axis order, by index or name (e.g. 6, X-Y-Z, zyx)
  output-order <sel>            output axis order
  input-unit <sel>              input unit: 0/deg or 1/rad
  output-unit <sel>             output unit
  show                          print every table
  orders                        list the axis orders
  help                          this text
  quit                          exit";

fn floats<const N: usize>(verb: &str, args: &[&str]) -> Result<[f64; N]> {
    ensure!(
        args.len() == N,
        "{} takes {} values, got {}",
        verb,
        N,
        args.len()
    );
    let mut out = [0f64; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .with_context(|| format!("{}: not a number: {}", verb, arg))?;
    }
    Ok(out)
}

fn selection<T>(verb: &str, args: &[&str]) -> Result<Selection<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    ensure!(args.len() == 1, "{} takes one selector", verb);
    args[0]
        .parse()
        .with_context(|| format!("{}: bad selector", verb))
}

impl Command {
    /// Parse one line of input. Blank lines and `#` comments are `None`.
    pub fn parse_line(line: &str) -> Result<Option<Command>> {
        let line = match line.find('#') {
            Some(offset) => &line[..offset],
            None => line,
        };
        let mut words = line.split_whitespace();
        let verb = match words.next() {
            Some(verb) => verb.to_ascii_lowercase(),
            None => return Ok(None),
        };
        let args = words.collect::<Vec<_>>();
        let verb = verb.as_str();
        Ok(Some(match verb {
            "aa" | "angle-axis" => {
                let [angle, x, y, z] = floats::<4>(verb, &args)?;
                Command::AngleAxis {
                    angle,
                    axis: [x, y, z],
                }
            }
            "quat" | "quaternion" => Command::Quaternion(floats(verb, &args)?),
            "matrix" => Command::Matrix(floats(verb, &args)?),
            "euler" => Command::Euler(floats(verb, &args)?),
            "cell" => {
                ensure!(args.len() == 3, "cell takes <repr> <index> <value>");
                Command::Cell {
                    repr: args[0].parse()?,
                    index: args[1]
                        .parse()
                        .with_context(|| format!("cell: bad index: {}", args[1]))?,
                    value: args[2]
                        .parse()
                        .with_context(|| format!("cell: not a number: {}", args[2]))?,
                }
            }
            "input-order" => Command::InputOrder(selection(verb, &args)?),
            "output-order" => Command::OutputOrder(selection(verb, &args)?),
            "input-unit" => Command::InputUnit(selection(verb, &args)?),
            "output-unit" => Command::OutputUnit(selection(verb, &args)?),
            "show" | "orders" | "help" | "quit" | "exit" => {
                ensure!(args.is_empty(), "{} takes no arguments", verb);
                match verb {
                    "show" => Command::Show,
                    "orders" => Command::Orders,
                    "help" => Command::Help,
                    _ => Command::Quit,
                }
            }
            _ => bail!("unknown command: {} (try `help`)", verb),
        }))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_edits() -> Result<()> {
        assert_eq!(
            Command::parse_line("aa 90 0 0 1")?,
            Some(Command::AngleAxis {
                angle: 90.0,
                axis: [0.0, 0.0, 1.0]
            })
        );
        assert_eq!(
            Command::parse_line("  QUAT 1 0 0 0  # identity")?,
            Some(Command::Quaternion([1.0, 0.0, 0.0, 0.0]))
        );
        assert_eq!(
            Command::parse_line("matrix 1 0 0 0 1 0 0 0 1")?,
            Some(Command::Matrix([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]))
        );
        assert_eq!(
            Command::parse_line("cell euler 2 -45.5")?,
            Some(Command::Cell {
                repr: Representation::EulerAngles,
                index: 2,
                value: -45.5
            })
        );
        Ok(())
    }

    #[test]
    fn test_parse_selectors() -> Result<()> {
        assert_eq!(
            Command::parse_line("input-order 12")?,
            Some(Command::InputOrder(Selection::Index(12)))
        );
        assert_eq!(
            Command::parse_line("output-order z-y-x")?,
            Some(Command::OutputOrder(Selection::Named(AxisOrder::ZYX)))
        );
        assert_eq!(
            Command::parse_line("output-unit rad")?,
            Some(Command::OutputUnit(Selection::Named(AngleUnit::Radians)))
        );
        assert!(Command::parse_line("input-unit furlongs").is_err());
        Ok(())
    }

    #[test]
    fn test_parse_blank_and_comments() -> Result<()> {
        assert_eq!(Command::parse_line("")?, None);
        assert_eq!(Command::parse_line("   ")?, None);
        assert_eq!(Command::parse_line("# just a comment")?, None);
        assert_eq!(Command::parse_line("quit")?, Some(Command::Quit));
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse_line("aa 1 2 3").is_err());
        assert!(Command::parse_line("euler 1 two 3").is_err());
        assert!(Command::parse_line("cell wedge 0 1").is_err());
        assert!(Command::parse_line("show everything").is_err());
        assert!(Command::parse_line("rotate 90").is_err());
    }
}
