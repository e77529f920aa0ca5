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
mod command;
mod console;

use crate::{
    command::{Command, Selection, HELP},
    console::ConsoleSurface,
};
use absolute_unit::{Angle, Radians};
use anyhow::{Context, Result};
use converter::RotationConverter;
use log::{info, warn};
use nalgebra::{Matrix3, Vector3};
use rotation::{quaternion, AngleAxis, AngleUnit, AxisOrder};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};
use structopt::StructOpt;

/// Convert rotations between angle-axis, quaternion, rotation matrix and
/// Euler angle form.
#[derive(Debug, StructOpt)]
struct Opt {
    /// Euler axis order of the input, by index (0-11) or name (e.g. X-Y-Z)
    #[structopt(long, default_value = "X-Y-Z")]
    input_order: AxisOrder,

    /// Euler axis order of the output
    #[structopt(long, default_value = "X-Y-Z")]
    output_order: AxisOrder,

    /// Angle unit of the input: degrees or radians
    #[structopt(long, default_value = "degrees")]
    input_unit: AngleUnit,

    /// Angle unit of the output
    #[structopt(long, default_value = "degrees")]
    output_unit: AngleUnit,

    /// Digits after the decimal point
    #[structopt(short, long, default_value = "4")]
    precision: usize,

    /// Do not color table titles
    #[structopt(long)]
    no_color: bool,

    /// Run a command after startup
    #[structopt(short, long)]
    run_command: Vec<String>,

    /// Run given file after startup
    #[structopt(short = "x", long)]
    execute: Option<PathBuf>,

    /// Exit after running startup commands instead of reading stdin
    #[structopt(short, long)]
    batch: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

struct Session {
    converter: RotationConverter,
}

impl Session {
    fn new(opt: &Opt) -> Self {
        let mut converter = RotationConverter::new(
            opt.input_order,
            opt.input_unit,
            opt.output_order,
            opt.output_unit,
        );
        converter.subscribe(Box::new(ConsoleSurface::new(
            opt.precision,
            !opt.no_color,
        )));
        Self { converter }
    }

    fn to_radians(&self, value: f64) -> Angle<Radians> {
        self.converter.input().unit().to_radians(value)
    }

    /// Run one line, reporting rather than propagating command errors.
    fn run_line(&mut self, line: &str) -> Flow {
        match Command::parse_line(line).and_then(|cmd| match cmd {
            Some(cmd) => self.run(cmd),
            None => Ok(Flow::Continue),
        }) {
            Ok(flow) => flow,
            Err(e) => {
                warn!("command failed: {}: {:#}", line.trim(), e);
                eprintln!("error: {:#}", e);
                Flow::Continue
            }
        }
    }

    fn run(&mut self, cmd: Command) -> Result<Flow> {
        match cmd {
            Command::AngleAxis { angle, axis } => {
                let angle_axis = AngleAxis::new(self.to_radians(angle), Vector3::from(axis))?;
                self.converter.set_angle_axis(angle_axis)?;
            }
            Command::Quaternion([w, x, y, z]) => {
                self.converter
                    .set_quaternion(quaternion::try_from_components(w, x, y, z)?)?;
            }
            Command::Matrix(m) => {
                self.converter
                    .set_rotation_matrix(Matrix3::from_row_slice(&m))?;
            }
            Command::Euler(angles) => {
                let angles = angles.map(|a| self.to_radians(a));
                self.converter.set_euler_angles(angles)?;
            }
            Command::Cell { repr, index, value } => {
                self.converter.edit_cell(repr, index, value)?;
            }
            Command::InputOrder(Selection::Index(i)) => {
                self.converter.select_input_axis_order(i)?;
            }
            Command::InputOrder(Selection::Named(order)) => {
                self.converter.set_input_axis_order(order);
            }
            Command::OutputOrder(Selection::Index(i)) => {
                self.converter.select_output_axis_order(i)?;
            }
            Command::OutputOrder(Selection::Named(order)) => {
                self.converter.set_output_axis_order(order);
            }
            Command::InputUnit(Selection::Index(i)) => {
                self.converter.select_input_unit(i)?;
            }
            Command::InputUnit(Selection::Named(unit)) => {
                self.converter.set_input_unit(unit);
            }
            Command::OutputUnit(Selection::Index(i)) => {
                self.converter.select_output_unit(i)?;
            }
            Command::OutputUnit(Selection::Named(unit)) => {
                self.converter.set_output_unit(unit);
            }
            Command::Show => self.converter.refresh_all(),
            Command::Orders => {
                for order in AxisOrder::all() {
                    let kind = if order.is_symmetric() {
                        "symmetric"
                    } else {
                        "asymmetric"
                    };
                    println!("{:>3}  {}  {}", order.index(), order, kind);
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    let mut session = Session::new(&opt);
    session.converter.refresh_all();

    for command in &opt.run_command {
        if session.run_line(command) == Flow::Quit {
            return Ok(());
        }
    }

    if let Some(path) = &opt.execute {
        let script = fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        info!("running {} lines from {}", script.lines().count(), path.display());
        for line in script.lines() {
            if session.run_line(line) == Flow::Quit {
                return Ok(());
            }
        }
    }

    if opt.batch {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if session.run_line(&line) == Flow::Quit {
            break;
        }
    }
    Ok(())
}
