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
use anyhow::{ensure, Result};
use log::debug;
use nalgebra::Vector3;
use rotation::{quaternion, AngleAxis, AngleUnit, AxisOrder, EulerAngles, Rotation};
use structopt::StructOpt;

/// Show one rotation in every representation and under every Euler axis order
#[derive(Debug, StructOpt)]
struct Opt {
    /// The rotation as ANGLE X Y Z
    #[structopt(long, number_of_values = 4, allow_hyphen_values = true)]
    angle_axis: Vec<f64>,

    /// The rotation as W X Y Z
    #[structopt(long, number_of_values = 4, allow_hyphen_values = true)]
    quaternion: Vec<f64>,

    /// The rotation as three Euler angles about --order
    #[structopt(long, number_of_values = 3, allow_hyphen_values = true)]
    euler: Vec<f64>,

    /// Axis order of --euler, by index (0-11) or name
    #[structopt(short, long, default_value = "X-Y-Z")]
    order: AxisOrder,

    /// Unit of angles, in and out
    #[structopt(short, long, default_value = "degrees")]
    unit: AngleUnit,

    /// Digits after the decimal point
    #[structopt(short, long, default_value = "6")]
    precision: usize,
}

fn input_rotation(opt: &Opt) -> Result<Rotation> {
    let given = [&opt.angle_axis, &opt.quaternion, &opt.euler]
        .iter()
        .filter(|v| !v.is_empty())
        .count();
    ensure!(
        given <= 1,
        "give at most one of --angle-axis, --quaternion and --euler"
    );
    if let [angle, x, y, z] = opt.angle_axis[..] {
        let aa = AngleAxis::new(opt.unit.to_radians(angle), Vector3::new(x, y, z))?;
        return Ok(Rotation::from_angle_axis(&aa));
    }
    if let [w, x, y, z] = opt.quaternion[..] {
        return Ok(Rotation::from_quaternion(quaternion::try_from_components(
            w, x, y, z,
        )?));
    }
    if let [a, b, c] = opt.euler[..] {
        let angles = [a, b, c].map(|v| opt.unit.to_radians(v));
        let euler = EulerAngles::new(angles, opt.order);
        ensure!(euler.is_finite(), "Euler angles must be finite");
        return Ok(Rotation::from_euler_angles(&euler));
    }
    Ok(Rotation::identity())
}

fn show_rotation(rotation: &Rotation, unit: AngleUnit, precision: usize) {
    let q = rotation.quaternion();
    let m = rotation.matrix();
    let aa = rotation.angle_axis();
    println!("{:>12}", "Quaternion");
    println!("{:>12}", "==========");
    println!(
        "{:>12}  {:.*} {:.*} {:.*} {:.*}",
        "w x y z", precision, q.w, precision, q.i, precision, q.j, precision, q.k
    );
    println!();
    println!("{:>12}", "Angle Axis");
    println!("{:>12}", "==========");
    println!("{:>12}: {}", "angle", unit.format(aa.angle(), precision));
    println!(
        "{:>12}: {:.*} {:.*} {:.*}",
        "axis", precision, aa.axis().x, precision, aa.axis().y, precision, aa.axis().z
    );
    println!();
    println!("{:>12}", "Matrix");
    println!("{:>12}", "======");
    for row in m.row_iter() {
        println!(
            "{:>12}  {:>w$.*} {:>w$.*} {:>w$.*}",
            "",
            precision,
            row[0],
            precision,
            row[1],
            precision,
            row[2],
            w = precision + 4
        );
    }
    println!();
}

fn show_decompositions(rotation: &Rotation, unit: AngleUnit, precision: usize) {
    let m = rotation.matrix();
    println!("{:>12}", "Euler Angles");
    println!("{:>12}", "============");
    for order in AxisOrder::all() {
        let euler = rotation.euler_angles(order);
        let residual = (euler.to_matrix() - m).amax();
        debug!("{}: {} residual {:e}", order, euler, residual);
        let [a, b, c] = euler.angles().map(|angle| unit.format(angle, precision));
        println!(
            "{:>3} {:>8}  {:>w$} {:>w$} {:>w$}  residual {:.1e}{}",
            order.index(),
            order,
            a,
            b,
            c,
            residual,
            if euler.is_gimbal_locked() {
                "  gimbal lock"
            } else {
                ""
            },
            w = precision + 9
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    let rotation = input_rotation(&opt)?;
    show_rotation(&rotation, opt.unit, opt.precision);
    show_decompositions(&rotation, opt.unit, opt.precision);
    Ok(())
}
