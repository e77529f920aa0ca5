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
use crate::{ConverterError, Edit, Invalidation, Representation, RotationSide, Side, Surface};
use absolute_unit::{Angle, Radians};
use log::{debug, warn};
use nalgebra::{Matrix3, UnitQuaternion};
use rotation::{AngleAxis, AngleUnit, AxisOrder};

/// Owns an input and an output rotation and keeps every representation of
/// both consistent as the input is edited.
///
/// Each public mutator is one edit cycle: it runs to completion, updates
/// all affected state, then tells every subscribed surface what to redraw.
/// A mutator that returns an error has changed nothing and notified no one.
pub struct RotationConverter {
    input: RotationSide,
    output: RotationSide,
    surfaces: Vec<Box<dyn Surface>>,
    revision: u64,
}

impl Default for RotationConverter {
    fn default() -> Self {
        Self::new(
            AxisOrder::default(),
            AngleUnit::default(),
            AxisOrder::default(),
            AngleUnit::default(),
        )
    }
}

impl RotationConverter {
    pub fn new(
        input_order: AxisOrder,
        input_unit: AngleUnit,
        output_order: AxisOrder,
        output_unit: AngleUnit,
    ) -> Self {
        Self {
            input: RotationSide::new(input_order, input_unit),
            output: RotationSide::new(output_order, output_unit),
            surfaces: Vec::new(),
            revision: 0,
        }
    }

    pub fn subscribe(&mut self, surface: Box<dyn Surface>) {
        self.surfaces.push(surface);
    }

    pub fn input(&self) -> &RotationSide {
        &self.input
    }

    pub fn output(&self) -> &RotationSide {
        &self.output
    }

    pub fn side(&self, side: Side) -> &RotationSide {
        match side {
            Side::Input => &self.input,
            Side::Output => &self.output,
        }
    }

    /// The number of edit cycles that have completed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Ask every surface to draw everything, e.g. after subscribing.
    pub fn refresh_all(&mut self) {
        self.notify(Side::Input, Invalidation::all());
        self.notify(Side::Output, Invalidation::all());
    }

    pub fn apply(&mut self, edit: Edit) -> Result<(), ConverterError> {
        let repr = edit.representation();
        self.input.apply(edit)?;
        debug!("input {} edited: {}", repr, self.input.rotation());
        self.revision += 1;
        self.notify(Side::Input, Invalidation::all());
        self.propagate();
        Ok(())
    }

    pub fn set_angle_axis(&mut self, angle_axis: AngleAxis) -> Result<(), ConverterError> {
        self.apply(Edit::AngleAxis(angle_axis))
    }

    pub fn set_quaternion(&mut self, q: UnitQuaternion<f64>) -> Result<(), ConverterError> {
        self.apply(Edit::Quaternion(q))
    }

    pub fn set_rotation_matrix(&mut self, m: Matrix3<f64>) -> Result<(), ConverterError> {
        self.apply(Edit::RotationMatrix(m))
    }

    /// Angles about the input side's current axis order.
    pub fn set_euler_angles(&mut self, angles: [Angle<Radians>; 3]) -> Result<(), ConverterError> {
        self.apply(Edit::EulerAngles(angles))
    }

    /// Type `value` into one input cell; angle cells are in the input unit.
    pub fn edit_cell(
        &mut self,
        repr: Representation,
        index: usize,
        value: f64,
    ) -> Result<(), ConverterError> {
        let edit = self.input.edit_for_cell(repr, index, value)?;
        self.apply(edit)
    }

    pub fn set_input_axis_order(&mut self, order: AxisOrder) {
        debug!("input axis order -> {}", order);
        self.input.set_axis_order(order);
        self.revision += 1;
        self.notify(Side::Input, Invalidation::EULER_ANGLES);
        self.propagate();
    }

    pub fn set_input_unit(&mut self, unit: AngleUnit) {
        debug!("input unit -> {}", unit);
        self.input.set_unit(unit);
        self.revision += 1;
        self.notify(
            Side::Input,
            Invalidation::ANGLE_AXIS | Invalidation::EULER_ANGLES,
        );
        self.propagate();
    }

    /// Only the output's Euler decomposition depends on its axis order.
    pub fn set_output_axis_order(&mut self, order: AxisOrder) {
        debug!("output axis order -> {}", order);
        self.output.set_axis_order(order);
        self.revision += 1;
        self.notify(Side::Output, Invalidation::EULER_ANGLES);
    }

    /// Only the text of the output's angle cells depends on its unit.
    pub fn set_output_unit(&mut self, unit: AngleUnit) {
        debug!("output unit -> {}", unit);
        self.output.set_unit(unit);
        self.revision += 1;
        self.notify(
            Side::Output,
            Invalidation::ANGLE_AXIS | Invalidation::EULER_ANGLES,
        );
    }

    pub fn select_input_axis_order(&mut self, index: usize) -> Result<(), ConverterError> {
        let order = AxisOrder::from_index(index).map_err(|e| {
            warn!("ignoring input axis order selection: {}", e);
            e
        })?;
        self.set_input_axis_order(order);
        Ok(())
    }

    pub fn select_output_axis_order(&mut self, index: usize) -> Result<(), ConverterError> {
        let order = AxisOrder::from_index(index).map_err(|e| {
            warn!("ignoring output axis order selection: {}", e);
            e
        })?;
        self.set_output_axis_order(order);
        Ok(())
    }

    pub fn select_input_unit(&mut self, index: usize) -> Result<(), ConverterError> {
        let unit = AngleUnit::from_index(index).map_err(|e| {
            warn!("ignoring input unit selection: {}", e);
            e
        })?;
        self.set_input_unit(unit);
        Ok(())
    }

    pub fn select_output_unit(&mut self, index: usize) -> Result<(), ConverterError> {
        let unit = AngleUnit::from_index(index).map_err(|e| {
            warn!("ignoring output unit selection: {}", e);
            e
        })?;
        self.set_output_unit(unit);
        Ok(())
    }

    // The output is the input rotation, seen through the output settings.
    fn propagate(&mut self) {
        self.output.assign(*self.input.rotation());
        self.notify(Side::Output, Invalidation::all());
    }

    fn notify(&mut self, side: Side, which: Invalidation) {
        let state = match side {
            Side::Input => &self.input,
            Side::Output => &self.output,
        };
        debug!("invalidate {} {:?}", side, which);
        for surface in self.surfaces.iter_mut() {
            surface.invalidate(side, which, state);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use absolute_unit::{degrees, radians};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::{Quaternion, Vector3};
    use rotation::{quaternion, Rotation, RotationError};
    use std::{cell::RefCell, rc::Rc};

    type Log = Rc<RefCell<Vec<(Side, Invalidation)>>>;

    struct Recorder(Log);

    impl Surface for Recorder {
        fn invalidate(&mut self, side: Side, which: Invalidation, state: &RotationSide) {
            // Whatever we are told to redraw must already be consistent.
            for repr in which.representations() {
                for i in 0..repr.cell_count() {
                    assert!(state.cell(repr, i).unwrap().is_finite());
                }
            }
            self.0.borrow_mut().push((side, which));
        }
    }

    fn recorded() -> (RotationConverter, Log) {
        let log = Log::default();
        let mut converter = RotationConverter::default();
        converter.subscribe(Box::new(Recorder(log.clone())));
        (converter, log)
    }

    fn assert_side_consistent(side: &RotationSide) {
        let r = side.rotation();
        assert!(r.approx_eq(&Rotation::from_quaternion(*side.quaternion()), 1e-9));
        assert!(r.approx_eq(&Rotation::from_angle_axis(side.angle_axis()), 1e-9));
        assert!(r.approx_eq(&Rotation::from_matrix(side.matrix()), 1e-9));
        assert!(r.approx_eq(&Rotation::from_euler_angles(side.euler_angles()), 1e-9));
    }

    fn assert_all_consistent(converter: &RotationConverter) {
        assert_side_consistent(converter.input());
        assert_side_consistent(converter.output());
        assert!(converter
            .input()
            .rotation()
            .approx_eq(converter.output().rotation(), 1e-9));
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let (mut converter, _) = recorded();
        converter
            .set_angle_axis(AngleAxis::new(radians!(degrees!(90)), Vector3::z()).unwrap())
            .unwrap();
        let out = converter.output();
        assert_relative_eq!(out.quaternion().w, 0.7071, epsilon = 1e-4);
        assert_abs_diff_eq!(out.quaternion().i, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out.quaternion().j, 0.0, epsilon = 1e-12);
        assert_relative_eq!(out.quaternion().k, 0.7071, epsilon = 1e-4);
        assert_abs_diff_eq!(
            *out.matrix(),
            Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            epsilon = 1e-12
        );
        assert_eq!(out.axis_order(), AxisOrder::XYZ);
        assert_abs_diff_eq!(out.cell(Representation::EulerAngles, 0).unwrap(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out.cell(Representation::EulerAngles, 1).unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(out.cell(Representation::EulerAngles, 2).unwrap(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_identity_quaternion_default_axis() {
        let (mut converter, _) = recorded();
        converter
            .set_quaternion(UnitQuaternion::new_normalize(Quaternion::new(1.0, 0.0, 0.0, 0.0)))
            .unwrap();
        let aa = converter.output().angle_axis();
        assert_eq!(aa.angle().f64(), 0.0);
        assert_eq!(*aa.axis(), Vector3::z_axis());
        let cells = (0..4)
            .map(|i| converter.output().cell(Representation::AngleAxis, i).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(cells, vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_input_edit_invalidates_everything_once() {
        let (mut converter, log) = recorded();
        converter.edit_cell(Representation::EulerAngles, 1, 30.0).unwrap();
        assert_eq!(converter.revision(), 1);
        assert_eq!(
            *log.borrow(),
            vec![
                (Side::Input, Invalidation::all()),
                (Side::Output, Invalidation::all())
            ]
        );
        assert_all_consistent(&converter);
    }

    #[test]
    fn test_every_cell_edit_propagates() {
        let rng = fastrand::Rng::with_seed(31);
        let (mut converter, log) = recorded();
        for repr in Representation::ALL {
            for index in 0..repr.cell_count() {
                let before = log.borrow().len();
                let value = rng.f64() * 2.0 - 1.0;
                let value = if repr.is_angle_cell(index) { value * 170.0 } else { value };
                match converter.edit_cell(repr, index, value) {
                    Ok(()) => {
                        assert_eq!(log.borrow().len(), before + 2);
                        assert_all_consistent(&converter);
                    }
                    Err(e) => panic!("{} cell {} = {}: {}", repr, index, value, e),
                }
            }
        }
    }

    #[test]
    fn test_output_settings_do_not_move_rotation() {
        let (mut converter, log) = recorded();
        let aa = AngleAxis::new(radians!(1.2), Vector3::new(0.2, 0.4, -0.8)).unwrap();
        converter.set_angle_axis(aa).unwrap();
        let q = *converter.output().quaternion();
        let m = *converter.output().matrix();
        log.borrow_mut().clear();

        converter.set_output_axis_order(AxisOrder::ZXZ);
        assert_eq!(*converter.output().quaternion(), q);
        assert_eq!(*converter.output().matrix(), m);
        assert_eq!(converter.output().euler_angles().order(), AxisOrder::ZXZ);
        assert_side_consistent(converter.output());

        converter.set_output_unit(AngleUnit::Radians);
        assert_eq!(*converter.output().quaternion(), q);
        assert_eq!(
            *log.borrow(),
            vec![
                (Side::Output, Invalidation::EULER_ANGLES),
                (Side::Output, Invalidation::ANGLE_AXIS | Invalidation::EULER_ANGLES),
            ]
        );
    }

    #[test]
    fn test_input_settings_refresh_output() {
        let (mut converter, log) = recorded();
        converter
            .set_euler_angles([radians!(0.5), radians!(0.25), radians!(-1.0)])
            .unwrap();
        let before = *converter.input().rotation();
        log.borrow_mut().clear();

        converter.set_input_axis_order(AxisOrder::ZYX);
        assert_eq!(*converter.input().rotation(), before);
        assert_eq!(converter.input().axis_order(), AxisOrder::ZYX);
        converter.set_input_unit(AngleUnit::Radians);
        assert_eq!(*converter.input().rotation(), before);
        assert_all_consistent(&converter);
        assert_eq!(
            *log.borrow(),
            vec![
                (Side::Input, Invalidation::EULER_ANGLES),
                (Side::Output, Invalidation::all()),
                (Side::Input, Invalidation::ANGLE_AXIS | Invalidation::EULER_ANGLES),
                (Side::Output, Invalidation::all()),
            ]
        );
    }

    #[test]
    fn test_invalid_selection_is_a_no_op() {
        let (mut converter, log) = recorded();
        converter.select_output_axis_order(4).unwrap();
        converter.select_input_unit(1).unwrap();
        let revision = converter.revision();
        log.borrow_mut().clear();

        assert_eq!(
            converter.select_input_axis_order(12),
            Err(ConverterError::Rotation(RotationError::InvalidAxisOrder(12)))
        );
        assert_eq!(
            converter.select_output_axis_order(usize::MAX),
            Err(ConverterError::Rotation(RotationError::InvalidAxisOrder(usize::MAX)))
        );
        assert_eq!(
            converter.select_input_unit(2),
            Err(ConverterError::Rotation(RotationError::InvalidAngleUnit(2)))
        );
        assert!(converter.select_output_unit(7).is_err());

        assert!(log.borrow().is_empty());
        assert_eq!(converter.revision(), revision);
        assert_eq!(converter.output().axis_order(), AxisOrder::ZXZ);
        assert_eq!(converter.input().unit(), AngleUnit::Radians);
        assert_eq!(converter.output().unit(), AngleUnit::Degrees);
    }

    #[test]
    fn test_rejected_edit_changes_nothing() {
        let (mut converter, log) = recorded();
        converter.edit_cell(Representation::Quaternion, 3, 1.0).unwrap();
        let input = converter.input().clone();
        log.borrow_mut().clear();

        assert!(converter.edit_cell(Representation::AngleAxis, 4, 1.0).is_err());
        let mut bad = Matrix3::identity();
        bad[(1, 1)] = f64::NAN;
        assert!(converter.set_rotation_matrix(bad).is_err());
        assert!(converter
            .set_euler_angles([radians!(f64::NAN), radians!(0), radians!(0)])
            .is_err());
        assert!(log.borrow().is_empty());
        assert_eq!(*converter.input().rotation(), *input.rotation());
        assert_eq!(converter.input().euler_angles(), input.euler_angles());
    }

    #[test]
    fn test_non_finite_whole_edits_are_rejected() {
        let (mut converter, log) = recorded();
        converter
            .set_angle_axis(AngleAxis::new(radians!(0.75), Vector3::x()).unwrap())
            .unwrap();
        let before = *converter.output().rotation();
        let revision = converter.revision();
        log.borrow_mut().clear();

        let nan_q = UnitQuaternion::new_normalize(Quaternion::new(f64::NAN, 0.0, 0.0, 1.0));
        assert_eq!(
            converter.set_quaternion(nan_q),
            Err(ConverterError::Rotation(RotationError::NonFinite))
        );
        let spinning = AngleAxis::from_unit_axis(radians!(f64::INFINITY), Vector3::z_axis());
        assert_eq!(
            converter.set_angle_axis(spinning),
            Err(ConverterError::Rotation(RotationError::NonFinite))
        );

        assert!(log.borrow().is_empty());
        assert_eq!(converter.revision(), revision);
        assert_eq!(*converter.output().rotation(), before);
        assert_eq!(*converter.input().rotation(), before);
        assert_all_consistent(&converter);
    }

    #[test]
    fn test_random_rotations_through_each_representation() {
        let rng = fastrand::Rng::with_seed(1234);
        let (mut converter, _) = recorded();
        for step in 0..400 {
            let q = loop {
                let c = || rng.f64() * 2.0 - 1.0;
                if let Ok(q) = quaternion::try_from_components(c(), c(), c(), c()) {
                    break q;
                }
            };
            let r = Rotation::from_quaternion(q);
            match step % 4 {
                0 => converter.set_quaternion(q).unwrap(),
                1 => converter.set_rotation_matrix(r.matrix()).unwrap(),
                2 => converter.set_angle_axis(r.angle_axis()).unwrap(),
                _ => {
                    let order = converter.input().axis_order();
                    converter
                        .set_euler_angles(r.euler_angles(order).angles())
                        .unwrap()
                }
            }
            converter.select_input_axis_order(step % AxisOrder::COUNT).unwrap();
            converter
                .select_output_axis_order((step * 7) % AxisOrder::COUNT)
                .unwrap();
            assert_all_consistent(&converter);
            assert!(converter.output().rotation().approx_eq(&r, 1e-9));
        }
    }
}
