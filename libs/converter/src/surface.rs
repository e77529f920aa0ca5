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
use crate::{Invalidation, RotationSide, Side};

/// A display of one or both sides of a converter.
///
/// The converter calls `invalidate` after every edit cycle with the
/// representations whose values or text changed; the surface re-reads them
/// from `state` and redraws. Surfaces never hold on to converter state.
pub trait Surface {
    fn invalidate(&mut self, side: Side, which: Invalidation, state: &RotationSide);
}
