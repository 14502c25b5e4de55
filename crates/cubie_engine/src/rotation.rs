//! State of the layer rotation in progress.

use cgmath::Rad;
use cubie_notation::Move;
use cubie_prefs::InterpolateFn;

use crate::cubie::CubieId;
use crate::geometry::Axis;
use crate::layer::{goal_angle, layer_axis};
use crate::scene::Pivot;

/// Higher number means faster exponential increase in twist speed when many
/// moves are queued.
pub const EXP_TWIST_FACTOR: f32 = 0.5;
/// Frame rate assumed by the timed driver when a tick has no duration.
pub const ASSUMED_FPS: f32 = 120.0;
/// If a single frame would advance a twist by at least this fraction, the
/// twist finishes immediately.
pub const MIN_TWIST_DELTA: f32 = 1.0 / 3.0;

/// Layer rotation that has started and not yet finished.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationState {
    mv: Move,
    axis: Axis,
    active_group: Vec<CubieId>,
    current_angle: Rad<f32>,
    goal_angle: Rad<f32>,
    /// Progress of the timed driver, from 0.0 to 1.0.
    progress: f32,
}
impl RotationState {
    pub(crate) fn new(mv: Move, active_group: Vec<CubieId>) -> Self {
        Self {
            mv,
            axis: layer_axis(mv.layer),
            active_group,
            current_angle: Rad(0.0),
            goal_angle: goal_angle(mv),
            progress: 0.0,
        }
    }

    /// Returns the move being animated.
    pub fn current_move(&self) -> Move {
        self.mv
    }
    /// Returns the axis of rotation.
    pub fn axis(&self) -> Axis {
        self.axis
    }
    /// Returns the cubies that are turning, selected when the rotation
    /// started.
    pub fn active_group(&self) -> &[CubieId] {
        &self.active_group
    }
    /// Returns whether `cubie` is turning.
    pub fn contains(&self, cubie: CubieId) -> bool {
        self.active_group.contains(&cubie)
    }
    /// Returns the angle the layer has turned so far.
    pub fn current_angle(&self) -> Rad<f32> {
        self.current_angle
    }
    /// Returns the angle the layer will have turned when the rotation ends.
    pub fn goal_angle(&self) -> Rad<f32> {
        self.goal_angle
    }
    /// Returns the current pivot transform.
    pub fn pivot(&self) -> Pivot {
        Pivot {
            axis: self.axis,
            angle: self.current_angle,
        }
    }

    /// Advances by `step` radians per quarter turn towards the goal. Returns
    /// `true` once the remaining angle is within `tolerance`, in which case the
    /// angle snaps to the goal.
    pub(crate) fn step_fixed(&mut self, step: f32, tolerance: f32) -> bool {
        let remaining = self.goal_angle.0 - self.current_angle.0;
        if remaining.abs() <= tolerance {
            self.snap_to_goal();
            return true;
        }
        let step = step * self.mv.turns.quarter_turns() as f32;
        self.current_angle.0 += step.min(remaining.abs()).copysign(remaining);
        false
    }

    /// Advances the timed progress by `twist_delta`, a fraction of the whole
    /// twist. Returns `true` once the twist is complete, in which case the
    /// angle snaps to the goal.
    pub(crate) fn step_timed(&mut self, twist_delta: f32, interpolate: InterpolateFn) -> bool {
        let twist_delta = match (0.0..MIN_TWIST_DELTA).contains(&twist_delta) {
            true => twist_delta,
            false => 1.0,
        };
        self.progress += twist_delta;
        if self.progress >= 1.0 {
            self.snap_to_goal();
            return true;
        }
        self.current_angle = self.goal_angle * interpolate.interpolate(self.progress);
        false
    }

    pub(crate) fn snap_to_goal(&mut self) {
        self.current_angle = self.goal_angle;
        self.progress = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    fn rotation(s: &str) -> RotationState {
        RotationState::new(s.parse().unwrap(), vec![])
    }

    #[test]
    fn test_fixed_step_never_overshoots() {
        let mut r = rotation("L");
        let mut ticks = 0;
        while !r.step_fixed(0.7, 0.0) {
            ticks += 1;
            assert!(r.current_angle().0 <= FRAC_PI_2);
        }
        // 0.7, 1.4, then clamped to the goal
        assert_eq!(3, ticks);
        assert_eq!(Rad(FRAC_PI_2), r.current_angle());
    }

    #[test]
    fn test_fixed_step_half_turn_is_twice_as_fast() {
        let mut quarter = rotation("U");
        let mut half = rotation("U2");
        let (mut quarter_ticks, mut half_ticks) = (0, 0);
        while !quarter.step_fixed(0.1, 0.05) {
            quarter_ticks += 1;
        }
        while !half.step_fixed(0.1, 0.05) {
            half_ticks += 1;
        }
        assert_eq!(quarter_ticks, half_ticks);
        assert_eq!(Rad(-PI), half.current_angle());
    }

    #[test]
    fn test_timed_snaps_to_goal() {
        let mut r = rotation("F'");
        assert!(!r.step_timed(0.25, InterpolateFn::Lerp));
        assert!((r.current_angle().0 - FRAC_PI_2 / 4.0).abs() < 1e-6);
        assert!(!r.step_timed(0.25, InterpolateFn::Lerp));
        assert!(!r.step_timed(0.25, InterpolateFn::Lerp));
        assert!(r.step_timed(0.25, InterpolateFn::Lerp));
        assert_eq!(Rad(FRAC_PI_2), r.current_angle());
    }

    #[test]
    fn test_timed_large_delta_is_instant() {
        for delta in [MIN_TWIST_DELTA, 5.0, f32::INFINITY, f32::NAN, -1.0] {
            let mut r = rotation("M2");
            assert!(r.step_timed(delta, InterpolateFn::Cosine), "{delta}");
            assert_eq!(r.goal_angle(), r.current_angle());
        }
    }
}
