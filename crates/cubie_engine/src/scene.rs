//! Hooks for keeping a scene graph in sync with the engine.

use cgmath::{Quaternion, Rad};
use cubie_prefs::Rgb;

use crate::cubie::CubieId;
use crate::geometry::{Axis, Pose};
use crate::layer::axis_rotation;

/// Transform of the temporary pivot that turning cubies are attached to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pivot {
    /// Axis of rotation, through the center of the cube.
    pub axis: Axis,
    /// Angle about the positive end of the axis.
    pub angle: Rad<f32>,
}
impl Pivot {
    /// Pivot with no rotation.
    pub const IDENTITY: Self = Self {
        axis: Axis::X,
        angle: Rad(0.0),
    };

    /// Returns the rotation applied by the pivot.
    pub fn rotation(&self) -> Quaternion<f32> {
        axis_rotation(self.axis, self.angle)
    }
}

/// Receiver for everything a renderer needs to draw the cube.
///
/// Every method has an empty default, so a renderer only implements what it
/// cares about. `()` ignores everything.
#[allow(unused_variables)]
pub trait SceneGraph {
    /// Called when a cubie is first placed or its pose is reset.
    fn set_pose(&mut self, cubie: CubieId, pose: &Pose) {}
    /// Called when a cubie's polygon colors change.
    fn set_polygon_colors(&mut self, cubie: CubieId, colors: &[Rgb]) {}

    /// Called when a cubie joins the active group of a rotation. It should
    /// move with the pivot until detached.
    fn attach_to_pivot(&mut self, cubie: CubieId) {}
    /// Called each time the pivot turns.
    fn set_pivot(&mut self, pivot: &Pivot) {}
    /// Called when a rotation finishes, with the cubie's baked pose.
    fn detach_from_pivot(&mut self, cubie: CubieId, pose: &Pose) {}
}

impl SceneGraph for () {}
