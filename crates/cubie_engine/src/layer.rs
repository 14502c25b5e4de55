//! Deciding which cubies a layer move turns, and which way.

use std::f32::consts::FRAC_PI_2;

use cgmath::{Quaternion, Rad, Rotation3, Vector3};
use cubie_notation::{Layer, Move};
use cubie_prefs::LatticePreferences;

use crate::geometry::{Axis, FaceExt, Sign};

/// Returns the axis that a layer turns around.
pub fn layer_axis(layer: Layer) -> Axis {
    layer.reference_face().axis()
}

/// Returns the direction of a clockwise turn of `layer`, as a rotation about
/// the positive end of its axis.
///
/// A clockwise turn looks clockwise from outside the reference face, so it is
/// a negative rotation for faces on the positive end of an axis (`R`, `U`,
/// `F`, `S`) and a positive rotation otherwise.
pub fn clockwise_sign(layer: Layer) -> Sign {
    -layer.reference_face().sign()
}

/// Returns the total angle of a move about the positive end of its axis.
pub fn goal_angle(mv: Move) -> Rad<f32> {
    Rad(FRAC_PI_2 * clockwise_sign(mv.layer).float() * mv.turns.amount() as f32)
}

/// Returns the rotation for an angle about an axis.
pub fn axis_rotation(axis: Axis, angle: Rad<f32>) -> Quaternion<f32> {
    Quaternion::from_axis_angle(axis.unit_vec3(), angle)
}

/// Returns whether `a` and `b` are within `tolerance` of each other.
fn nearly_equal(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

/// Selects cubies for a layer based on where they are right now.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayerSelector {
    /// Distance between neighboring cubie centers.
    pub pitch: f32,
    /// Maximum distance from a lattice coordinate.
    pub tolerance: f32,
}
impl LayerSelector {
    /// Constructs a selector for a lattice.
    pub fn new(lattice: &LatticePreferences) -> Self {
        Self {
            pitch: lattice.pitch(),
            tolerance: lattice.position_tolerance,
        }
    }

    /// Returns whether a cubie centered at `position` belongs to `layer`.
    pub fn is_in_layer(&self, layer: Layer, position: Vector3<f32>) -> bool {
        let coord = position[layer_axis(layer) as usize];
        let in_outer = layer.outer_face().is_some_and(|face| {
            nearly_equal(coord, face.sign().float() * self.pitch, self.tolerance)
        });
        let in_middle = layer.includes_middle() && nearly_equal(coord, 0.0, self.tolerance);
        in_outer || in_middle
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use cubie_notation::{Face, Slice, Turns};

    use super::*;

    #[test]
    fn test_goal_angles() {
        let angle = |s: &str| goal_angle(s.parse().unwrap()).0;
        assert_eq!(-FRAC_PI_2, angle("R"));
        assert_eq!(FRAC_PI_2, angle("R'"));
        assert_eq!(-PI, angle("R2"));
        assert_eq!(FRAC_PI_2, angle("L"));
        assert_eq!(-FRAC_PI_2, angle("U"));
        assert_eq!(FRAC_PI_2, angle("D"));
        assert_eq!(-FRAC_PI_2, angle("F"));
        assert_eq!(FRAC_PI_2, angle("B"));
        // slices follow L, D, and F
        assert_eq!(FRAC_PI_2, angle("M"));
        assert_eq!(FRAC_PI_2, angle("E"));
        assert_eq!(-FRAC_PI_2, angle("S"));
        assert_eq!(-FRAC_PI_2, angle("r"));
        assert_eq!(PI, angle("l2"));
    }

    #[test]
    fn test_layer_axes() {
        assert_eq!(Axis::X, layer_axis(Layer::Slice(Slice::M)));
        assert_eq!(Axis::Y, layer_axis(Layer::Wide(Face::D)));
        assert_eq!(Axis::Z, layer_axis(Layer::Slice(Slice::S)));
        assert_eq!(Axis::Z, layer_axis(Move::new(Layer::Face(Face::B), Turns::Half).layer));
    }

    #[test]
    fn test_is_in_layer() {
        let selector = LayerSelector {
            pitch: 1.05,
            tolerance: 0.1,
        };
        let r = Layer::Face(Face::R);
        let l = Layer::Face(Face::L);
        let m = Layer::Slice(Slice::M);
        let wide_r = Layer::Wide(Face::R);

        let right = Vector3::new(1.05, 0.0, -1.05);
        let middle = Vector3::new(0.02, 1.05, 0.0);
        let drifted = Vector3::new(1.05 - 0.09, 0.0, 0.0);
        let between = Vector3::new(0.5, 0.0, 0.0);

        assert!(selector.is_in_layer(r, right));
        assert!(!selector.is_in_layer(l, right));
        assert!(!selector.is_in_layer(m, right));
        assert!(selector.is_in_layer(wide_r, right));

        assert!(!selector.is_in_layer(r, middle));
        assert!(selector.is_in_layer(m, middle));
        assert!(selector.is_in_layer(wide_r, middle));
        assert!(selector.is_in_layer(Layer::Wide(Face::L), middle));

        assert!(selector.is_in_layer(r, drifted));

        for layer in Layer::ALL {
            assert!(!selector.is_in_layer(layer, between) || layer_axis(layer) != Axis::X);
        }
    }
}
