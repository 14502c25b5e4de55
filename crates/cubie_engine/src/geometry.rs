//! Axes, signs, and rigid poses.

use std::fmt;
use std::ops::Neg;

use cgmath::{InnerSpace, Quaternion, Rotation, Vector3};
use cubie_notation::Face;

/// 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}
impl Axis {
    /// Returns an iterator over all axes.
    pub fn iter() -> impl Iterator<Item = Axis> {
        [Axis::X, Axis::Y, Axis::Z].into_iter()
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// Positive or negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative.
    Neg,
    /// Positive.
    Pos,
}
impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Sign {
    /// Returns `-1.0` or `1.0`.
    pub const fn float(self) -> f32 {
        match self {
            Sign::Neg => -1.0,
            Sign::Pos => 1.0,
        }
    }
}

/// Spatial facts about a [`Face`].
pub trait FaceExt {
    /// Returns the axis perpendicular to the face.
    fn axis(self) -> Axis;
    /// Returns which end of the axis the face is on.
    fn sign(self) -> Sign;
    /// Returns the outward unit normal of the face.
    fn vector(self) -> Vector3<f32>;
}
impl FaceExt for Face {
    fn axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }
    fn sign(self) -> Sign {
        match self {
            Face::R | Face::U | Face::F => Sign::Pos,
            Face::L | Face::D | Face::B => Sign::Neg,
        }
    }
    fn vector(self) -> Vector3<f32> {
        self.axis().unit_vec3() * self.sign().float()
    }
}

/// Position and orientation of a cubie.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    /// Center of the cubie.
    pub position: Vector3<f32>,
    /// Rotation from the cubie's initial orientation.
    pub orientation: Quaternion<f32>,
}
impl Pose {
    /// Returns a pose at `position` with no rotation.
    pub fn at(position: Vector3<f32>) -> Self {
        Self {
            position,
            orientation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
        }
    }

    /// Returns the pose after rotating it about the origin.
    #[must_use]
    pub fn rotated(self, rotation: Quaternion<f32>) -> Self {
        Self {
            position: rotation.rotate_vector(self.position),
            orientation: (rotation * self.orientation).normalize(),
        }
    }

    /// Returns the direction that a vector in the cubie's original frame
    /// points now.
    pub fn transform_vector(&self, v: Vector3<f32>) -> Vector3<f32> {
        self.orientation.rotate_vector(v)
    }

    /// Returns whether two poses are within `tolerance` of each other, both in
    /// position and in how far each basis vector has turned.
    pub fn approx_eq(&self, other: &Pose, tolerance: f32) -> bool {
        (self.position - other.position).magnitude() <= tolerance
            && Axis::iter().all(|axis| {
                let v = axis.unit_vec3();
                (self.transform_vector(v) - other.transform_vector(v)).magnitude() <= tolerance
            })
    }
}
