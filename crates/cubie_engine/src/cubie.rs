//! Cubies and their identities.

use std::fmt;
use std::str::FromStr;

use cgmath::{InnerSpace, Vector3};
use cubie_notation::Face;
use cubie_prefs::{ColorScheme, Rgb};
use itertools::Itertools;
use smallvec::SmallVec;
use thiserror::Error;

use crate::geometry::{FaceExt, Pose};

/// Maximum angle between a polygon normal and a face normal, measured as the
/// distance between the two unit vectors.
const NORMAL_TOLERANCE: f32 = 1e-3;

/// Index of a cubie in the registry. Stable for the lifetime of an engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubieId(pub u8);
impl fmt::Display for CubieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shape of a cubie, by how many outer faces it touches.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CubieKind {
    /// One outer face.
    Center,
    /// Two outer faces.
    Edge,
    /// Three outer faces.
    Corner,
}

/// Invalid cubie identity.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("{letter:?} is not a face letter")]
    BadLetter { letter: char },
    #[error("cubie identity must have 1 to 3 faces, got {0}")]
    BadLength(usize),
    #[error("face {0} appears twice")]
    RepeatedFace(Face),
    #[error("faces {0} and {1} are opposite")]
    OppositeFaces(Face, Face),
}

/// Set of outer faces a cubie started on, such as `FRU`.
///
/// Faces are kept sorted by letter, so `URF`, `RUF`, and `FRU` are the same
/// identity and all display as `FRU`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubieIdentity(SmallVec<[Face; 3]>);
impl fmt::Display for CubieIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(|face| face.symbol()).join(""))
    }
}
impl FromStr for CubieIdentity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_face_letters(s)?)
    }
}
impl CubieIdentity {
    /// Constructs an identity from a set of faces in any order.
    pub fn new(faces: impl IntoIterator<Item = Face>) -> Result<Self, IdentityError> {
        let mut faces: SmallVec<[Face; 3]> = faces.into_iter().collect();
        if !(1..=3).contains(&faces.len()) {
            return Err(IdentityError::BadLength(faces.len()));
        }
        faces.sort_by_key(|face| face.symbol());
        for (&a, &b) in faces.iter().tuple_combinations() {
            if a == b {
                return Err(IdentityError::RepeatedFace(a));
            }
            if a.opposite() == b {
                return Err(IdentityError::OppositeFaces(a, b));
            }
        }
        Ok(Self(faces))
    }

    /// Returns the identity of the cubie at a position in the 3x3x3 lattice,
    /// where each coordinate is 0, 1, or 2.
    pub(crate) fn at_lattice_index([x, y, z]: [usize; 3]) -> Self {
        let mut faces: SmallVec<[Face; 3]> = [
            (x == 2, Face::R),
            (x == 0, Face::L),
            (y == 2, Face::U),
            (y == 0, Face::D),
            (z == 2, Face::F),
            (z == 0, Face::B),
        ]
        .into_iter()
        .filter(|&(on_face, _)| on_face)
        .map(|(_, face)| face)
        .collect();
        faces.sort_by_key(|face| face.symbol());
        Self(faces)
    }

    /// Returns the faces, sorted by letter.
    pub fn faces(&self) -> &[Face] {
        &self.0
    }
    /// Returns whether the identity includes `face`.
    pub fn contains(&self, face: Face) -> bool {
        self.0.contains(&face)
    }
    /// Returns whether the cubie is a center, edge, or corner.
    pub fn kind(&self) -> CubieKind {
        match self.0.len() {
            1 => CubieKind::Center,
            2 => CubieKind::Edge,
            _ => CubieKind::Corner,
        }
    }
}

/// Returns the position of every cubie in the 3x3x3 lattice, in registry
/// order. Each coordinate is 0, 1, or 2, and the hidden center is skipped.
pub(crate) fn lattice_indices() -> impl Iterator<Item = [usize; 3]> {
    itertools::iproduct!(0..3, 0..3, 0..3)
        .map(|(x, y, z)| [x, y, z])
        .filter(|&index| index != [1, 1, 1])
}

/// Parses face letters in the order they are written, without sorting or
/// checking that they form a valid identity.
pub fn parse_face_letters(s: &str) -> Result<SmallVec<[Face; 3]>, IdentityError> {
    s.chars()
        .map(|letter| Face::from_symbol(letter).ok_or(IdentityError::BadLetter { letter }))
        .collect()
}

/// Which polygons of a cubie's mesh carry the sticker for each of its faces.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FaceColorSlots {
    stickers: SmallVec<[(Face, SmallVec<[usize; 2]>); 3]>,
    polygon_count: usize,
}
impl FaceColorSlots {
    /// Assigns each polygon whose normal points out of one of the identity's
    /// faces to that face. Every other polygon is inside.
    pub fn from_normals(identity: &CubieIdentity, normals: &[Vector3<f32>]) -> Self {
        let stickers = identity
            .faces()
            .iter()
            .map(|&face| {
                let slots = normals
                    .iter()
                    .positions(|n| (n.normalize() - face.vector()).magnitude() <= NORMAL_TOLERANCE)
                    .collect();
                (face, slots)
            })
            .collect();
        Self {
            stickers,
            polygon_count: normals.len(),
        }
    }

    /// Returns the polygons that show the sticker for `face`.
    pub fn face_slots(&self, face: Face) -> &[usize] {
        self.stickers
            .iter()
            .find(|(f, _)| *f == face)
            .map_or(&[][..], |(_, slots)| slots.as_slice())
    }
    /// Returns the number of polygons in the mesh.
    pub fn polygon_count(&self) -> usize {
        self.polygon_count
    }
}

/// One of the 26 visible pieces of the cube.
#[derive(Debug, Clone)]
pub struct Cubie {
    id: CubieId,
    identity: CubieIdentity,
    initial_pose: Pose,
    pub(crate) pose: Pose,
    slots: FaceColorSlots,
    /// Whether each sticker is lit, in the same order as the identity's faces.
    stickers_on: SmallVec<[bool; 3]>,
    polygon_colors: Vec<Rgb>,
}
impl Cubie {
    pub(crate) fn new(
        id: CubieId,
        identity: CubieIdentity,
        initial_pose: Pose,
        slots: FaceColorSlots,
        colors: &ColorScheme,
    ) -> Self {
        let mut polygon_colors = vec![colors.inside; slots.polygon_count()];
        for &face in identity.faces() {
            for &slot in slots.face_slots(face) {
                polygon_colors[slot] = colors.face_color(face);
            }
        }
        Self {
            id,
            stickers_on: identity.faces().iter().map(|_| true).collect(),
            identity,
            initial_pose,
            pose: initial_pose,
            slots,
            polygon_colors,
        }
    }

    /// Returns the cubie's index in the registry.
    pub fn id(&self) -> CubieId {
        self.id
    }
    /// Returns the faces the cubie started on.
    pub fn identity(&self) -> &CubieIdentity {
        &self.identity
    }
    /// Returns the committed pose. During a rotation, cubies in the active
    /// group are additionally turned by the pivot.
    pub fn pose(&self) -> Pose {
        self.pose
    }
    /// Returns the pose the cubie was built with.
    pub fn initial_pose(&self) -> Pose {
        self.initial_pose
    }
    /// Returns the polygon-to-face assignment.
    pub fn slots(&self) -> &FaceColorSlots {
        &self.slots
    }
    /// Returns the current color of each polygon.
    pub fn polygon_colors(&self) -> &[Rgb] {
        &self.polygon_colors
    }

    /// Returns the color shown on the sticker for `face`, or `None` if the
    /// cubie has no sticker there.
    pub fn face_color(&self, face: Face) -> Option<Rgb> {
        let &slot = self.slots.face_slots(face).first()?;
        self.polygon_colors.get(slot).copied()
    }
    /// Returns whether the sticker for `face` is lit, or `None` if the cubie
    /// has no sticker there.
    pub fn is_sticker_on(&self, face: Face) -> Option<bool> {
        let i = self.identity.faces().iter().position(|&f| f == face)?;
        Some(self.stickers_on[i])
    }

    /// Lights or masks the sticker for `face`. Returns whether anything
    /// changed.
    pub(crate) fn set_sticker(&mut self, face: Face, on: bool, colors: &ColorScheme) -> bool {
        let Some(i) = self.identity.faces().iter().position(|&f| f == face) else {
            return false;
        };
        if self.stickers_on[i] == on {
            return false;
        }
        self.stickers_on[i] = on;
        let color = match on {
            true => colors.face_color(face),
            false => colors.inside,
        };
        self.paint(face, color);
        true
    }

    fn paint(&mut self, face: Face, color: Rgb) {
        for &slot in self.slots.face_slots(face) {
            if let Some(c) = self.polygon_colors.get_mut(slot) {
                *c = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Vector3;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_identity_canonical_order() {
        let a: CubieIdentity = "URF".parse().unwrap();
        let b: CubieIdentity = "RUF".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!("FRU", a.to_string());
        assert_eq!(CubieKind::Corner, a.kind());
        assert_eq!("BD", "DB".parse::<CubieIdentity>().unwrap().to_string());
        assert_eq!(CubieKind::Center, "U".parse::<CubieIdentity>().unwrap().kind());
    }

    #[test]
    fn test_identity_errors() {
        let err = |s: &str| s.parse::<CubieIdentity>().unwrap_err();
        assert_eq!(IdentityError::BadLetter { letter: 'X' }, err("RX"));
        assert_eq!(IdentityError::BadLetter { letter: 'r' }, err("r"));
        assert_eq!(IdentityError::BadLength(0), err(""));
        assert_eq!(IdentityError::BadLength(4), err("FRUB"));
        assert_eq!(IdentityError::RepeatedFace(Face::R), err("RR"));
        assert_eq!(IdentityError::OppositeFaces(Face::L, Face::R), err("RL"));
    }

    #[test]
    fn test_face_color_slots() {
        let identity: CubieIdentity = "FU".parse().unwrap();
        let normals = [
            Vector3::unit_x(),
            Vector3::unit_y() * 2.0,
            -Vector3::unit_z(),
            Vector3::unit_z(),
            Vector3::unit_y(),
        ];
        let slots = FaceColorSlots::from_normals(&identity, &normals);
        assert_eq!(&[3], slots.face_slots(Face::F));
        assert_eq!(&[1, 4], slots.face_slots(Face::U));
        assert!(slots.face_slots(Face::B).is_empty());
        assert_eq!(5, slots.polygon_count());
    }

    #[test]
    fn test_sticker_colors() {
        let colors = ColorScheme::default();
        let identity: CubieIdentity = "FU".parse().unwrap();
        let normals = [Vector3::unit_z(), Vector3::unit_y(), Vector3::unit_x()];
        let slots = FaceColorSlots::from_normals(&identity, &normals);
        let mut cubie = Cubie::new(
            CubieId(0),
            identity,
            Pose::at(Vector3::new(0.0, 1.0, 1.0)),
            slots,
            &colors,
        );
        assert_eq!(
            &[colors.front, colors.up, colors.inside],
            cubie.polygon_colors(),
        );
        assert_eq!(Some(true), cubie.is_sticker_on(Face::U));
        assert_eq!(None, cubie.is_sticker_on(Face::R));
        assert_eq!(None, cubie.face_color(Face::R));

        assert!(cubie.set_sticker(Face::U, false, &colors));
        assert!(!cubie.set_sticker(Face::U, false, &colors));
        assert!(!cubie.set_sticker(Face::R, false, &colors));
        assert_eq!(Some(colors.inside), cubie.face_color(Face::U));
        assert_eq!(Some(false), cubie.is_sticker_on(Face::U));

        assert!(cubie.set_sticker(Face::U, true, &colors));
        assert_eq!(Some(colors.up), cubie.face_color(Face::U));
    }
}
