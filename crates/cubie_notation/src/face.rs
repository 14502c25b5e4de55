use std::fmt;

use strum::EnumIter;

/// Outer face of the cube.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    /// Right (+X)
    R,
    /// Left (-X)
    L,
    /// Up (+Y)
    U,
    /// Down (-Y)
    D,
    /// Front (+Z, towards the camera)
    F,
    /// Back (-Z)
    B,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Face {
    /// Returns the uppercase letter for the face.
    pub fn symbol(self) -> char {
        match self {
            Face::R => 'R',
            Face::L => 'L',
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
        }
    }
    /// Returns the face with the given uppercase letter.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'R' => Some(Face::R),
            'L' => Some(Face::L),
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Returns the face on the opposite side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Face::R => Face::L,
            Face::L => Face::R,
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }
}
