use std::fmt;

use crate::Face;

/// Middle slice between two opposite faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Slice {
    /// Middle slice between L and R, turning like L.
    M,
    /// Equatorial slice between U and D, turning like D.
    E,
    /// Standing slice between F and B, turning like F.
    S,
}

impl Slice {
    /// Returns the letter for the slice.
    pub fn symbol(self) -> char {
        match self {
            Slice::M => 'M',
            Slice::E => 'E',
            Slice::S => 'S',
        }
    }

    /// Returns the face whose clockwise direction the slice follows.
    pub fn reference_face(self) -> Face {
        match self {
            Slice::M => Face::L,
            Slice::E => Face::D,
            Slice::S => Face::F,
        }
    }
}

/// Set of pieces that turn together.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Layer {
    /// Outer layer of one face.
    ///
    /// Example: `R`
    Face(Face),
    /// Outer layer of one face plus the adjacent middle slice.
    ///
    /// Example: `r`
    Wide(Face),
    /// Middle slice only.
    ///
    /// Example: `M`
    Slice(Slice),
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Layer {
    /// Every layer that can appear in an algorithm.
    pub const ALL: [Layer; 15] = [
        Layer::Face(Face::R),
        Layer::Face(Face::L),
        Layer::Face(Face::U),
        Layer::Face(Face::D),
        Layer::Face(Face::F),
        Layer::Face(Face::B),
        Layer::Wide(Face::R),
        Layer::Wide(Face::L),
        Layer::Wide(Face::U),
        Layer::Wide(Face::D),
        Layer::Wide(Face::F),
        Layer::Wide(Face::B),
        Layer::Slice(Slice::M),
        Layer::Slice(Slice::E),
        Layer::Slice(Slice::S),
    ];

    /// Returns the symbol for the layer. Wide layers use lowercase letters.
    pub fn symbol(self) -> char {
        match self {
            Layer::Face(face) => face.symbol(),
            Layer::Wide(face) => face.symbol().to_ascii_lowercase(),
            Layer::Slice(slice) => slice.symbol(),
        }
    }
    /// Returns the layer with the given symbol. Case matters: `R` is a face
    /// layer and `r` is a wide layer.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'M' => Some(Layer::Slice(Slice::M)),
            'E' => Some(Layer::Slice(Slice::E)),
            'S' => Some(Layer::Slice(Slice::S)),
            c if c.is_ascii_lowercase() => {
                Face::from_symbol(c.to_ascii_uppercase()).map(Layer::Wide)
            }
            c => Face::from_symbol(c).map(Layer::Face),
        }
    }

    /// Returns the face whose clockwise direction the layer follows.
    pub fn reference_face(self) -> Face {
        match self {
            Layer::Face(face) | Layer::Wide(face) => face,
            Layer::Slice(slice) => slice.reference_face(),
        }
    }
    /// Returns the outer face included in the layer, if any.
    pub fn outer_face(self) -> Option<Face> {
        match self {
            Layer::Face(face) | Layer::Wide(face) => Some(face),
            Layer::Slice(_) => None,
        }
    }
    /// Returns whether the layer includes the middle slice perpendicular to
    /// its axis.
    pub fn includes_middle(self) -> bool {
        matches!(self, Layer::Wide(_) | Layer::Slice(_))
    }
}
