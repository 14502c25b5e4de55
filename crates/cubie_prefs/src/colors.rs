use cubie_notation::Face;
use serde::{Deserialize, Serialize};

use crate::Rgb;

/// Sticker colors for each face, plus the neutral color used for hidden or
/// masked-off faces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColorScheme {
    pub inside: Rgb,
    pub up: Rgb,
    pub down: Rgb,
    pub right: Rgb,
    pub left: Rgb,
    pub front: Rgb,
    pub back: Rgb,
}
impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            inside: Rgb::from(0x2c2c2c),
            up: Rgb::from(0xffff00),
            down: Rgb::WHITE,
            right: Rgb::from(0xff0000),
            left: Rgb::from(0xff8c00),
            front: Rgb::from(0x0000ff),
            back: Rgb::from(0x00ff00),
        }
    }
}
impl ColorScheme {
    /// Returns the sticker color for a face.
    pub fn face_color(&self, face: Face) -> Rgb {
        match face {
            Face::R => self.right,
            Face::L => self.left,
            Face::U => self.up,
            Face::D => self.down,
            Face::F => self.front,
            Face::B => self.back,
        }
    }
}
