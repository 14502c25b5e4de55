use serde::{Deserialize, Serialize};

/// Size and spacing of the cubies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LatticePreferences {
    /// Edge length of one cubie.
    pub cubie_size: f32,
    /// Gap between neighboring cubies.
    pub cubie_spacing: f32,
    /// How far a coordinate may drift from a lattice value and still count as
    /// being on it. Measured in the same units as `cubie_size`.
    pub position_tolerance: f32,
}
impl Default for LatticePreferences {
    fn default() -> Self {
        Self {
            cubie_size: 1.0,
            cubie_spacing: 0.05,
            position_tolerance: 0.1,
        }
    }
}
impl LatticePreferences {
    /// Distance between the centers of neighboring cubies.
    pub fn pitch(&self) -> f32 {
        self.cubie_size + self.cubie_spacing
    }
}
