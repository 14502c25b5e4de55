//! Move engine for an animated 3x3x3 cube.
//!
//! The engine keeps a registry of 26 cubies, each with a pose and a set of
//! sticker colors. Algorithms are parsed into moves and queued, and each move
//! turns whichever cubies are in its layer at the moment it starts. Layer
//! membership is decided from positions alone, so it stays correct however
//! the cube has been scrambled.
//!
//! ```
//! use cubie_engine::CubeEngine;
//! use cubie_prefs::Preferences;
//!
//! let mut engine = CubeEngine::new(&Preferences::default())?;
//! engine.perform_algorithm("R U R' U'")?;
//! while engine.tick(None) {}
//! assert!(!engine.is_rotating());
//! # Ok::<(), cubie_engine::EngineError>(())
//! ```

mod cubie;
mod engine;
mod error;
mod geometry;
mod layer;
mod mesh;
mod patterns;
mod rotation;
mod scene;
mod stickers;

pub use cubie::{Cubie, CubieId, CubieIdentity, CubieKind, FaceColorSlots, IdentityError};
pub use engine::CubeEngine;
pub use error::EngineError;
pub use geometry::{Axis, FaceExt, Pose, Sign};
pub use layer::{LayerSelector, axis_rotation, clockwise_sign, goal_angle, layer_axis};
pub use mesh::{BoxGeometry, CubieGeometry};
pub use patterns::PatternPreset;
pub use rotation::{ASSUMED_FPS, EXP_TWIST_FACTOR, MIN_TWIST_DELTA, RotationState};
pub use scene::{Pivot, SceneGraph};
pub use stickers::{ALL_OFF, ALL_ON, StickerPattern};

pub use cubie_notation as notation;
pub use cubie_prefs as prefs;
