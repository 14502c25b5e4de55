use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

/// Default rotation speed for the fixed-step driver, in degrees per tick.
pub const DEFAULT_ROTATION_SPEED: f32 = 4.0;
/// Default duration of one twist for the timed driver, in seconds.
pub const DEFAULT_TWIST_DURATION: f32 = 0.2;
/// Default angle tolerance for the fixed-step driver, in radians.
pub const DEFAULT_ANGLE_TOLERANCE: f32 = 0.1;

/// How a layer rotation advances each tick.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TwistDriver {
    /// Advance by a fixed angle every tick.
    #[default]
    FixedStep,
    /// Interpolate over a fixed duration using the time between ticks.
    Timed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    pub driver: TwistDriver,
    /// Angle advanced per tick by the fixed-step driver, in degrees. Half turns
    /// advance twice as far per tick.
    pub rotation_speed: f32,
    /// When the remaining angle is at most this many radians, the fixed-step
    /// driver snaps to the goal.
    pub angle_tolerance: f32,
    /// Seconds per twist for the timed driver.
    pub twist_duration: f32,
    /// Whether the timed driver speeds up when many moves are queued.
    pub dynamic_twist_speed: bool,
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            driver: TwistDriver::default(),
            rotation_speed: DEFAULT_ROTATION_SPEED,
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
            twist_duration: DEFAULT_TWIST_DURATION,
            dynamic_twist_speed: false,
            twist_interpolation: InterpolateFn::default(),
        }
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};
    use strum::VariantArray;

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    ///
    /// Every function here is monotonic, so a layer never swings past its goal
    /// angle mid-animation.
    #[derive(
        Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, VariantArray,
    )]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        Lerp,
        #[default]
        Cosine,
        Cubic,
        Circular,
        CriticallyDamped,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1].
        pub fn interpolate(self, t: f32) -> f32 {
            match self {
                Self::Lerp => t,

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::Cubic => (3.0 - 2.0 * t) * t * t,

                Self::Circular => {
                    if t < 0.5 {
                        (1.0 - (1.0 - (2.0 * t).powf(2.0)).sqrt()) * 0.5
                    } else {
                        (1.0 + (1.0 - (-2.0 * t + 2.0).powf(2.0)).sqrt()) * 0.5
                    }
                }

                // does not quite reach 1.0; the engine snaps at the end anyway
                Self::CriticallyDamped => (-5.0 * t - 1.0) * (-8.0 * t).exp() + 1.0,
            }
        }
    }
}
