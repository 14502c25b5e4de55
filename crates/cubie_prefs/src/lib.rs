//! Preferences for the cubie move engine.
//!
//! Built-in defaults are embedded as YAML. A user file, if any, is layered on
//! top of them, so it only needs to mention the values it changes.

#![allow(missing_docs)] // field names say it all

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod animation;
mod colors;
mod lattice;
mod rgb;

pub use animation::*;
pub use colors::ColorScheme;
pub use lattice::LatticePreferences;
pub use rgb::Rgb;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub lattice: LatticePreferences,
    pub colors: ColorScheme,
}

/// Preference value that the engine cannot work with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrefsError {
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("position tolerance {tolerance} must be less than half the cubie pitch {pitch}")]
    ToleranceTooLarge { tolerance: f32, pitch: f32 },
}

impl Preferences {
    /// Loads preferences from the built-in defaults and `user_file`. Errors
    /// are returned as-is.
    pub fn try_load(user_file: Option<&Path>) -> eyre::Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = user_file {
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }
        let prefs: Self = config
            .build()
            .and_then(|c| c.try_deserialize())
            .wrap_err("error loading preferences")?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Loads preferences from the built-in defaults and `user_file`. If loading
    /// fails, the error is logged and the defaults are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        Self::try_load(user_file).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e:#}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<(), PrefsError> {
        fn positive(name: &'static str, value: f32) -> Result<(), PrefsError> {
            match value.is_finite() && value > 0.0 {
                true => Ok(()),
                false => Err(PrefsError::NotPositive { name, value }),
            }
        }
        fn non_negative(name: &'static str, value: f32) -> Result<(), PrefsError> {
            match value.is_finite() && value >= 0.0 {
                true => Ok(()),
                false => Err(PrefsError::Negative { name, value }),
            }
        }

        let AnimationPreferences {
            driver: _,
            rotation_speed,
            angle_tolerance,
            twist_duration,
            dynamic_twist_speed: _,
            twist_interpolation: _,
        } = self.animation;
        positive("rotation_speed", rotation_speed)?;
        non_negative("angle_tolerance", angle_tolerance)?;
        // a zero duration is allowed and means "no animation"
        non_negative("twist_duration", twist_duration)?;

        let lattice = &self.lattice;
        positive("cubie_size", lattice.cubie_size)?;
        non_negative("cubie_spacing", lattice.cubie_spacing)?;
        non_negative("position_tolerance", lattice.position_tolerance)?;
        if lattice.position_tolerance * 2.0 >= lattice.pitch() {
            return Err(PrefsError::ToleranceTooLarge {
                tolerance: lattice.position_tolerance,
                pitch: lattice.pitch(),
            });
        }

        Ok(())
    }
}
