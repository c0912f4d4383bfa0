//! # Configuration
//!
//! Tuning and voicing defaults, optionally loaded from YAML:
//!
//! ```yaml
//! concert-pitch: 432
//! chord-octave: 3
//! ```
//!
//! Missing keys keep their defaults (A4 = 440 Hz, chord roots in octave 4).

use crate::chord::DEFAULT_CHORD_OCTAVE;
use crate::error::TonalError;
use crate::lattice::MAX_OCTAVE;
use crate::note::DEFAULT_CONCERT_PITCH;
use serde::{Deserialize, Serialize};

/// Raw config for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub concert_pitch: Option<f64>,
    pub chord_octave: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Frequency of A4 in Hz
    pub concert_pitch: f64,
    /// Octave of chord roots parsed without one
    pub chord_octave: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concert_pitch: DEFAULT_CONCERT_PITCH,
            chord_octave: DEFAULT_CHORD_OCTAVE,
        }
    }
}

impl Config {
    /// Parse YAML config content. Empty input yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, TonalError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| TonalError::InvalidConfig(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, TonalError> {
        let defaults = Self::default();

        let concert_pitch = raw.concert_pitch.unwrap_or(defaults.concert_pitch);
        if !concert_pitch.is_finite() || concert_pitch <= 0.0 {
            return Err(TonalError::InvalidConfig(format!(
                "concert-pitch must be a positive frequency, got {}",
                concert_pitch
            )));
        }

        let chord_octave = raw.chord_octave.unwrap_or(defaults.chord_octave);
        if chord_octave.abs() > MAX_OCTAVE {
            return Err(TonalError::InvalidConfig(format!(
                "chord-octave must be within ±{}, got {}",
                MAX_OCTAVE, chord_octave
            )));
        }

        let config = Self {
            concert_pitch,
            chord_octave,
        };
        log::debug!("loaded config: {:?}", config);
        Ok(config)
    }
}
