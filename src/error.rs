//! # Error Types
//!
//! This module defines all error types for the tonal crate.
//!
//! Every error carries the offending text so callers can report exactly which
//! part of a note, interval, chord or scale name was rejected. Parsing never
//! returns a partially built value: a failure is always one of these variants.
//!
//! ## Error Types
//! - `InvalidNoteFormat` - text matches neither scientific nor Helmholtz spelling
//! - `InvalidIntervalFormat` / `InvalidIntervalQuality` - interval names
//! - `InvalidFrequency` - frequency lookups outside the positive reals
//! - `InvalidChordRoot`, `InvalidExtension`, `InvalidAlteration`, `InvalidToken` - chord symbols
//! - `InvalidScaleName`, `InvalidStep` - table lookups
//! - `NoParallelChord` - parallel requested for a chord that has none
//! - `InvalidConfig` - YAML configuration
//!
//! ## Usage
//! ```rust
//! use tonal::{chord, TonalError};
//!
//! match chord("C7x") {
//!     Ok(c) => println!("{}", c),
//!     Err(TonalError::InvalidAlteration(alt)) => eprintln!("bad alteration: {}", alt),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TonalError {
    /// Note text matches neither the scientific nor the Helmholtz grammar.
    ///
    /// # Example
    /// ```
    /// # use tonal::TonalError;
    /// let err = TonalError::InvalidNoteFormat("k4".to_string());
    /// assert_eq!(err.to_string(), "Invalid note format: 'k4'");
    /// ```
    #[error("Invalid note format: '{0}'")]
    InvalidNoteFormat(String),

    /// Interval text does not match `<quality><number>`.
    #[error("Invalid interval format: '{0}'")]
    InvalidIntervalFormat(String),

    /// Quality does not exist for the interval's type (e.g. `P3`, `M5`).
    ///
    /// # Example
    /// ```
    /// # use tonal::TonalError;
    /// let err = TonalError::InvalidIntervalQuality {
    ///     quality: "P".to_string(),
    ///     number: 3,
    /// };
    /// assert_eq!(err.to_string(), "Invalid interval quality 'P' for a 3");
    /// ```
    #[error("Invalid interval quality '{quality}' for a {number}")]
    InvalidIntervalQuality { quality: String, number: i32 },

    /// Frequency or concert pitch that is not a finite positive number.
    #[error("Invalid frequency: {0}")]
    InvalidFrequency(f64),

    /// Chord symbol does not start with a recognizable root.
    #[error("Invalid chord root: '{0}'")]
    InvalidChordRoot(String),

    /// Extension number that does not land on a stacked third.
    #[error("Invalid interval extension: {0}")]
    InvalidExtension(u32),

    /// Alteration that cannot be applied to the chord.
    #[error("Invalid interval alteration: '{0}'")]
    InvalidAlteration(String),

    /// Unrecognized text inside a chord symbol.
    #[error("Invalid token: '{0}'")]
    InvalidToken(String),

    /// Scale name not present in the scale table.
    #[error("Invalid scale name: '{0}'")]
    InvalidScaleName(String),

    /// Ordinal step name (`third`, `ninth`, ...) not recognized.
    #[error("Invalid step name: '{0}'")]
    InvalidStep(String),

    /// Parallel chords only exist for major and minor triads.
    #[error("Chord '{0}' has no parallel: only major/minor triads do")]
    NoParallelChord(String),

    /// Invalid configuration value or malformed YAML.
    ///
    /// # Example
    /// ```
    /// # use tonal::TonalError;
    /// let err = TonalError::InvalidConfig("concert-pitch must be positive".to_string());
    /// assert_eq!(err.to_string(), "Invalid config: concert-pitch must be positive");
    /// ```
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
