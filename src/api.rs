//! # Public API
//!
//! String-in entry points for the tonal library. Each function parses its
//! input and returns the typed value, or the [`TonalError`] naming the part
//! that was rejected.
//!
//! ## Parsing Functions
//!
//! - [`note()`] - Scientific or Helmholtz note name
//! - [`interval()`] - Interval name such as `M3` or `P-5`
//! - [`interval_from_names()`] / [`interval_between_notes()`] - Distance between two notes
//! - [`chord()`] - Chord symbol with the root in octave 4
//! - [`chord_in_octave()`] / [`chord_with_config()`] - Chord symbol with a chosen root octave
//! - [`scale()`] - Named scale on a tonic
//! - [`note_frequency()`] - Frequency of a note under a configured concert pitch
//!
//! ## Typical Usage
//!
//! ```rust
//! use tonal::{chord, note, interval};
//!
//! let c = note("C4")?;
//! let e = c.transposed(&interval("M3")?);
//! assert_eq!(e.scientific(), "E4");
//!
//! let dm7 = chord("Dm7")?;
//! assert_eq!(dm7.simple(), vec!["d", "f", "a", "c"]);
//! # Ok::<(), tonal::TonalError>(())
//! ```
//!
//! ## Configured Usage
//!
//! ```rust
//! use tonal::{chord_with_config, note_frequency, Config};
//!
//! let config = Config::from_yaml("concert-pitch: 432\nchord-octave: 3")?;
//! assert_eq!(note_frequency("A4", &config)?, 432.0);
//! assert_eq!(chord_with_config("G", &config)?.root().scientific(), "G3");
//! # Ok::<(), tonal::TonalError>(())
//! ```

use crate::{Chord, Config, Interval, Note, Scale, TonalError};

/// Parse a note in scientific (`C#4`) or Helmholtz (`c#'`) notation.
///
/// # Example
/// ```rust
/// use tonal::note;
///
/// assert_eq!(note("c'")?, note("C4")?);
/// assert_eq!(note("Bb3")?.midi(), 58);
/// # Ok::<(), tonal::TonalError>(())
/// ```
///
/// # Errors
/// Returns [`TonalError::InvalidNoteFormat`] when neither notation matches.
pub fn note(name: &str) -> Result<Note, TonalError> {
    Note::parse(name)
}

/// Parse an interval name: quality (`dd d m M P A AA`) and signed number.
///
/// # Example
/// ```rust
/// use tonal::interval;
///
/// assert_eq!(interval("m3")?.semitones(), 3);
/// assert_eq!(interval("P-5")?.semitones(), -7);
/// # Ok::<(), tonal::TonalError>(())
/// ```
///
/// # Errors
/// [`TonalError::InvalidIntervalFormat`] for malformed text,
/// [`TonalError::InvalidIntervalQuality`] for qualities the number does not
/// take (`P3`, `M5`).
pub fn interval(name: &str) -> Result<Interval, TonalError> {
    Interval::parse(name)
}

/// Interval from one named note to another.
///
/// # Example
/// ```rust
/// use tonal::interval_from_names;
///
/// assert_eq!(interval_from_names("C4", "G4")?.to_string(), "P5");
/// assert_eq!(interval_from_names("C4", "A3")?.to_string(), "m-3");
/// # Ok::<(), tonal::TonalError>(())
/// ```
pub fn interval_from_names(from: &str, to: &str) -> Result<Interval, TonalError> {
    Ok(Interval::between(&Note::parse(from)?, &Note::parse(to)?))
}

/// Interval between two parsed notes.
pub fn interval_between_notes(from: &Note, to: &Note) -> Interval {
    Interval::between(from, to)
}

/// Parse a chord symbol with its root in octave 4.
///
/// # Supported Symbols
/// - **Qualities**: `m`, `mi`, `min`, `-`, `M`, `ma`, `maj`, `+`, `aug`, `dim`, `o`, `ø`, `dom`, `5`
/// - **Extensions**: `6`, `7`, `9`, `11`, `13`
/// - **Alterations**: `b5`, `#9`, `b13`, `sus2`, `sus4`, `add9`, `maj7`, `M7`
/// - **Bass**: `/E`, with `/9` read as a six-nine chord
///
/// # Example
/// ```rust
/// use tonal::chord;
///
/// assert_eq!(chord("C7b5")?.simple(), vec!["c", "e", "gb", "bb"]);
/// assert_eq!(chord("C/E")?.simple(), vec!["e", "c", "g"]);
/// # Ok::<(), tonal::TonalError>(())
/// ```
///
/// # Errors
/// [`TonalError::InvalidChordRoot`] when no root letter leads the symbol;
/// [`TonalError::InvalidExtension`], [`TonalError::InvalidAlteration`] or
/// [`TonalError::InvalidToken`] for suffixes the grammar rejects.
pub fn chord(name: &str) -> Result<Chord, TonalError> {
    Chord::parse(name)
}

/// Parse a chord symbol with its root in `octave`.
pub fn chord_in_octave(name: &str, octave: i32) -> Result<Chord, TonalError> {
    Chord::parse_in_octave(name, octave)
}

/// Parse a chord symbol with its root in the configured octave.
pub fn chord_with_config(name: &str, config: &Config) -> Result<Chord, TonalError> {
    Chord::parse_in_octave(name, config.chord_octave)
}

/// Build a named scale on a tonic note.
///
/// # Example
/// ```rust
/// use tonal::scale;
///
/// let d_dorian = scale("D4", "dorian")?;
/// assert_eq!(d_dorian.simple(), vec!["d", "e", "f", "g", "a", "b", "c"]);
/// # Ok::<(), tonal::TonalError>(())
/// ```
///
/// # Errors
/// [`TonalError::InvalidNoteFormat`] for the tonic,
/// [`TonalError::InvalidScaleName`] for unknown scale names.
pub fn scale(tonic: &str, name: &str) -> Result<Scale, TonalError> {
    Scale::new(Note::parse(tonic)?, name)
}

/// Frequency in Hz of a named note under the configured concert pitch.
pub fn note_frequency(name: &str, config: &Config) -> Result<f64, TonalError> {
    Ok(Note::parse(name)?.frequency(config.concert_pitch))
}
