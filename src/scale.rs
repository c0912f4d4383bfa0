//! # Scales
//!
//! A [`Scale`] is a tonic plus an ordered list of intervals within the
//! octave. Named scales come from a fixed table; any interval list can be
//! used through [`Scale::from_intervals`].
//!
//! Degrees are 1-based and wrap by octaves in both directions: in C major,
//! degree 8 is C5 and degree 0 is B3.
//!
//! ## Example
//! ```rust
//! use tonal::{Note, Scale};
//!
//! let scale = Scale::new(Note::parse("A4").unwrap(), "minorpentatonic").unwrap();
//! assert_eq!(scale.simple(), vec!["a", "c", "d", "e", "g"]);
//! assert_eq!(scale.scale_type(), Some("pentatonic"));
//! ```

use crate::error::TonalError;
use crate::interval::{step_number, Interval};
use crate::lattice::OCTAVE;
use crate::note::Note;
use serde::Serialize;
use std::fmt;

const IONIAN: &[&str] = &["P1", "M2", "M3", "P4", "P5", "M6", "M7"];
const AEOLIAN: &[&str] = &["P1", "M2", "m3", "P4", "P5", "m6", "m7"];
const CHROMATIC: &[&str] = &[
    "P1", "m2", "M2", "m3", "M3", "P4", "A4", "P5", "m6", "M6", "m7", "M7",
];
const DOUBLE_HARMONIC: &[&str] = &["P1", "m2", "M3", "P4", "P5", "m6", "M7"];

/// Known scales, alphabetical. Synonyms share an interval list.
const SCALES: &[(&str, &[&str])] = &[
    ("aeolian", AEOLIAN),
    ("blues", &["P1", "m3", "P4", "d5", "P5", "m7"]),
    ("chromatic", CHROMATIC),
    ("dorian", &["P1", "M2", "m3", "P4", "P5", "M6", "m7"]),
    ("doubleharmonic", DOUBLE_HARMONIC),
    ("flamenco", DOUBLE_HARMONIC),
    ("harmonicchromatic", CHROMATIC),
    ("harmonicminor", &["P1", "M2", "m3", "P4", "P5", "m6", "M7"]),
    ("ionian", IONIAN),
    ("locrian", &["P1", "m2", "m3", "P4", "d5", "m6", "m7"]),
    ("lydian", &["P1", "M2", "M3", "A4", "P5", "M6", "M7"]),
    ("major", IONIAN),
    ("majorpentatonic", &["P1", "M2", "M3", "P5", "M6"]),
    ("melodicminor", &["P1", "M2", "m3", "P4", "P5", "M6", "M7"]),
    ("minor", AEOLIAN),
    ("minorpentatonic", &["P1", "m3", "P4", "P5", "m7"]),
    ("mixolydian", &["P1", "M2", "M3", "P4", "P5", "M6", "m7"]),
    ("phrygian", &["P1", "m2", "m3", "P4", "P5", "m6", "m7"]),
    ("wholetone", &["P1", "M2", "M3", "A4", "A5", "A6"]),
];

const TYPE_NAMES: [&str; 7] = [
    "ditonic",
    "tritonic",
    "tetratonic",
    "pentatonic",
    "hexatonic",
    "heptatonic",
    "octatonic",
];

/// Names of every scale in the table.
pub fn scale_names() -> impl Iterator<Item = &'static str> {
    SCALES.iter().map(|(name, _)| *name)
}

fn parse_steps(steps: &[&str]) -> Result<Vec<Interval>, TonalError> {
    steps.iter().map(|step| Interval::parse(step)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    name: Option<&'static str>,
    tonic: Note,
    intervals: Vec<Interval>,
}

impl Scale {
    /// Named scale on `tonic`; the name is matched case-insensitively.
    pub fn new(tonic: Note, name: &str) -> Result<Self, TonalError> {
        let lower = name.to_lowercase();
        let (name, steps) = SCALES
            .iter()
            .find(|(known, _)| *known == lower)
            .ok_or_else(|| TonalError::InvalidScaleName(name.to_string()))?;
        Ok(Self {
            name: Some(*name),
            tonic,
            intervals: parse_steps(steps)?,
        })
    }

    /// Scale from an explicit interval list. The name is recovered when the
    /// list matches a table entry.
    pub fn from_intervals(tonic: Note, intervals: Vec<Interval>) -> Self {
        let name = SCALES
            .iter()
            .find(|(_, steps)| parse_steps(steps).map_or(false, |known| known == intervals))
            .map(|(name, _)| *name);
        Self {
            name,
            tonic,
            intervals,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn tonic(&self) -> Note {
        self.tonic
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn notes(&self) -> Vec<Note> {
        self.intervals
            .iter()
            .map(|interval| self.tonic.transposed(interval))
            .collect()
    }

    /// Pitch names without octaves.
    pub fn simple(&self) -> Vec<String> {
        self.notes().iter().map(Note::pitch_name).collect()
    }

    /// `ditonic` through `octatonic`; `None` for larger scales.
    pub fn scale_type(&self) -> Option<&'static str> {
        let index = self.intervals.len().checked_sub(2)?;
        TYPE_NAMES.get(index).copied()
    }

    /// Note at a 1-based degree. Degrees past either end continue into the
    /// neighbouring octaves.
    pub fn get(&self, degree: i32) -> Option<Note> {
        let len = self.intervals.len() as i32;
        if len == 0 {
            return None;
        }
        let index = (degree - 1).rem_euclid(len) as usize;
        let octaves = (degree - 1).div_euclid(len);
        let step = self.tonic.transposed(&self.intervals[index]);
        Some(step.transposed(&Interval::new(OCTAVE * octaves)))
    }

    /// Note at an ordinal step name such as `"third"` or `"ninth"`.
    pub fn get_step(&self, step: &str) -> Result<Option<Note>, TonalError> {
        let degree = step_number(step).ok_or_else(|| TonalError::InvalidStep(step.to_string()))?;
        Ok(self.get(degree))
    }

    /// The same scale on a transposed tonic.
    pub fn transposed(&self, interval: &Interval) -> Scale {
        Scale {
            tonic: self.tonic.transposed(interval),
            ..self.clone()
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tonic.pitch_name())?;
        if let Some(name) = self.name {
            write!(f, " {}", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c4() -> Note {
        Note::parse("C4").unwrap()
    }

    #[test]
    fn test_every_table_entry_parses() {
        for name in scale_names() {
            let scale = Scale::new(c4(), name).unwrap();
            assert_eq!(scale.intervals()[0], Interval::parse("P1").unwrap(), "{}", name);
        }
    }

    #[test]
    fn test_major_scale() {
        let scale = Scale::new(c4(), "major").unwrap();
        assert_eq!(scale.simple(), vec!["c", "d", "e", "f", "g", "a", "b"]);
        assert_eq!(scale.scale_type(), Some("heptatonic"));
        assert_eq!(scale.to_string(), "c major");
    }

    #[test]
    fn test_scale_name_case_insensitive() {
        let scale = Scale::new(c4(), "Dorian").unwrap();
        assert_eq!(scale.name(), Some("dorian"));
    }

    #[test]
    fn test_invalid_scale_name() {
        assert_eq!(
            Scale::new(c4(), "bebop"),
            Err(TonalError::InvalidScaleName("bebop".to_string()))
        );
    }

    #[test]
    fn test_scale_types() {
        assert_eq!(Scale::new(c4(), "blues").unwrap().scale_type(), Some("hexatonic"));
        assert_eq!(Scale::new(c4(), "wholetone").unwrap().scale_type(), Some("hexatonic"));
        assert_eq!(Scale::new(c4(), "chromatic").unwrap().scale_type(), None);
        let dyad = Scale::from_intervals(
            c4(),
            vec![Interval::parse("P1").unwrap(), Interval::parse("P5").unwrap()],
        );
        assert_eq!(dyad.scale_type(), Some("ditonic"));
        assert_eq!(dyad.name(), None);
    }

    #[test]
    fn test_get_wraps_octaves() {
        let scale = Scale::new(c4(), "major").unwrap();
        assert_eq!(scale.get(1).unwrap().scientific(), "C4");
        assert_eq!(scale.get(3).unwrap().scientific(), "E4");
        assert_eq!(scale.get(8).unwrap().scientific(), "C5");
        assert_eq!(scale.get(9).unwrap().scientific(), "D5");
        assert_eq!(scale.get(0).unwrap().scientific(), "B3");
        assert_eq!(scale.get(-6).unwrap().scientific(), "C3");
    }

    #[test]
    fn test_get_step() {
        let scale = Scale::new(c4(), "minor").unwrap();
        assert_eq!(scale.get_step("third").unwrap().unwrap().scientific(), "Eb4");
        assert_eq!(scale.get_step("ninth").unwrap().unwrap().scientific(), "D5");
        assert!(matches!(scale.get_step("nope"), Err(TonalError::InvalidStep(_))));
    }

    #[test]
    fn test_from_intervals_recovers_name() {
        let intervals = Scale::new(c4(), "mixolydian").unwrap().intervals().to_vec();
        let scale = Scale::from_intervals(Note::parse("G3").unwrap(), intervals);
        assert_eq!(scale.name(), Some("mixolydian"));
        // Synonyms resolve to the first table entry
        let minor = Scale::new(c4(), "minor").unwrap().intervals().to_vec();
        assert_eq!(Scale::from_intervals(c4(), minor).name(), Some("aeolian"));
    }

    #[test]
    fn test_transposed_scale() {
        let scale = Scale::new(c4(), "majorpentatonic").unwrap();
        let d = scale.transposed(&Interval::parse("M2").unwrap());
        assert_eq!(d.simple(), vec!["d", "e", "f#", "a", "b"]);
        assert_eq!(d.name(), Some("majorpentatonic"));
    }

    #[test]
    fn test_scale_degree_of_note() {
        let scale = Scale::new(c4(), "major").unwrap();
        assert_eq!(Note::parse("E4").unwrap().scale_degree(&scale), 3);
        assert_eq!(Note::parse("F#4").unwrap().scale_degree(&scale), 0);
        assert_eq!(Note::parse("C5").unwrap().scale_degree(&scale), 1);
        assert_eq!(Note::parse("B3").unwrap().scale_degree(&scale), 7);
    }
}
