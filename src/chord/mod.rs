//! # Chords
//!
//! A [`Chord`] is a root note plus the intervals named by its symbol.
//!
//! ## Pipeline
//! ```text
//! "F#m(11b5b9)/A"
//!   └── root          F#4 (octave from Config, default 4)
//!   └── cleanup       "m11b5b9/A"   parentheses, commas, whitespace dropped
//!   └── slash         suffix "m11b5b9", bass "A"
//!   └── parser        [P1, m3, d5, m7, m9, P11]
//!   └── voicing       bass first, then every tone not equal to the bass
//! ```
//!
//! `/9` is not a bass: `C6/9` is read as `C6add9`.
//!
//! ## Voicing
//! `intervals` always holds the chord as spelled. `voicing` is the display
//! order used by [`Chord::notes`]; it starts out equal to `intervals` and is
//! rearranged for slash chords or by [`Chord::with_voicing`].
//!
//! ## Example
//! ```rust
//! use tonal::{Chord, ChordQuality};
//!
//! let chord = Chord::parse("Emaj7").unwrap();
//! assert_eq!(chord.simple(), vec!["e", "g#", "b", "d#"]);
//! assert_eq!(chord.quality(), Some(ChordQuality::Major));
//! ```

mod lexer;
mod parser;
pub(crate) mod symbols;


pub use lexer::{AltLexer, AltToken};

use crate::error::TonalError;
use crate::interval::{step_number, Base, Direction, Interval};
use crate::note::{pitch_coord, split_pitch, Note};
use parser::parse_suffix;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use symbols::*;

/// Octave of the root when a chord is parsed without one.
pub const DEFAULT_CHORD_OCTAVE: i32 = 4;

/// Harmonic quality derived from a chord's third, fifth and seventh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordQuality {
    Major,
    Minor,
    Augmented,
    Diminished,
    Dominant,
    HalfDiminished,
}

impl ChordQuality {
    pub fn name(&self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Augmented => "augmented",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Dominant => "dominant",
            ChordQuality::HalfDiminished => "half-diminished",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classification by note count and stacking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordType {
    Dyad,
    Triad,
    Trichord,
    Tetrad,
    Unknown,
}

impl ChordType {
    pub fn name(&self) -> &'static str {
        match self {
            ChordType::Dyad => "dyad",
            ChordType::Triad => "triad",
            ChordType::Trichord => "trichord",
            ChordType::Tetrad => "tetrad",
            ChordType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A parsed chord symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    name: String,
    symbol: String,
    root: Note,
    intervals: Vec<Interval>,
    voicing: Vec<Interval>,
}

/// Upper-case letter plus accidental, e.g. `F#`, `Bb`.
fn root_name(root: &Note) -> String {
    format!(
        "{}{}",
        root.letter().as_char().to_ascii_uppercase(),
        root.accidental()
    )
}

/// Voicing for `root/bass`: the bass dropped below the root, then every
/// chord tone whose pitch class differs from it. The bass is a bare pitch
/// name without octave.
fn slash_voicing(root: &Note, bass: &str, intervals: &[Interval]) -> Result<Vec<Interval>, TonalError> {
    let bass_coord = split_pitch(bass)
        .filter(|(_, _, _, rest)| rest.is_empty())
        .and_then(|(letter, _, accidental, _)| {
            pitch_coord(letter, accidental, root.octave().saturating_add(1))
        })
        .ok_or_else(|| {
            log::debug!("rejected slash bass '{}'", bass);
            TonalError::InvalidToken(bass.to_string())
        })?;
    let bass_note = Note::new(bass_coord);
    let bass_interval = Interval::between(root, &bass_note);
    let bass_simple = bass_interval.simple(false);

    let mut voicing = vec![bass_interval.invert().with_direction(Direction::Down)];
    voicing.extend(
        intervals
            .iter()
            .filter(|interval| !interval.simple(false).equal(&bass_simple))
            .copied(),
    );
    Ok(voicing)
}

impl Chord {
    /// Parse a full chord name with the root in octave 4.
    pub fn parse(name: &str) -> Result<Self, TonalError> {
        Self::parse_in_octave(name, DEFAULT_CHORD_OCTAVE)
    }

    /// Parse a full chord name, placing the root in `octave`.
    pub fn parse_in_octave(name: &str, octave: i32) -> Result<Self, TonalError> {
        let (letter, _, accidental, symbol) = split_pitch(name).ok_or_else(|| {
            log::debug!("rejected chord '{}': no root", name);
            TonalError::InvalidChordRoot(name.to_string())
        })?;
        let root = pitch_coord(letter, accidental, octave)
            .map(Note::new)
            .ok_or_else(|| TonalError::InvalidChordRoot(name.to_string()))?;
        Self::from_root(root, symbol)
    }

    /// Build a chord on an existing root from a symbol such as `m7b5` or `7/E`.
    pub fn from_root(root: Note, symbol: &str) -> Result<Self, TonalError> {
        let cleaned: String = symbol
            .chars()
            .filter(|c| !matches!(c, '(' | ')' | ',') && !c.is_whitespace())
            .collect();

        let mut parts = cleaned.split('/');
        let suffix = parts.next().unwrap_or_default();
        let bass = parts.next();
        if parts.next().is_some() {
            return Err(TonalError::InvalidToken(symbol.to_string()));
        }

        let (suffix, bass) = match bass {
            Some("9") => (format!("{}add9", suffix), None),
            other => (suffix.to_string(), other),
        };

        let intervals = parse_suffix(&suffix)?;
        let voicing = match bass {
            Some(bass) => slash_voicing(&root, bass, &intervals)?,
            None => intervals.clone(),
        };

        Ok(Self {
            name: format!("{}{}", root_name(&root), symbol),
            symbol: symbol.to_string(),
            root,
            intervals,
            voicing,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text after the root, as given.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn voicing(&self) -> &[Interval] {
        &self.voicing
    }

    /// Notes in voicing order.
    pub fn notes(&self) -> Vec<Note> {
        self.voicing
            .iter()
            .map(|interval| self.root.transposed(interval))
            .collect()
    }

    /// Pitch names in voicing order, e.g. `["c", "e", "g"]`.
    pub fn simple(&self) -> Vec<String> {
        self.notes().iter().map(Note::pitch_name).collect()
    }

    /// Lowest note of the voicing.
    pub fn bass(&self) -> Note {
        self.voicing
            .first()
            .map_or(self.root, |interval| self.root.transposed(interval))
    }

    pub fn with_voicing(mut self, voicing: Vec<Interval>) -> Self {
        self.voicing = voicing;
        self
    }

    pub fn set_voicing(&mut self, voicing: Vec<Interval>) {
        self.voicing = voicing;
    }

    pub fn reset_voicing(&mut self) {
        self.voicing = self.intervals.clone();
    }

    /// The chord tone for an ordinal step name (`"third"`, `"ninth"`...).
    ///
    /// `Ok(None)` when the chord has no such tone.
    pub fn get(&self, step: &str) -> Result<Option<Note>, TonalError> {
        let number = step_number(step).ok_or_else(|| TonalError::InvalidStep(step.to_string()))?;
        Ok(self
            .intervals
            .iter()
            .find(|interval| interval.number() == number)
            .map(|interval| self.root.transposed(interval)))
    }

    /// Last interval with this number, reduced to an upward simple interval.
    fn degree(&self, number: i32) -> Option<Interval> {
        self.intervals
            .iter()
            .filter(|interval| interval.number() == number)
            .last()
            .map(|interval| interval.simple(true))
    }

    pub fn quality(&self) -> Option<ChordQuality> {
        let third = self.degree(3)?;
        let fifth = self.degree(5);
        let seventh = self.degree(7);

        if third == MAJOR_THIRD {
            if fifth == Some(AUGMENTED_FIFTH) {
                Some(ChordQuality::Augmented)
            } else if fifth == Some(PERFECT_FIFTH) && seventh == Some(MINOR_SEVENTH) {
                Some(ChordQuality::Dominant)
            } else {
                Some(ChordQuality::Major)
            }
        } else if third == MINOR_THIRD {
            if fifth == Some(DIMINISHED_FIFTH) {
                if seventh == Some(MINOR_SEVENTH) {
                    Some(ChordQuality::HalfDiminished)
                } else {
                    Some(ChordQuality::Diminished)
                }
            } else {
                Some(ChordQuality::Minor)
            }
        } else {
            None
        }
    }

    /// True when every wanted base is present, matching each interval by its
    /// base or by the base of its inversion.
    fn stacks(&self, wanted: &[Base]) -> bool {
        let mut found = vec![false; wanted.len()];
        for interval in &self.intervals {
            let direct = wanted.iter().position(|&b| b == interval.base());
            let inverted = wanted.iter().position(|&b| b == interval.invert().base());
            if let Some(i) = direct.or(inverted) {
                found[i] = true;
            }
        }
        found.into_iter().all(|f| f)
    }

    pub fn chord_type(&self) -> ChordType {
        match self.intervals.len() {
            2 => ChordType::Dyad,
            3 if self.stacks(&[Base::Unison, Base::Third, Base::Fifth]) => ChordType::Triad,
            3 => ChordType::Trichord,
            4 if self.stacks(&[Base::Unison, Base::Third, Base::Fifth, Base::Seventh]) => {
                ChordType::Tetrad
            }
            _ => ChordType::Unknown,
        }
    }

    /// Chord on the fifth above the root, with `additional` as its symbol.
    pub fn dominant(&self, additional: &str) -> Result<Chord, TonalError> {
        Chord::from_root(self.root.transposed(&PERFECT_FIFTH), additional)
    }

    /// Chord on the fourth above the root, with `additional` as its symbol.
    pub fn subdominant(&self, additional: &str) -> Result<Chord, TonalError> {
        Chord::from_root(self.root.transposed(&PERFECT_FOURTH), additional)
    }

    /// Relative minor of a major triad, or relative major of a minor triad.
    pub fn parallel(&self, additional: &str) -> Result<Chord, TonalError> {
        let no_parallel = || TonalError::NoParallelChord(self.name.clone());
        if self.chord_type() != ChordType::Triad {
            return Err(no_parallel());
        }
        match self.quality() {
            Some(ChordQuality::Major) => Chord::from_root(
                self.root
                    .transposed(&MINOR_THIRD.with_direction(Direction::Down)),
                &format!("m{}", additional),
            ),
            Some(ChordQuality::Minor) => {
                Chord::from_root(self.root.transposed(&MINOR_THIRD), additional)
            }
            _ => Err(no_parallel()),
        }
    }

    /// The same chord on a transposed root.
    pub fn transposed(&self, interval: &Interval) -> Chord {
        let root = self.root.transposed(interval);
        Chord {
            name: format!("{}{}", root_name(&root), self.symbol),
            root,
            ..self.clone()
        }
    }

    /// In-place form of [`Chord::transposed`].
    pub fn transpose(&mut self, interval: &Interval) {
        *self = self.transposed(interval);
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for Chord {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s)
    }
}
