//! # Notes
//!
//! A [`Note`] is a lattice coordinate (measured from concert A4) plus a
//! duration. This module converts between coordinates and the two written
//! pitch spellings, and projects coordinates onto key numbers, MIDI numbers,
//! frequencies and pitch classes.
//!
//! ## Spellings
//! - **Scientific**: `letter [accidental] octave`, e.g. `C4`, `f#3`, `Bb-1`
//! - **Helmholtz**: `letter [accidental] [marks]`, where lower-case letters
//!   start at octave 3 and each `'` raises one octave, upper-case letters start
//!   at octave 2 and each `,` lowers one octave: `c'` = C4, `C,` = C1
//!
//! Accidentals are `bb`, `b`, `#` and `x` (double sharp); `h` is accepted as
//! the German name for B.
//!
//! ## Decoding
//! The accidental count of a coordinate depends only on its fifth component:
//! naturals occupy seven consecutive fifths (F C G D A E B), and every
//! further seven fifths add one sharp. Letter and octave follow from that.
//!
//! ## Example
//! ```rust
//! use tonal::{Interval, Note};
//!
//! let c4 = Note::parse("C4").unwrap();
//! let e4 = c4.transposed(&Interval::parse("M3").unwrap());
//! assert_eq!(e4.scientific(), "E4");
//! assert_eq!(c4.midi(), 60);
//! ```

use crate::error::TonalError;
use crate::interval::{Base, Direction, Interval};
use crate::lattice::{Coord, A4, MAX_OCTAVE, SHARP};
use crate::scale::Scale;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Concert pitch in Hz used when none is configured.
pub const DEFAULT_CONCERT_PITCH: f64 = 440.0;

/// Piano key number of A4.
const A4_KEY: i32 = 49;

/// MIDI note number = piano key number + this offset.
const MIDI_OFFSET: i32 = 20;

/// Note letters A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

/// Letters in circle-of-fifths order.
const FIFTHS: [Letter; 7] = [
    Letter::F,
    Letter::C,
    Letter::G,
    Letter::D,
    Letter::A,
    Letter::E,
    Letter::B,
];

const ACCIDENTALS: [&str; 5] = ["bb", "b", "", "#", "x"];

impl Letter {
    /// Coordinate of the natural note in octave 0, measured from C0.
    pub fn coord(&self) -> Coord {
        match self {
            Letter::C => Coord::new(0, 0),
            Letter::D => Coord::new(-1, 2),
            Letter::E => Coord::new(-2, 4),
            Letter::F => Coord::new(1, -1),
            Letter::G => Coord::new(0, 1),
            Letter::A => Coord::new(-1, 3),
            Letter::B => Coord::new(-2, 5),
        }
    }

    /// Case-insensitive; `h` is B.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(Letter::C),
            'd' => Some(Letter::D),
            'e' => Some(Letter::E),
            'f' => Some(Letter::F),
            'g' => Some(Letter::G),
            'a' => Some(Letter::A),
            'b' | 'h' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Letter::C => 'c',
            Letter::D => 'd',
            Letter::E => 'e',
            Letter::F => 'f',
            Letter::G => 'g',
            Letter::A => 'a',
            Letter::B => 'b',
        }
    }
}

/// Note length as a denominator of the whole note, plus augmentation dots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duration {
    pub value: u32,
    pub dots: u32,
}

impl Default for Duration {
    fn default() -> Self {
        Self { value: 4, dots: 0 }
    }
}

impl Duration {
    pub fn new(value: u32, dots: u32) -> Self {
        Self { value, dots }
    }

    pub fn name(&self) -> Option<&'static str> {
        match self.value {
            1 => Some("whole"),
            2 => Some("half"),
            4 => Some("quarter"),
            8 => Some("eighth"),
            16 => Some("sixteenth"),
            32 => Some("thirty-second"),
            64 => Some("sixty-fourth"),
            128 => Some("hundred-twenty-eighth"),
            _ => None,
        }
    }
}

/// Result of snapping a frequency to the nearest equal-tempered note
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyMatch {
    pub note: Note,
    /// Deviation of the input frequency from the note, in cents
    pub cents: f64,
}

/// A pitch on the lattice with a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Note {
    coord: Coord,
    duration: Duration,
}

/// Split a leading accidental off `text`: returns its value (-2..=2) and the rest.
fn split_accidental(text: &str) -> (i32, &str) {
    let bytes = text.as_bytes();
    let lower = |i: usize| bytes.get(i).map(|b| b.to_ascii_lowercase());
    match (lower(0), lower(1)) {
        (Some(b'x'), _) => (2, &text[1..]),
        (Some(b'#'), _) => (1, &text[1..]),
        (Some(b'b'), Some(b'b')) => (-2, &text[2..]),
        (Some(b'b'), _) => (-1, &text[1..]),
        _ => (0, text),
    }
}

/// Split `letter [accidental]` off the front of `text`.
///
/// Returns the letter, whether it was written in lower case, the accidental
/// value and the remaining text.
pub(crate) fn split_pitch(text: &str) -> Option<(Letter, bool, i32, &str)> {
    let first = text.chars().next()?;
    let letter = Letter::from_char(first)?;
    let (accidental, rest) = split_accidental(&text[first.len_utf8()..]);
    Some((letter, first.is_ascii_lowercase(), accidental, rest))
}

/// Octave of a scientific suffix: `-?\d+`
fn scientific_octave(rest: &str) -> Option<i32> {
    let digits = rest.strip_prefix('-').unwrap_or(rest);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

/// Octave of a Helmholtz suffix: apostrophes after lower case, commas after upper case
fn helmholtz_octave(lower: bool, rest: &str) -> Option<i32> {
    let marks = i32::try_from(rest.chars().count()).ok()?;
    if rest.is_empty() {
        Some(if lower { 3 } else { 2 })
    } else if lower && rest.chars().all(|c| c == '\'') {
        Some(3 + marks)
    } else if !lower && rest.chars().all(|c| c == ',') {
        Some(2 - marks)
    } else {
        None
    }
}

/// Lattice coordinate of a spelled pitch, or `None` past [`MAX_OCTAVE`].
pub(crate) fn pitch_coord(letter: Letter, accidental: i32, octave: i32) -> Option<Coord> {
    if octave.abs() > MAX_OCTAVE {
        return None;
    }
    Some(letter.coord() + Coord::new(octave, 0) + SHARP * accidental - A4)
}

impl Note {
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            duration: Duration::default(),
        }
    }

    pub fn with_duration(self, duration: Duration) -> Self {
        Self { duration, ..self }
    }

    /// Parse scientific (`C#4`) or Helmholtz (`c#'`) spelling.
    pub fn parse(text: &str) -> Result<Self, TonalError> {
        let (letter, lower, accidental, rest) = split_pitch(text).ok_or_else(|| {
            log::debug!("rejected note '{}': no letter", text);
            TonalError::InvalidNoteFormat(text.to_string())
        })?;

        let coord = scientific_octave(rest)
            .or_else(|| helmholtz_octave(lower, rest))
            .and_then(|octave| pitch_coord(letter, accidental, octave))
            .ok_or_else(|| {
                log::debug!("rejected note '{}': bad octave '{}'", text, rest);
                TonalError::InvalidNoteFormat(text.to_string())
            })?;

        Ok(Self::new(coord))
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Number of sharps (positive) or flats (negative).
    pub fn accidental_value(&self) -> i32 {
        (2 * (self.coord.f + A4.f - 2) + 7).div_euclid(14)
    }

    pub fn accidental(&self) -> String {
        let value = self.accidental_value();
        match value {
            -2..=2 => ACCIDENTALS[(value + 2) as usize].to_string(),
            v if v > 2 => {
                let doubles = "x".repeat((v / 2) as usize);
                if v % 2 == 1 {
                    format!("#{}", doubles)
                } else {
                    doubles
                }
            }
            v => "b".repeat(v.unsigned_abs() as usize),
        }
    }

    pub fn letter(&self) -> Letter {
        let index = self.coord.f + A4.f - 7 * self.accidental_value() + 1;
        FIFTHS[index.rem_euclid(7) as usize]
    }

    pub fn octave(&self) -> i32 {
        self.coord.o + A4.o - self.letter().coord().o + self.accidental_value() * 4
    }

    /// Lower-case name with accidental, no octave: `f#`, `bb`.
    pub fn pitch_name(&self) -> String {
        format!("{}{}", self.letter().as_char(), self.accidental())
    }

    /// Scientific spelling, e.g. `F#4`.
    pub fn scientific(&self) -> String {
        format!(
            "{}{}{}",
            self.letter().as_char().to_ascii_uppercase(),
            self.accidental(),
            self.octave()
        )
    }

    /// Helmholtz spelling, e.g. `f#'` for F#4 or `C,` for C1.
    pub fn helmholtz(&self) -> String {
        let octave = self.octave();
        let name = self.pitch_name();
        if octave < 3 {
            let marks = if octave < 2 { (2 - octave) as usize } else { 0 };
            let mut upper = name;
            upper[..1].make_ascii_uppercase();
            format!("{}{}", upper, ",".repeat(marks))
        } else {
            format!("{}{}", name, "'".repeat((octave - 3) as usize))
        }
    }

    /// Piano key number (A4 = 49), or the white-key ordinal when `white_only`.
    pub fn key(&self, white_only: bool) -> i32 {
        if white_only {
            self.coord.o * 7 + self.coord.f * 4 + 29
        } else {
            self.coord.o * 12 + self.coord.f * 7 + A4_KEY
        }
    }

    pub fn midi(&self) -> i32 {
        self.key(false) + MIDI_OFFSET
    }

    pub fn frequency(&self, concert_pitch: f64) -> f64 {
        concert_pitch * 2f64.powf(self.coord.semitones() as f64 / 12.0)
    }

    /// Pitch class counted from C (C = 0, A = 9), not from the A4 origin.
    pub fn pitch_class(&self) -> i32 {
        (self.coord.semitones() - 3).rem_euclid(12)
    }

    pub fn from_key(key: i32) -> Self {
        let octave = (key - 4).div_euclid(12);
        let distance = key - octave * 12 - 4;
        // Half-up rounding of distance / 2 picks the natural at or just below the key
        let letter = FIFTHS[((2 * (distance + 1).div_euclid(2) + 1) % 7) as usize];
        let natural = letter.coord() - A4 + Coord::new(octave + 1, 0);
        let diff = (key - A4_KEY) - natural.semitones();
        Self::new(natural + SHARP * diff)
    }

    pub fn from_midi(midi: i32) -> Self {
        Self::from_key(midi - MIDI_OFFSET)
    }

    /// Nearest equal-tempered note to `frequency`, with the remaining deviation in cents.
    ///
    /// # Errors
    /// [`TonalError::InvalidFrequency`] when either frequency is not finite and
    /// positive, or their ratio leaves the representable range.
    pub fn from_frequency(frequency: f64, concert_pitch: f64) -> Result<FrequencyMatch, TonalError> {
        for value in [frequency, concert_pitch] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TonalError::InvalidFrequency(value));
            }
        }
        let ratio = frequency / concert_pitch;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(TonalError::InvalidFrequency(frequency));
        }

        let key = (A4_KEY as f64 + 12.0 * ratio.log2()).round() as i32;
        let exact = concert_pitch * 2f64.powf((key - A4_KEY) as f64 / 12.0);
        let cents = 1200.0 * (frequency / exact).log2();
        Ok(FrequencyMatch {
            note: Self::from_key(key),
            cents,
        })
    }

    /// Differently spelled notes sounding the same pitch.
    ///
    /// With `one_accidental` only spellings reachable within a single
    /// accidental are kept.
    pub fn enharmonics(&self, one_accidental: bool) -> Vec<Note> {
        let key = self.key(false);
        let limit = if one_accidental { 2 } else { 3 };
        let third = Base::Third.coord();
        let second = Base::Second.coord();

        [third, second, -second, -third]
            .iter()
            .filter_map(|&offset| {
                let candidate = Note::new(self.coord + offset);
                let accidental = candidate.accidental_value();
                let diff = key - (candidate.key(false) - accidental);
                if diff > -limit && diff < limit {
                    Some(Note {
                        coord: candidate.coord + SHARP * (diff - accidental),
                        duration: self.duration,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn transposed(&self, interval: &Interval) -> Note {
        Note {
            coord: self.coord + interval.coord(),
            duration: self.duration,
        }
    }

    /// In-place form of [`Note::transposed`].
    pub fn transpose(&mut self, interval: &Interval) {
        *self = self.transposed(interval);
    }

    /// Interval from this note up (or down) to `other`.
    pub fn interval_to(&self, other: &Note) -> Interval {
        Interval::between(self, other)
    }

    pub fn duration_name(&self) -> Option<&'static str> {
        self.duration.name()
    }

    /// Length in seconds at `bpm` beats of `beat_unit` (4 = quarter) per minute.
    pub fn duration_in_seconds(&self, bpm: f64, beat_unit: u32) -> f64 {
        let seconds =
            (60.0 / bpm) / (self.duration.value as f64 / 4.0) / (beat_unit as f64 / 4.0);
        seconds * 2.0 - seconds / 2f64.powi(self.duration.dots as i32)
    }

    /// 1-based degree of this note in `scale`, or 0 when it is not a member.
    pub fn scale_degree(&self, scale: &Scale) -> usize {
        let mut interval = scale.tonic().interval_to(self);
        let coord = interval.coord();
        // Downward intervals and pure octaves are folded back above the tonic
        if interval.direction() == Direction::Down || (coord.f == 0 && coord.o != 0) {
            interval = interval.invert();
        }
        let simple = interval.simple(true);
        scale
            .intervals()
            .iter()
            .position(|step| step.equal(&simple))
            .map_or(0, |i| i + 1)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_name(), self.octave())
    }
}

impl FromStr for Note {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s)
    }
}
