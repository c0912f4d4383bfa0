//! # Intervals
//!
//! An [`Interval`] is a lattice coordinate read as the distance between two
//! pitches. It stores nothing but the coordinate; quality, number and
//! direction are decoded on demand.
//!
//! ## Encoding
//! Every simple interval has an unaltered base on the lattice. Perfect-type
//! bases (unison, fourth, fifth, octave) are perfect; imperfect-type bases
//! (second, third, sixth, seventh) are stored as their minor form:
//!
//! ```text
//! unison (0, 0)   second (3, -5)   third (2, -3)   fourth (1, -1)
//! fifth  (0, 1)   sixth  (3, -4)   seventh (2, -2) octave (1, 0)
//! ```
//!
//! A quality is an offset from that base in multiples of [`SHARP`]. For the
//! unaltered forms the fifth component always lies in `-5..=1`, which is how
//! [`Interval::value`] and [`Interval::base`] undo the offset.
//!
//! ## Example
//! ```rust
//! use tonal::Interval;
//!
//! let third: Interval = "M3".parse().unwrap();
//! assert_eq!(third.semitones(), 4);
//! assert_eq!(third.invert().to_string(), "m6");
//!
//! let down: Interval = "P-5".parse().unwrap();
//! assert_eq!(down.value(), -5);
//! ```

use crate::error::TonalError;
use crate::lattice::{Coord, MAX_OCTAVE, OCTAVE, SHARP};
use crate::note::Note;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Interval quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    DoublyDiminished, // dd
    Diminished,       // d
    Minor,            // m
    Perfect,          // P
    Major,            // M
    Augmented,        // A
    DoublyAugmented,  // AA
}

impl Quality {
    pub fn symbol(&self) -> &'static str {
        match self {
            Quality::DoublyDiminished => "dd",
            Quality::Diminished => "d",
            Quality::Minor => "m",
            Quality::Perfect => "P",
            Quality::Major => "M",
            Quality::Augmented => "A",
            Quality::DoublyAugmented => "AA",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Quality::DoublyDiminished => "doubly diminished",
            Quality::Diminished => "diminished",
            Quality::Minor => "minor",
            Quality::Perfect => "perfect",
            Quality::Major => "major",
            Quality::Augmented => "augmented",
            Quality::DoublyAugmented => "doubly augmented",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "dd" => Some(Quality::DoublyDiminished),
            "d" => Some(Quality::Diminished),
            "m" => Some(Quality::Minor),
            "P" => Some(Quality::Perfect),
            "M" => Some(Quality::Major),
            "A" => Some(Quality::Augmented),
            "AA" => Some(Quality::DoublyAugmented),
            _ => None,
        }
    }
}

/// Position of the unaltered quality in both quality lists.
const NEUTRAL: i32 = 2;

const PERFECT_QUALITIES: [Quality; 5] = [
    Quality::DoublyDiminished,
    Quality::Diminished,
    Quality::Perfect,
    Quality::Augmented,
    Quality::DoublyAugmented,
];

const IMPERFECT_QUALITIES: [Quality; 6] = [
    Quality::DoublyDiminished,
    Quality::Diminished,
    Quality::Minor,
    Quality::Major,
    Quality::Augmented,
    Quality::DoublyAugmented,
];

/// Perfect-type (1, 4, 5, 8) or imperfect-type (2, 3, 6, 7) interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalKind {
    Perfect,
    Imperfect,
}

impl IntervalKind {
    /// Qualities this kind accepts, from most diminished to most augmented.
    pub fn qualities(&self) -> &'static [Quality] {
        match self {
            IntervalKind::Perfect => &PERFECT_QUALITIES,
            IntervalKind::Imperfect => &IMPERFECT_QUALITIES,
        }
    }
}

/// Simple interval names, unison through octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Unison,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Octave,
}

/// Bases ordered by the fifth component of their unaltered coordinate, -5..=1.
const FROM_FIFTH: [Base; 7] = [
    Base::Second,
    Base::Sixth,
    Base::Third,
    Base::Seventh,
    Base::Fourth,
    Base::Unison,
    Base::Fifth,
];

const ORDINALS: [&str; 15] = [
    "unison",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "octave",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
];

impl Base {
    /// Unaltered (perfect or minor) coordinate
    pub fn coord(&self) -> Coord {
        match self {
            Base::Unison => Coord::new(0, 0),
            Base::Second => Coord::new(3, -5),
            Base::Third => Coord::new(2, -3),
            Base::Fourth => Coord::new(1, -1),
            Base::Fifth => Coord::new(0, 1),
            Base::Sixth => Coord::new(3, -4),
            Base::Seventh => Coord::new(2, -2),
            Base::Octave => Coord::new(1, 0),
        }
    }

    pub fn step_number(&self) -> i32 {
        match self {
            Base::Unison => 1,
            Base::Second => 2,
            Base::Third => 3,
            Base::Fourth => 4,
            Base::Fifth => 5,
            Base::Sixth => 6,
            Base::Seventh => 7,
            Base::Octave => 8,
        }
    }

    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            1 => Some(Base::Unison),
            2 => Some(Base::Second),
            3 => Some(Base::Third),
            4 => Some(Base::Fourth),
            5 => Some(Base::Fifth),
            6 => Some(Base::Sixth),
            7 => Some(Base::Seventh),
            8 => Some(Base::Octave),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        ORDINALS[(self.step_number() - 1) as usize]
    }

    pub fn kind(&self) -> IntervalKind {
        if self.coord().o <= 1 {
            IntervalKind::Perfect
        } else {
            IntervalKind::Imperfect
        }
    }
}

/// Scale-step number for an ordinal name (`"third"` → 3, `"ninth"` → 9).
pub fn step_number(name: &str) -> Option<i32> {
    match name {
        "unison" | "first" => Some(1),
        "second" => Some(2),
        "third" => Some(3),
        "fourth" => Some(4),
        "fifth" => Some(5),
        "sixth" => Some(6),
        "seventh" => Some(7),
        "octave" => Some(8),
        "ninth" => Some(9),
        "eleventh" => Some(11),
        "thirteenth" => Some(13),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// An exact interval on the octave/fifth lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    coord: Coord,
}

impl Interval {
    pub const fn new(coord: Coord) -> Self {
        Self { coord }
    }

    /// Parse `<quality><number>`, e.g. `M3`, `P-5`, `AA11`.
    pub fn parse(text: &str) -> Result<Self, TonalError> {
        let format_error = || TonalError::InvalidIntervalFormat(text.to_string());

        let split = text
            .find(|c: char| c == '-' || c.is_ascii_digit())
            .ok_or_else(format_error)?;
        let (quality_text, number_text) = text.split_at(split);
        let quality = Quality::from_symbol(quality_text).ok_or_else(format_error)?;

        let downward = number_text.starts_with('-');
        let digits = number_text.strip_prefix('-').unwrap_or(number_text);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(format_error());
        }
        let number: i32 = digits.parse().map_err(|_| format_error())?;
        if number == 0 {
            return Err(format_error());
        }

        // Reduce to unison..octave plus whole octaves
        let simple = if number > 8 {
            match number % 7 {
                0 => 7,
                r => r,
            }
        } else {
            number
        };
        let octaves = (number - simple) / 7;
        if octaves > MAX_OCTAVE {
            return Err(format_error());
        }
        let base = Base::from_step(simple).ok_or_else(format_error)?;

        let position = base
            .kind()
            .qualities()
            .iter()
            .position(|&q| q == quality)
            .ok_or_else(|| TonalError::InvalidIntervalQuality {
                quality: quality_text.to_string(),
                number,
            })?;
        let offset = position as i32 - NEUTRAL;

        let coord = base.coord() + SHARP * offset + OCTAVE * octaves;
        Ok(Self::new(if downward { -coord } else { coord }))
    }

    /// Distance from one note to another.
    pub fn between(from: &Note, to: &Note) -> Self {
        Self::new(to.coord() - from.coord())
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn semitones(&self) -> i32 {
        self.coord.semitones()
    }

    /// Signed interval number: positive upward, negative downward.
    pub fn value(&self) -> i32 {
        let accidentals = (self.coord.f - 2).div_euclid(7) + 1;
        let without = self.coord - SHARP * accidentals;
        let base = FROM_FIFTH[(without.f + 5) as usize];
        let octaves = without.o - base.coord().o;
        let value = base.step_number() + octaves * 7;
        if value > 0 {
            value
        } else {
            value - 2
        }
    }

    pub fn number(&self) -> i32 {
        self.value().abs()
    }

    /// Ordinal name of the number, `"unison"` through `"fifteenth"`.
    pub fn ordinal(&self) -> Option<&'static str> {
        ORDINALS.get((self.number() - 1) as usize).copied()
    }

    pub fn direction(&self) -> Direction {
        if self.value() >= 1 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// The same interval pointing the other way when `direction` differs.
    pub fn with_direction(&self, direction: Direction) -> Self {
        if self.direction() == direction {
            *self
        } else {
            Self::new(-self.coord)
        }
    }

    /// Number of accidentals away from the base: 0 perfect/minor, 1 major or augmented, ...
    pub fn quality_value(&self) -> i32 {
        let f = match self.direction() {
            Direction::Down => -self.coord.f,
            Direction::Up => self.coord.f,
        };
        (f - 2).div_euclid(7) + 1
    }

    pub fn base(&self) -> Base {
        let fifth = (self.coord - SHARP * self.quality_value()).f;
        let index = if self.value() > 0 {
            fifth + 5
        } else {
            (5 - fifth).rem_euclid(7)
        };
        let base = FROM_FIFTH[index as usize];
        if base == Base::Unison && self.number() >= 8 {
            Base::Octave
        } else {
            base
        }
    }

    pub fn kind(&self) -> IntervalKind {
        self.base().kind()
    }

    /// Named quality, `None` beyond doubly augmented/diminished.
    pub fn quality(&self) -> Option<Quality> {
        let index = self.quality_value() + NEUTRAL;
        if index < 0 {
            return None;
        }
        self.kind().qualities().get(index as usize).copied()
    }

    /// Reduce to within an octave. Keeps the direction unless `ignore_direction`.
    pub fn simple(&self, ignore_direction: bool) -> Self {
        let simple = self.base().coord() + SHARP * self.quality_value();
        if !ignore_direction && self.direction() == Direction::Down {
            Self::new(-simple)
        } else {
            Self::new(simple)
        }
    }

    pub fn is_compound(&self) -> bool {
        self.number() > 8
    }

    /// Whole octaves contained in a compound interval.
    pub fn octaves(&self) -> i32 {
        let base = self.base().coord();
        match self.direction() {
            Direction::Up => {
                let without = self.coord - SHARP * self.quality_value();
                without.o - base.o
            }
            Direction::Down => {
                let without = self.coord - SHARP * -self.quality_value();
                -(without.o + base.o)
            }
        }
    }

    /// Inversion within the octave: 3rd ↔ 6th, major ↔ minor, augmented ↔ diminished.
    pub fn invert(&self) -> Self {
        let base = self.base();
        let quality = self.quality_value();
        let accidentals = match base.kind() {
            IntervalKind::Imperfect => -(quality - 1),
            IntervalKind::Perfect => -quality,
        };
        // from_step cannot fail: 9 - n stays within 1..=8
        let inverted = Base::from_step(9 - base.step_number()).unwrap_or(Base::Unison);
        Self::new(inverted.coord() + SHARP * accidentals)
    }

    pub fn equal(&self, other: &Interval) -> bool {
        self.coord == other.coord
    }

    /// Larger by semitones; equal sizes are ordered by number (P4 > A3).
    pub fn greater(&self, other: &Interval) -> bool {
        let (semitones, other_semitones) = (self.semitones(), other.semitones());
        if semitones == other_semitones {
            self.number() > other.number()
        } else {
            semitones > other_semitones
        }
    }

    pub fn smaller(&self, other: &Interval) -> bool {
        !self.equal(other) && !self.greater(other)
    }

    /// Compose two intervals.
    pub fn add(&self, other: &Interval) -> Self {
        Self::new(self.coord + other.coord)
    }

    fn quality_symbol(&self) -> String {
        match self.quality() {
            Some(quality) => quality.symbol().to_string(),
            None => {
                let q = self.quality_value();
                let augmented = match self.kind() {
                    IntervalKind::Perfect => q,
                    IntervalKind::Imperfect => q - 1,
                };
                if augmented > 0 {
                    "A".repeat(augmented as usize)
                } else {
                    "d".repeat(q.unsigned_abs() as usize)
                }
            }
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality_symbol(), self.value())
    }
}

impl FromStr for Interval {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(s: &str) -> Interval {
        Interval::parse(s).unwrap()
    }

    #[test]
    fn test_parse_simple_intervals() {
        assert_eq!(iv("P1").coord(), Coord::new(0, 0));
        assert_eq!(iv("m3").coord(), Coord::new(2, -3));
        assert_eq!(iv("M3").coord(), Coord::new(-2, 4));
        assert_eq!(iv("P5").coord(), Coord::new(0, 1));
        assert_eq!(iv("A4").coord(), Coord::new(-3, 6));
        assert_eq!(iv("d5").coord(), Coord::new(4, -6));
        assert_eq!(iv("P8").coord(), Coord::new(1, 0));
    }

    #[test]
    fn test_parse_compound_intervals() {
        assert_eq!(iv("M9").coord(), Coord::new(0, 2));
        assert_eq!(iv("M9").semitones(), 14);
        assert_eq!(iv("P11").semitones(), 17);
        assert_eq!(iv("M13").semitones(), 21);
        assert_eq!(iv("M14").semitones(), 23);
        assert_eq!(iv("P15").coord(), Coord::new(2, 0));
    }

    #[test]
    fn test_parse_downward() {
        assert_eq!(iv("m-3").coord(), Coord::new(-2, 3));
        assert_eq!(iv("m-3").semitones(), -3);
        assert_eq!(iv("P-8").semitones(), -12);
    }

    #[test]
    fn test_semitone_sizes() {
        let sizes = [
            ("m2", 1),
            ("M2", 2),
            ("m3", 3),
            ("M3", 4),
            ("P4", 5),
            ("A4", 6),
            ("d5", 6),
            ("P5", 7),
            ("m6", 8),
            ("M6", 9),
            ("d7", 9),
            ("m7", 10),
            ("M7", 11),
            ("A6", 10),
            ("dd7", 8),
            ("AA4", 7),
        ];
        for (name, semitones) in sizes {
            assert_eq!(iv(name).semitones(), semitones, "{}", name);
        }
    }

    #[test]
    fn test_invalid_quality() {
        let err = Interval::parse("P3").unwrap_err();
        assert_eq!(
            err,
            TonalError::InvalidIntervalQuality {
                quality: "P".to_string(),
                number: 3
            }
        );
        assert!(matches!(
            Interval::parse("M5"),
            Err(TonalError::InvalidIntervalQuality { .. })
        ));
        assert!(matches!(
            Interval::parse("m11"),
            Err(TonalError::InvalidIntervalQuality { .. })
        ));
    }

    #[test]
    fn test_invalid_format() {
        for text in ["", "X3", "M", "3", "M-", "P0", "M3x", "Mm3", "P 5"] {
            assert!(
                matches!(
                    Interval::parse(text),
                    Err(TonalError::InvalidIntervalFormat(_))
                ),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_number_out_of_range() {
        assert_eq!(iv("P70001").semitones(), 120_000);
        for text in ["P70008", "P2147483647", "P-2147483647", "M99999999999"] {
            assert!(
                matches!(
                    Interval::parse(text),
                    Err(TonalError::InvalidIntervalFormat(_))
                ),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_value_and_number() {
        assert_eq!(iv("M3").value(), 3);
        assert_eq!(iv("m-3").value(), -3);
        assert_eq!(iv("m-3").number(), 3);
        assert_eq!(iv("P-8").value(), -8);
        assert_eq!(iv("M10").value(), 10);
        assert_eq!(iv("P1").value(), 1);
        assert_eq!(iv("A6").value(), 6);
    }

    #[test]
    fn test_display_round_trip() {
        for name in [
            "P1", "m2", "M2", "m3", "M3", "P4", "A4", "d5", "P5", "m6", "M6", "m7", "M7", "P8",
            "M9", "A11", "m13", "dd7", "AA5", "m-3", "P-5", "M-10",
        ] {
            assert_eq!(iv(name).to_string(), name);
        }
    }

    #[test]
    fn test_quality_and_kind() {
        assert_eq!(iv("M3").quality(), Some(Quality::Major));
        assert_eq!(iv("m-6").quality(), Some(Quality::Minor));
        assert_eq!(iv("d5").quality(), Some(Quality::Diminished));
        assert_eq!(iv("P-4").quality(), Some(Quality::Perfect));
        assert_eq!(iv("M3").kind(), IntervalKind::Imperfect);
        assert_eq!(iv("P12").kind(), IntervalKind::Perfect);
        assert_eq!(Quality::Augmented.long_name(), "augmented");
    }

    #[test]
    fn test_beyond_double_accidentals() {
        let triple = Interval::new(iv("AA4").coord() + SHARP);
        assert_eq!(triple.quality(), None);
        assert_eq!(triple.to_string(), "AAA4");
        let triple_dim = Interval::new(iv("dd3").coord() - SHARP);
        assert_eq!(triple_dim.to_string(), "ddd3");
    }

    #[test]
    fn test_base_and_ordinal() {
        assert_eq!(iv("M3").base(), Base::Third);
        assert_eq!(iv("m-3").base(), Base::Third);
        assert_eq!(iv("P8").base(), Base::Octave);
        assert_eq!(iv("P15").base(), Base::Octave);
        assert_eq!(iv("M9").base(), Base::Second);
        assert_eq!(iv("M9").ordinal(), Some("ninth"));
        assert_eq!(iv("P1").ordinal(), Some("unison"));
        assert_eq!(Base::Sixth.name(), "sixth");
    }

    #[test]
    fn test_direction() {
        assert_eq!(iv("M3").direction(), Direction::Up);
        assert_eq!(iv("M-3").direction(), Direction::Down);
        assert_eq!(iv("P1").direction(), Direction::Up);
        assert_eq!(iv("M3").with_direction(Direction::Down), iv("M-3"));
        assert_eq!(iv("M3").with_direction(Direction::Up), iv("M3"));
    }

    #[test]
    fn test_simple_and_octaves() {
        assert_eq!(iv("M10").simple(false), iv("M3"));
        assert_eq!(iv("M-10").simple(false), iv("M-3"));
        assert_eq!(iv("M-10").simple(true), iv("M3"));
        assert_eq!(iv("M10").octaves(), 1);
        assert_eq!(iv("M3").octaves(), 0);
        assert_eq!(iv("M-10").octaves(), 1);
        assert_eq!(iv("M17").octaves(), 2);
        assert!(iv("M10").is_compound());
        assert!(!iv("P8").is_compound());
    }

    #[test]
    fn test_invert() {
        assert_eq!(iv("M3").invert(), iv("m6"));
        assert_eq!(iv("m6").invert(), iv("M3"));
        assert_eq!(iv("P4").invert(), iv("P5"));
        assert_eq!(iv("A4").invert(), iv("d5"));
        assert_eq!(iv("AA2").invert(), iv("dd7"));
        assert_eq!(iv("P1").invert(), iv("P8"));
        assert_eq!(iv("P8").invert(), iv("P1"));
        assert_eq!(iv("M10").invert(), iv("m6"));
    }

    #[test]
    fn test_invert_involution() {
        for name in [
            "P1", "m2", "M2", "m3", "M3", "P4", "A4", "d5", "P5", "m6", "M6", "m7", "M7", "d3",
            "A6", "dd4",
        ] {
            let interval = iv(name);
            assert_eq!(interval.invert().invert(), interval, "{}", name);
        }
    }

    #[test]
    fn test_ordering() {
        // Same size, larger number wins
        assert!(iv("P4").greater(&iv("A3")));
        assert!(iv("A3").smaller(&iv("P4")));
        assert!(iv("P5").greater(&iv("P4")));
        assert!(iv("m3").smaller(&iv("M3")));
        assert!(!iv("M3").smaller(&iv("M3")));
        assert!(iv("M3").equal(&iv("M3")));
        assert!(!iv("A4").equal(&iv("d5")));
    }

    #[test]
    fn test_add() {
        assert_eq!(iv("M3").add(&iv("m3")), iv("P5"));
        assert_eq!(iv("P5").add(&iv("P4")), iv("P8"));
    }

    #[test]
    fn test_step_number() {
        assert_eq!(step_number("third"), Some(3));
        assert_eq!(step_number("first"), Some(1));
        assert_eq!(step_number("thirteenth"), Some(13));
        assert_eq!(step_number("tenth"), None);
    }
}
