//! # Chord Suffix Parser
//!
//! Turns the part of a chord symbol after the root (`m7b5`, `maj9#11`,
//! `sus4add9`) into the chord's interval list.
//!
//! ## Slots
//! A chord is a stack of thirds held in seven slots, of which the first
//! `length + 1` are materialized:
//!
//! ```text
//! 0 root  1 third  2 fifth  3 seventh  4 ninth  5 eleventh  6 thirteenth
//! P1      M3       P5       m7         M9       P11         M13
//! ```
//!
//! ## Phases
//! The parser makes a single left-to-right pass through three phases:
//!
//! 1. **Quality**: the longest symbol from the quality table (three, then two
//!    lower-cased characters, then the exact single character). `m7` reads
//!    as `m`, `Maj7` as `maj`. No match leaves the major triad in place.
//! 2. **Extension**: a bare number stacks thirds up to it (`7`, `9`, `11`,
//!    `13`); `6` adds a major sixth in the seventh slot.
//! 3. **Alterations**: everything left goes through [`AltLexer`] and is
//!    applied token by token: `b5`, `#11`, `sus2`, `add9`, `maj7`...
//!
//! Any failure aborts the parse: no partial interval list is returned.

use super::lexer::{AltLexer, AltToken};
use super::symbols::*;
use crate::error::TonalError;
use crate::interval::Interval;
use crate::lattice::SHARP;

/// Parser state
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Quality,
    Extension,
    Alterations,
    Ended,
}

/// Pending accidental for the next alteration number
#[derive(Debug, Clone, Copy, PartialEq)]
enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    fn apply(self, interval: Interval) -> Interval {
        match self {
            Accidental::Natural => interval,
            Accidental::Sharp => Interval::new(interval.coord() + SHARP),
            Accidental::Flat => Interval::new(interval.coord() - SHARP),
        }
    }
}

struct SuffixParser {
    chars: Vec<char>,
    position: usize,
    slots: [Interval; 7],
    length: usize,
    quality: String,
    additionals: Vec<Interval>,
}

/// Parse a chord suffix into root-relative intervals.
///
/// The result is the materialized slots in order, followed by any `add`
/// intervals.
pub(crate) fn parse_suffix(symbol: &str) -> Result<Vec<Interval>, TonalError> {
    let mut parser = SuffixParser::new(symbol);
    let mut phase = Phase::Quality;

    while phase != Phase::Ended {
        log::trace!("chord '{}' at {} in {:?}", symbol, parser.position, phase);
        phase = match phase {
            Phase::Quality => {
                parser.quality();
                Phase::Extension
            }
            Phase::Extension => {
                parser.extension()?;
                if parser.at_end() {
                    Phase::Ended
                } else {
                    Phase::Alterations
                }
            }
            Phase::Alterations => {
                parser.alterations()?;
                Phase::Ended
            }
            Phase::Ended => Phase::Ended,
        };
    }

    let intervals = parser.finish();
    log::debug!("parsed chord suffix '{}' into {} intervals", symbol, intervals.len());
    Ok(intervals)
}

impl SuffixParser {
    fn new(symbol: &str) -> Self {
        Self {
            chars: symbol.chars().collect(),
            position: 0,
            slots: DEFAULT_SLOTS,
            length: DEFAULT_LENGTH,
            quality: String::new(),
            additionals: Vec::new(),
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn remaining(&self) -> usize {
        self.chars.len().saturating_sub(self.position)
    }

    fn rest(&self) -> String {
        self.chars[self.position..].iter().collect()
    }

    fn take(&self, count: usize) -> String {
        self.chars[self.position..self.position + count].iter().collect()
    }

    fn set_chord(&mut self, intervals: &[Interval]) {
        for (i, interval) in intervals.iter().enumerate() {
            self.slots[i + 1] = *interval;
        }
        self.length = intervals.len();
    }

    fn quality(&mut self) {
        let mut candidates = Vec::new();
        if self.remaining() >= 3 {
            candidates.push(self.take(3).to_lowercase());
        }
        if self.remaining() >= 2 {
            candidates.push(self.take(2).to_lowercase());
        }
        if self.remaining() >= 1 {
            candidates.push(self.take(1));
        }

        for candidate in candidates {
            if let Some(intervals) = quality_intervals(&candidate) {
                self.set_chord(intervals);
                self.position += candidate.chars().count();
                log::trace!("quality '{}'", candidate);
                self.quality = candidate;
                return;
            }
        }
    }

    /// Number at the current position: two digits when it starts with `1`.
    fn extension_number(&self) -> Option<(u32, usize)> {
        let first = *self.chars.get(self.position)?;
        if first == '1' {
            if let Some(&second) = self.chars.get(self.position + 1) {
                return second.to_digit(10).map(|d| (10 + d, 2));
            }
        }
        first.to_digit(10).map(|d| (d, 1))
    }

    fn extension(&mut self) -> Result<(), TonalError> {
        let Some((number, width)) = self.extension_number() else {
            return Ok(());
        };

        if number == 6 {
            self.slots[3] = MAJOR_SIXTH;
            self.length = self.length.max(3);
        } else {
            if number == 0 || number % 2 == 0 || number > 13 {
                return Err(TonalError::InvalidExtension(number));
            }
            self.length = ((number - 1) / 2) as usize;
            if is_diminished(&self.quality) {
                self.slots[3] = DIMINISHED_SEVENTH;
            } else if is_explicit_major(&self.quality) {
                self.slots[3] = MAJOR_SEVENTH;
            }
        }
        self.position += width;
        Ok(())
    }

    fn alterations(&mut self) -> Result<(), TonalError> {
        let rest = self.rest();
        let tokens = AltLexer::new(&rest).tokenize();

        if !tokens.iter().any(AltToken::is_delimiter) {
            return Err(TonalError::InvalidAlteration(rest));
        }
        if let Some(first) = tokens.first().filter(|t| !t.is_delimiter()) {
            return Err(TonalError::InvalidToken(first.to_string()));
        }

        let mut accidental = Accidental::Natural;
        let mut tokens = tokens.into_iter().peekable();

        while let Some(token) = tokens.next() {
            match token {
                AltToken::Maj | AltToken::Major => {
                    self.slots[3] = MAJOR_SEVENTH;
                    self.length = self.length.max(3);
                    tokens.next_if_eq(&AltToken::Number(7));
                }
                AltToken::Sus => {
                    self.slots[1] = if tokens.next_if_eq(&AltToken::Number(2)).is_some() {
                        MAJOR_SECOND
                    } else {
                        tokens.next_if_eq(&AltToken::Number(4));
                        PERFECT_FOURTH
                    };
                }
                AltToken::Add => {
                    let mut added = Accidental::Natural;
                    if tokens.next_if_eq(&AltToken::Sharp).is_some() {
                        added = Accidental::Sharp;
                    } else if tokens.next_if_eq(&AltToken::Flat).is_some() {
                        added = Accidental::Flat;
                    }
                    let interval = match tokens.next() {
                        Some(AltToken::Number(9)) => MAJOR_NINTH,
                        Some(AltToken::Number(11)) => PERFECT_ELEVENTH,
                        Some(AltToken::Number(13)) => MAJOR_THIRTEENTH,
                        other => {
                            let text = other.map(|t| t.to_string()).unwrap_or_default();
                            return Err(TonalError::InvalidAlteration(format!("add{}", text)));
                        }
                    };
                    self.additionals.push(added.apply(interval));
                }
                AltToken::Sharp => accidental = Accidental::Sharp,
                AltToken::Flat => accidental = Accidental::Flat,
                AltToken::Number(6) => {
                    self.slots[3] = match accidental {
                        Accidental::Sharp => AUGMENTED_SIXTH,
                        Accidental::Flat => MINOR_SIXTH,
                        Accidental::Natural => MAJOR_SIXTH,
                    };
                    self.length = self.length.max(3);
                    accidental = Accidental::Natural;
                }
                AltToken::Number(n) => {
                    if n < 5 || n == 7 || n % 2 == 0 || n > 13 {
                        return Err(TonalError::InvalidAlteration(n.to_string()));
                    }
                    let slot = ((n - 1) / 2) as usize;
                    self.length = self.length.max(slot);
                    self.slots[slot] = accidental.apply(self.slots[slot]);
                    accidental = Accidental::Natural;
                }
                AltToken::Text(text) => return Err(TonalError::InvalidToken(text)),
            }
        }

        if accidental != Accidental::Natural {
            return Err(TonalError::InvalidAlteration(rest));
        }

        self.position = self.chars.len();
        Ok(())
    }

    fn finish(mut self) -> Vec<Interval> {
        let mut intervals: Vec<Interval> = self.slots[..=self.length].to_vec();
        intervals.append(&mut self.additionals);
        intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(symbol: &str) -> Vec<String> {
        parse_suffix(symbol)
            .unwrap()
            .iter()
            .map(|i| i.to_string())
            .collect()
    }

    #[test]
    fn test_empty_is_major_triad() {
        assert_eq!(names(""), vec!["P1", "M3", "P5"]);
    }

    #[test]
    fn test_quality_longest_match() {
        assert_eq!(names("m"), vec!["P1", "m3", "P5"]);
        assert_eq!(names("min"), vec!["P1", "m3", "P5"]);
        assert_eq!(names("Mi"), vec!["P1", "m3", "P5"]);
        assert_eq!(names("maj"), vec!["P1", "M3", "P5", "M7"]);
        assert_eq!(names("dim"), vec!["P1", "m3", "d5"]);
        assert_eq!(names("ø"), vec!["P1", "m3", "d5", "m7"]);
        assert_eq!(names("5"), vec!["P1", "P5"]);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(names("7"), vec!["P1", "M3", "P5", "m7"]);
        assert_eq!(names("9"), vec!["P1", "M3", "P5", "m7", "M9"]);
        assert_eq!(names("13"), vec!["P1", "M3", "P5", "m7", "M9", "P11", "M13"]);
        assert_eq!(names("maj7"), vec!["P1", "M3", "P5", "M7"]);
        assert_eq!(names("M9"), vec!["P1", "M3", "P5", "M7", "M9"]);
        assert_eq!(names("dim7"), vec!["P1", "m3", "d5", "d7"]);
        assert_eq!(names("o7"), vec!["P1", "m3", "d5", "d7"]);
        assert_eq!(names("m6"), vec!["P1", "m3", "P5", "M6"]);
    }

    #[test]
    fn test_invalid_extension() {
        assert_eq!(parse_suffix("8"), Err(TonalError::InvalidExtension(8)));
        assert_eq!(parse_suffix("15"), Err(TonalError::InvalidExtension(15)));
        assert_eq!(parse_suffix("0"), Err(TonalError::InvalidExtension(0)));
    }

    #[test]
    fn test_altered_fifths_and_ninths() {
        assert_eq!(names("7b5"), vec!["P1", "M3", "d5", "m7"]);
        assert_eq!(names("7#9"), vec!["P1", "M3", "P5", "m7", "A9"]);
        assert_eq!(names("m11b5b9"), vec!["P1", "m3", "d5", "m7", "m9", "P11"]);
        assert_eq!(names("7#11"), vec!["P1", "M3", "P5", "m7", "M9", "A11"]);
    }

    #[test]
    fn test_suspended() {
        assert_eq!(names("sus4"), vec!["P1", "P4", "P5"]);
        assert_eq!(names("sus2"), vec!["P1", "M2", "P5"]);
        assert_eq!(names("sus"), vec!["P1", "P4", "P5"]);
        assert_eq!(names("7sus4"), vec!["P1", "P4", "P5", "m7"]);
    }

    #[test]
    fn test_added_tones() {
        assert_eq!(names("add9"), vec!["P1", "M3", "P5", "M9"]);
        assert_eq!(names("minadd11"), vec!["P1", "m3", "P5", "P11"]);
        // "ma" is a quality symbol, so "madd" never reads as minor
        assert!(parse_suffix("madd11").is_err());
        assert_eq!(names("addb9"), vec!["P1", "M3", "P5", "m9"]);
        assert_eq!(names("6add9"), vec!["P1", "M3", "P5", "M6", "M9"]);
    }

    #[test]
    fn test_major_seventh_alteration() {
        assert_eq!(names("mM7"), vec!["P1", "m3", "P5", "M7"]);
        assert_eq!(names("mmaj7"), vec!["P1", "m3", "P5", "M7"]);
        assert_eq!(names("7b6"), vec!["P1", "M3", "P5", "m6"]);
    }

    #[test]
    fn test_alteration_errors() {
        assert!(matches!(parse_suffix("7x"), Err(TonalError::InvalidAlteration(_))));
        assert!(matches!(parse_suffix("7#"), Err(TonalError::InvalidAlteration(_))));
        assert!(matches!(parse_suffix("b3"), Err(TonalError::InvalidAlteration(_))));
        assert!(matches!(parse_suffix("#7"), Err(TonalError::InvalidAlteration(_))));
        assert!(matches!(parse_suffix("add7"), Err(TonalError::InvalidAlteration(_))));
        assert!(matches!(parse_suffix("b15"), Err(TonalError::InvalidAlteration(_))));
    }

    #[test]
    fn test_token_errors() {
        assert_eq!(
            parse_suffix("7xyz#9"),
            Err(TonalError::InvalidToken("xyz".to_string()))
        );
        assert_eq!(
            parse_suffix("b9q"),
            Err(TonalError::InvalidToken("q".to_string()))
        );
    }
}
