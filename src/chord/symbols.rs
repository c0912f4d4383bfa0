//! Interval constants and the chord-quality symbol table.

use crate::interval::Interval;
use crate::lattice::Coord;

pub(crate) const UNISON: Interval = Interval::new(Coord::new(0, 0));
pub(crate) const MAJOR_SECOND: Interval = Interval::new(Coord::new(-1, 2));
pub(crate) const MINOR_THIRD: Interval = Interval::new(Coord::new(2, -3));
pub(crate) const MAJOR_THIRD: Interval = Interval::new(Coord::new(-2, 4));
pub(crate) const PERFECT_FOURTH: Interval = Interval::new(Coord::new(1, -1));
pub(crate) const DIMINISHED_FIFTH: Interval = Interval::new(Coord::new(4, -6));
pub(crate) const PERFECT_FIFTH: Interval = Interval::new(Coord::new(0, 1));
pub(crate) const AUGMENTED_FIFTH: Interval = Interval::new(Coord::new(-4, 8));
pub(crate) const MINOR_SIXTH: Interval = Interval::new(Coord::new(3, -4));
pub(crate) const MAJOR_SIXTH: Interval = Interval::new(Coord::new(-1, 3));
pub(crate) const AUGMENTED_SIXTH: Interval = Interval::new(Coord::new(-5, 10));
pub(crate) const DIMINISHED_SEVENTH: Interval = Interval::new(Coord::new(6, -9));
pub(crate) const MINOR_SEVENTH: Interval = Interval::new(Coord::new(2, -2));
pub(crate) const MAJOR_SEVENTH: Interval = Interval::new(Coord::new(-2, 5));
pub(crate) const MAJOR_NINTH: Interval = Interval::new(Coord::new(0, 2));
pub(crate) const PERFECT_ELEVENTH: Interval = Interval::new(Coord::new(2, -1));
pub(crate) const MAJOR_THIRTEENTH: Interval = Interval::new(Coord::new(0, 3));

/// Root, third, fifth, seventh, ninth, eleventh, thirteenth.
pub(crate) const DEFAULT_SLOTS: [Interval; 7] = [
    UNISON,
    MAJOR_THIRD,
    PERFECT_FIFTH,
    MINOR_SEVENTH,
    MAJOR_NINTH,
    PERFECT_ELEVENTH,
    MAJOR_THIRTEENTH,
];

/// Materialized slot count minus one for a bare major triad.
pub(crate) const DEFAULT_LENGTH: usize = 2;

/// Intervals written into slots 1.. by a quality symbol.
///
/// Lookup is exact; callers lower-case two and three character candidates.
pub(crate) fn quality_intervals(symbol: &str) -> Option<&'static [Interval]> {
    match symbol {
        "m" | "mi" | "min" | "-" => Some(&[MINOR_THIRD, PERFECT_FIFTH]),
        "M" | "ma" | "" => Some(&[MAJOR_THIRD, PERFECT_FIFTH]),
        "+" | "aug" => Some(&[MAJOR_THIRD, AUGMENTED_FIFTH]),
        "dim" | "o" => Some(&[MINOR_THIRD, DIMINISHED_FIFTH]),
        "maj" => Some(&[MAJOR_THIRD, PERFECT_FIFTH, MAJOR_SEVENTH]),
        "dom" => Some(&[MAJOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH]),
        "ø" => Some(&[MINOR_THIRD, DIMINISHED_FIFTH, MINOR_SEVENTH]),
        "5" => Some(&[PERFECT_FIFTH]),
        _ => None,
    }
}

/// Symbols that mark the seventh as major when an extension follows.
pub(crate) fn is_explicit_major(symbol: &str) -> bool {
    matches!(symbol, "M" | "ma" | "maj")
}

/// Symbols that turn an extension's seventh into a diminished seventh.
pub(crate) fn is_diminished(symbol: &str) -> bool {
    matches!(symbol, "dim" | "o")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_names() {
        let named = [
            (UNISON, "P1"),
            (MAJOR_SECOND, "M2"),
            (MINOR_THIRD, "m3"),
            (MAJOR_THIRD, "M3"),
            (PERFECT_FOURTH, "P4"),
            (DIMINISHED_FIFTH, "d5"),
            (PERFECT_FIFTH, "P5"),
            (AUGMENTED_FIFTH, "A5"),
            (MINOR_SIXTH, "m6"),
            (MAJOR_SIXTH, "M6"),
            (AUGMENTED_SIXTH, "A6"),
            (DIMINISHED_SEVENTH, "d7"),
            (MINOR_SEVENTH, "m7"),
            (MAJOR_SEVENTH, "M7"),
            (MAJOR_NINTH, "M9"),
            (PERFECT_ELEVENTH, "P11"),
            (MAJOR_THIRTEENTH, "M13"),
        ];
        for (interval, name) in named {
            assert_eq!(interval, Interval::parse(name).unwrap(), "{}", name);
        }
    }

    #[test]
    fn test_quality_table() {
        assert_eq!(quality_intervals("min"), Some(&[MINOR_THIRD, PERFECT_FIFTH][..]));
        assert_eq!(quality_intervals(""), quality_intervals("M"));
        assert_eq!(quality_intervals("ø").map(|s| s.len()), Some(3));
        assert_eq!(quality_intervals("5"), Some(&[PERFECT_FIFTH][..]));
        assert_eq!(quality_intervals("x"), None);
        // Lookup is case-sensitive
        assert_eq!(quality_intervals("MIN"), None);
    }
}
