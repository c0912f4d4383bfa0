//! # Lattice
//!
//! Integer vector algebra over the two generators every other module is built
//! on: the octave and the perfect fifth.
//!
//! A [`Coord`] `(o, f)` means "`o` octaves plus `f` fifths". Pitches are
//! measured from concert A4, intervals are plain differences. Two linear maps
//! give the coordinates musical meaning:
//!
//! ```text
//! semitones(o, f) = 12·o + 7·f
//! steps(o, f)     =  7·o + 4·f
//! ```
//!
//! The determinant of that map is -1, so every (semitones, steps) pair has
//! exactly one coordinate: enharmonic spellings never collide.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A point on the octave/fifth lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub o: i32,
    pub f: i32,
}

/// Raises a pitch by one chromatic accidental: 7 fifths minus 4 octaves.
pub const SHARP: Coord = Coord::new(-4, 7);

/// Concert A4 measured from C0.
pub const A4: Coord = Coord::new(3, 3);

/// One octave.
pub const OCTAVE: Coord = Coord::new(1, 0);

/// Largest octave magnitude accepted when parsing notes and intervals.
/// Keeps key numbers and semitone counts well inside `i32`.
pub const MAX_OCTAVE: i32 = 10_000;

impl Coord {
    pub const fn new(o: i32, f: i32) -> Self {
        Self { o, f }
    }

    /// Sum of both components.
    pub fn sum(self) -> i32 {
        self.o + self.f
    }

    /// Size in equal-tempered semitones.
    pub fn semitones(self) -> i32 {
        (self * Coord::new(12, 7)).sum()
    }

    /// Size in diatonic steps (letter names).
    pub fn steps(self) -> i32 {
        (self * Coord::new(7, 4)).sum()
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.o + rhs.o, self.f + rhs.f)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.o - rhs.o, self.f - rhs.f)
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        Coord::new(-self.o, -self.f)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    fn mul(self, k: i32) -> Coord {
        Coord::new(self.o * k, self.f * k)
    }
}

/// Pairwise product.
impl Mul<Coord> for Coord {
    type Output = Coord;

    fn mul(self, rhs: Coord) -> Coord {
        Coord::new(self.o * rhs.o, self.f * rhs.f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharp_is_one_semitone() {
        assert_eq!(SHARP.semitones(), 1);
        assert_eq!(SHARP.steps(), 0);
    }

    #[test]
    fn test_a4_from_c0() {
        // A4 is 57 semitones and 33 letter steps above C0
        assert_eq!(A4.semitones(), 57);
        assert_eq!(A4.steps(), 33);
    }

    #[test]
    fn test_vector_ops() {
        let a = Coord::new(2, -3);
        let b = Coord::new(-4, 7);
        assert_eq!(a + b, Coord::new(-2, 4));
        assert_eq!(a - b, Coord::new(6, -10));
        assert_eq!(-a, Coord::new(-2, 3));
        assert_eq!(b * 2, Coord::new(-8, 14));
        assert_eq!(a * Coord::new(12, 7), Coord::new(24, -21));
        assert_eq!(a.sum(), -1);
    }

    #[test]
    fn test_octave() {
        assert_eq!(OCTAVE.semitones(), 12);
        assert_eq!(OCTAVE.steps(), 7);
    }
}
