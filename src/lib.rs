pub mod api;
pub mod chord;
pub mod config;
pub mod error;
pub mod interval;
pub mod lattice;
pub mod note;
pub mod scale;

pub use api::*;
pub use chord::{Chord, ChordQuality, ChordType};
pub use config::Config;
pub use error::*;
pub use interval::{Direction, Interval, IntervalKind, Quality};
pub use lattice::Coord;
pub use note::{Duration, FrequencyMatch, Letter, Note};
pub use scale::Scale;
