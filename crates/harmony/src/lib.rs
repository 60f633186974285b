//! Music theory core for cadenza: pitch classes, chords, keys, and the
//! rule-based progression generator.
//!
//! Everything here is pure and synchronous. Chords and progressions are
//! computed on demand and never persisted; the same prompt always yields
//! the same output.

pub mod chord;
pub mod degree;
pub mod progression;
pub mod prompt;
pub mod symbol;
pub mod tables;
pub mod types;

pub use degree::resolve_degree;
pub use progression::{generate_progressions, InvalidLength, ProgressionLength, PROGRESSION_COUNT};
pub use prompt::{infer, Mood, PromptHints};
pub use symbol::parse_symbol;
pub use types::{Chord, ChordQuality, Key, KeyMode, PitchClass, Progression, ScaleDegree};
