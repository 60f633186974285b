//! Fixed theory tables: note spellings, scales, diatonic qualities, and the
//! canned degree patterns the progression selector draws from.

use crate::types::{ChordQuality, ScaleDegree};

const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Pitch classes conventionally spelled with flats.
pub static FLAT_KEY_ROOTS: [u8; 6] = [1, 3, 5, 6, 8, 10];

pub fn note_name(pitch_class: u8, use_flats: bool) -> &'static str {
    let idx = (pitch_class % 12) as usize;
    if use_flats {
        NOTE_NAMES_FLAT[idx]
    } else {
        NOTE_NAMES_SHARP[idx]
    }
}

/// Natural major scale offsets from the tonic.
pub static MAJOR_SCALE: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Natural minor scale offsets from the tonic.
pub static NATURAL_MINOR_SCALE: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Diatonic triad quality per degree in a major key: I ii iii IV V vi vii°.
pub static MAJOR_DEGREE_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

/// Diatonic triad quality per degree in a natural minor key: i ii° III iv v VI VII.
pub static MINOR_DEGREE_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Minor,
    ChordQuality::Diminished,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
];

/// Quality suffixes recognized when parsing chord symbols, longest first so
/// "m7b5" wins over "m7" wins over "m".
pub static QUALITY_SUFFIXES: &[(&str, ChordQuality)] = &[
    ("m7b5", ChordQuality::HalfDiminished7),
    ("maj7", ChordQuality::Major7),
    ("dim7", ChordQuality::Diminished7),
    ("add9", ChordQuality::Add9),
    ("sus2", ChordQuality::Suspended2),
    ("sus4", ChordQuality::Suspended4),
    ("min7", ChordQuality::Minor7),
    ("dim", ChordQuality::Diminished),
    ("aug", ChordQuality::Augmented),
    ("min", ChordQuality::Minor),
    ("maj", ChordQuality::Major),
    ("m7", ChordQuality::Minor7),
    ("m6", ChordQuality::Minor6),
    ("m", ChordQuality::Minor),
    ("7", ChordQuality::Dominant7),
    ("6", ChordQuality::Major6),
    ("5", ChordQuality::Power),
    ("", ChordQuality::Major),
];

const fn maj(degree: u8) -> ScaleDegree {
    ScaleDegree::upper(degree)
}

const fn min(degree: u8) -> ScaleDegree {
    ScaleDegree::lower(degree)
}

/// Degree patterns for major-mode prompts. The selector picks pattern
/// `i % len` for progression index `i` and cycles it to the requested length.
pub static MAJOR_PATTERNS: &[&[ScaleDegree]] = &[
    &[maj(1), maj(5), min(6), maj(4)],
    &[maj(1), maj(4), maj(5), maj(1)],
    &[min(2), maj(5), maj(1), min(6)],
    &[maj(1), min(6), maj(4), maj(5)],
    &[maj(4), maj(1), maj(5), min(6)],
];

/// Degree patterns for minor-mode prompts.
pub static MINOR_PATTERNS: &[&[ScaleDegree]] = &[
    &[min(1), maj(6), maj(7), min(1)],
    &[min(1), min(4), maj(7), maj(3)],
    &[min(1), min(4), min(5), min(1)],
    &[min(1), maj(7), maj(6), maj(7)],
    &[min(1), maj(3), maj(7), maj(6)],
];

/// Prompt keywords that suggest a minor key.
pub static MINOR_MOOD_WORDS: &[&str] = &[
    "sad",
    "melancholy",
    "dark",
    "emotional",
    "bittersweet",
    "moody",
];

/// Prompt keywords that suggest a major key.
pub static MAJOR_MOOD_WORDS: &[&str] = &[
    "happy",
    "upbeat",
    "bright",
    "joyful",
    "cheerful",
    "sunny",
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spellings_cover_all_pitch_classes() {
        for pc in 0..12u8 {
            assert!(!note_name(pc, false).is_empty());
            assert!(!note_name(pc, true).is_empty());
        }
        assert_eq!(note_name(3, true), "Eb");
        assert_eq!(note_name(3, false), "D#");
    }

    #[test]
    fn suffix_table_is_longest_first() {
        for pair in QUALITY_SUFFIXES.windows(2) {
            assert!(
                pair[0].0.len() >= pair[1].0.len(),
                "{:?} must come before {:?}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn patterns_stay_diatonic() {
        for pattern in MAJOR_PATTERNS.iter().chain(MINOR_PATTERNS.iter()) {
            for degree in pattern.iter() {
                assert!((1..=7).contains(&degree.degree));
            }
        }
    }
}
