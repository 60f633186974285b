use serde::{Deserialize, Serialize};

use crate::tables;

/// One of the 12 chromatic pitch classes, no octave information.
///
/// Stored as a semitone index with C = 0. Transposition wraps mod 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Wrap an arbitrary semitone index into 0..12.
    pub fn from_index(index: u8) -> Self {
        PitchClass(index % 12)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Transpose by a semitone offset, wrapping mod 12.
    pub fn transpose(self, semitones: u8) -> Self {
        PitchClass((self.0 + semitones % 12) % 12)
    }

    /// Spelled name, with the enharmonic choice made by the caller.
    pub fn name(self, use_flats: bool) -> &'static str {
        tables::note_name(self.0, use_flats)
    }

    /// Parse a note letter plus optional accidental ("C", "F#", "Bb").
    ///
    /// Returns `None` for anything that is not a bare pitch-class name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next()?;
        let base: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let accidental: i32 = match chars.next() {
            None => 0,
            Some('#') | Some('♯') => 1,
            Some('b') | Some('♭') => -1,
            Some(_) => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(PitchClass((base + accidental).rem_euclid(12) as u8))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    Major,
    Minor,
}

impl std::fmt::Display for KeyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyMode::Major => write!(f, "major"),
            KeyMode::Minor => write!(f, "minor"),
        }
    }
}

/// A tonal center: tonic pitch class plus major/minor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub tonic: PitchClass,
    pub mode: KeyMode,
}

impl Key {
    pub fn new(tonic: PitchClass, mode: KeyMode) -> Self {
        Key { tonic, mode }
    }

    /// C major, the default when a prompt gives nothing to go on.
    pub fn c_major() -> Self {
        Key::new(PitchClass::C, KeyMode::Major)
    }

    /// Semitone offsets of the seven diatonic degrees from the tonic.
    pub fn scale_intervals(self) -> &'static [u8; 7] {
        match self.mode {
            KeyMode::Major => &tables::MAJOR_SCALE,
            KeyMode::Minor => &tables::NATURAL_MINOR_SCALE,
        }
    }

    /// The seven pitch classes of this key's diatonic scale.
    pub fn scale_notes(self) -> [PitchClass; 7] {
        let intervals = self.scale_intervals();
        let mut notes = [self.tonic; 7];
        for (i, &offset) in intervals.iter().enumerate() {
            notes[i] = self.tonic.transpose(offset);
        }
        notes
    }

    /// Whether this key is conventionally spelled with flats.
    ///
    /// Minor keys follow their relative major (G minor spells like Bb major,
    /// so Eb rather than D#).
    pub fn use_flats(self) -> bool {
        let reference = match self.mode {
            KeyMode::Major => self.tonic,
            KeyMode::Minor => self.tonic.transpose(3),
        };
        tables::FLAT_KEY_ROOTS.contains(&reference.index())
    }

    /// Display name like "G minor".
    pub fn name(self) -> String {
        format!("{} {}", self.tonic.name(self.use_flats()), self.mode)
    }
}

/// The interval pattern defining a chord's character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Suspended2,
    Suspended4,
    Dominant7,
    Major7,
    Minor7,
    Diminished7,
    HalfDiminished7,
    Major6,
    Minor6,
    Add9,
    Power,
}

impl ChordQuality {
    /// Ordered semitone offsets from the chord root.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Suspended2 => &[0, 2, 7],
            ChordQuality::Suspended4 => &[0, 5, 7],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::HalfDiminished7 => &[0, 3, 6, 10],
            ChordQuality::Major6 => &[0, 4, 7, 9],
            ChordQuality::Minor6 => &[0, 3, 7, 9],
            ChordQuality::Add9 => &[0, 2, 4, 7],
            ChordQuality::Power => &[0, 7],
        }
    }

    /// Suffix for chord symbol display.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Suspended2 => "sus2",
            ChordQuality::Suspended4 => "sus4",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::HalfDiminished7 => "m7b5",
            ChordQuality::Major6 => "6",
            ChordQuality::Minor6 => "m6",
            ChordQuality::Add9 => "add9",
            ChordQuality::Power => "5",
        }
    }

    /// Look up a quality by its written suffix.
    ///
    /// Unknown suffixes fall back to a plain major triad. That default is
    /// lossy on purpose: a chord symbol we cannot read still produces a
    /// playable chord rather than an error.
    pub fn from_suffix(suffix: &str) -> Self {
        for &(written, quality) in tables::QUALITY_SUFFIXES {
            if suffix == written {
                return quality;
            }
        }
        ChordQuality::Major
    }
}

/// A chord: root pitch class plus quality. Built on demand, immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: ChordQuality,
}

/// A diatonic scale position 1..=7, written as a roman numeral.
///
/// The written case is kept as an advisory hint only; the authoritative
/// quality of a resolved chord comes from the mode's diatonic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDegree {
    /// 1-based degree within the scale.
    pub degree: u8,
    /// True when the label was written lowercase (minor-family hint).
    pub written_minor: bool,
}

impl ScaleDegree {
    pub const fn upper(degree: u8) -> Self {
        ScaleDegree {
            degree,
            written_minor: false,
        }
    }

    pub const fn lower(degree: u8) -> Self {
        ScaleDegree {
            degree,
            written_minor: true,
        }
    }

    /// Parse a roman-numeral label ("IV", "vii", "ii°").
    ///
    /// Unrecognized labels default to the tonic degree rather than failing.
    pub fn parse(label: &str) -> Self {
        let trimmed = label
            .trim()
            .trim_end_matches('°')
            .trim_end_matches("dim")
            .trim_end_matches('o');
        let written_minor = trimmed
            .chars()
            .next()
            .map(|c| c.is_ascii_lowercase())
            .unwrap_or(false);
        let degree = match trimmed.to_ascii_uppercase().as_str() {
            "I" => 1,
            "II" => 2,
            "III" => 3,
            "IV" => 4,
            "V" => 5,
            "VI" => 6,
            "VII" => 7,
            _ => 1,
        };
        ScaleDegree {
            degree,
            written_minor,
        }
    }
}

/// An ordered chord sequence plus a human-readable description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progression {
    pub description: String,
    pub key: Key,
    pub chords: Vec<Chord>,
}
