//! Chord construction: intervals applied to a root, mod 12.

use crate::types::{Chord, ChordQuality, PitchClass};

impl Chord {
    pub fn new(root: PitchClass, quality: ChordQuality) -> Self {
        Chord { root, quality }
    }

    /// Constituent pitch classes in ascending interval order from the root.
    ///
    /// The list always has exactly `quality.intervals().len()` entries and
    /// the first entry is the root itself.
    pub fn notes(&self) -> Vec<PitchClass> {
        self.quality
            .intervals()
            .iter()
            .map(|&offset| self.root.transpose(offset))
            .collect()
    }

    /// Spelled note names, e.g. `["G", "Bb", "D"]` for Gm with flats.
    pub fn note_names(&self, use_flats: bool) -> Vec<String> {
        self.notes()
            .iter()
            .map(|pc| pc.name(use_flats).to_string())
            .collect()
    }

    /// Display symbol: root name plus quality suffix ("Gm", "Eb", "Cmaj7").
    pub fn symbol(&self, use_flats: bool) -> String {
        format!("{}{}", self.root.name(use_flats), self.quality.suffix())
    }
}
