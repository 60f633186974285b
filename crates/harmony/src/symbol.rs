//! Chord symbol parsing ("Gm7", "Eb", "C/E") back into `Chord` values.
//!
//! Used to repair externally produced progressions: a symbol we can read
//! gives us the notes the source left out. Parsing is deliberately lossy at
//! the quality level: suffixes outside the table collapse to a major triad.

use crate::tables;
use crate::types::{Chord, ChordQuality, PitchClass};

/// Parse a chord symbol into a chord.
///
/// A slash bass ("C/E") is accepted and ignored. Returns `None` only when
/// the root itself is unreadable; an unknown quality suffix yields a major
/// triad instead.
pub fn parse_symbol(symbol: &str) -> Option<Chord> {
    let main = symbol.trim().split('/').next()?.trim();
    if main.is_empty() {
        return None;
    }

    // Symbols come from arbitrary external text, so walk chars rather than
    // bytes: a multibyte first character must not land us off a boundary.
    let mut chars = main.chars();
    let mut root_len = chars.next()?.len_utf8();
    if let Some(c) = chars.next() {
        if matches!(c, '#' | 'b' | '♯' | '♭') {
            root_len += c.len_utf8();
        }
    }
    let root = PitchClass::parse(&main[..root_len])?;

    let suffix = main[root_len..].trim();
    let quality = lookup_suffix(suffix);
    Some(Chord::new(root, quality))
}

fn lookup_suffix(suffix: &str) -> ChordQuality {
    // Longest-first table order makes prefix matching safe, and it also
    // catches extensions we do not model ("m9" reads as minor).
    for &(written, quality) in tables::QUALITY_SUFFIXES {
        if !written.is_empty() && suffix.starts_with(written) {
            return quality;
        }
    }
    ChordQuality::Major
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_and_suffixed_symbols() {
        let gm7 = parse_symbol("Gm7").unwrap();
        assert_eq!(gm7.root, PitchClass::parse("G").unwrap());
        assert_eq!(gm7.quality, ChordQuality::Minor7);

        let eb = parse_symbol("Eb").unwrap();
        assert_eq!(eb.root, PitchClass::parse("Eb").unwrap());
        assert_eq!(eb.quality, ChordQuality::Major);

        let fsharp_dim = parse_symbol("F#dim").unwrap();
        assert_eq!(fsharp_dim.quality, ChordQuality::Diminished);
    }

    #[test]
    fn slash_bass_is_ignored() {
        let chord = parse_symbol("C/E").unwrap();
        assert_eq!(chord.root, PitchClass::parse("C").unwrap());
        assert_eq!(chord.quality, ChordQuality::Major);
    }

    #[test]
    fn unknown_suffix_is_a_major_triad() {
        // The slash split leaves "C6", which reads as a sixth chord.
        let chord = parse_symbol("C6/9").unwrap();
        assert_eq!(chord.quality, ChordQuality::Major6);

        // "maj9" is not modeled; the "maj" prefix keeps it major.
        let cmaj9 = parse_symbol("Cmaj9").unwrap();
        assert_eq!(cmaj9.quality, ChordQuality::Major);

        let weird = parse_symbol("Galt").unwrap();
        assert_eq!(weird.quality, ChordQuality::Major);
    }

    #[test]
    fn unreadable_root_is_none() {
        assert_eq!(parse_symbol("Hm"), None);
        assert_eq!(parse_symbol(""), None);
        assert_eq!(parse_symbol("/G"), None);
    }

    #[test]
    fn unicode_accidentals_and_junk() {
        let eflat = parse_symbol("E♭m").unwrap();
        assert_eq!(eflat.root, PitchClass::parse("Eb").unwrap());
        assert_eq!(eflat.quality, ChordQuality::Minor);

        // A multibyte first character is unreadable, not a panic.
        assert_eq!(parse_symbol("♭B"), None);
        assert_eq!(parse_symbol("♪"), None);
    }
}
