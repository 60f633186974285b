//! The progression selector: prompt in, five progressions out.

use serde::{Deserialize, Serialize};

use crate::degree::resolve_degree;
use crate::prompt;
use crate::tables;
use crate::types::{Key, KeyMode, Progression};

/// How many progressions a single generation always produces.
pub const PROGRESSION_COUNT: usize = 5;

/// The only chord counts the generator recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionLength {
    Four,
    Eight,
    Sixteen,
}

impl ProgressionLength {
    pub fn as_usize(self) -> usize {
        match self {
            ProgressionLength::Four => 4,
            ProgressionLength::Eight => 8,
            ProgressionLength::Sixteen => 16,
        }
    }
}

impl TryFrom<u8> for ProgressionLength {
    type Error = InvalidLength;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(ProgressionLength::Four),
            8 => Ok(ProgressionLength::Eight),
            16 => Ok(ProgressionLength::Sixteen),
            other => Err(InvalidLength(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("chord count must be 4, 8 or 16, got {0}")]
pub struct InvalidLength(pub u8);

fn patterns_for(key: Key) -> &'static [&'static [crate::types::ScaleDegree]] {
    match key.mode {
        KeyMode::Major => tables::MAJOR_PATTERNS,
        KeyMode::Minor => tables::MINOR_PATTERNS,
    }
}

/// Generate exactly [`PROGRESSION_COUNT`] progressions for a prompt.
///
/// Pure and total: every input produces a result, and the same prompt always
/// produces the same output. Progression `i` uses degree pattern
/// `i % patterns.len()` for the inferred mode, cycled to fill the requested
/// chord count.
pub fn generate_progressions(prompt_text: &str, length: ProgressionLength) -> Vec<Progression> {
    let hints = prompt::infer(prompt_text);
    let key = hints.key;
    let patterns = patterns_for(key);
    let count = length.as_usize();

    (0..PROGRESSION_COUNT)
        .map(|i| {
            let pattern = patterns[i % patterns.len()];
            let chords = (0..count)
                .map(|j| resolve_degree(key, pattern[j % pattern.len()]))
                .collect();
            Progression {
                description: format!(
                    "Progression {} in {}: {}",
                    i + 1,
                    key.name(),
                    hints.mood.adjective()
                ),
                key,
                chords,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn symbols(progression: &Progression) -> Vec<String> {
        let use_flats = progression.key.use_flats();
        progression
            .chords
            .iter()
            .map(|c| c.symbol(use_flats))
            .collect()
    }

    #[test]
    fn always_five_progressions_of_the_requested_count() {
        for length in [
            ProgressionLength::Four,
            ProgressionLength::Eight,
            ProgressionLength::Sixteen,
        ] {
            let result = generate_progressions("anything at all", length);
            assert_eq!(result.len(), PROGRESSION_COUNT);
            for p in &result {
                assert_eq!(p.chords.len(), length.as_usize());
                assert!(!p.description.is_empty());
            }
        }
    }

    #[test]
    fn deterministic_pattern_assignment() {
        let a = generate_progressions("dark waves", ProgressionLength::Eight);
        let b = generate_progressions("dark waves", ProgressionLength::Eight);
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.chords, pb.chords);
            assert_eq!(pa.description, pb.description);
        }
    }

    #[test]
    fn progression_i_uses_pattern_i_mod_len() {
        let result = generate_progressions("dark waves", ProgressionLength::Four);
        let key = result[0].key;
        for (i, progression) in result.iter().enumerate() {
            let pattern = tables::MINOR_PATTERNS[i % tables::MINOR_PATTERNS.len()];
            let expected: Vec<_> = (0..4)
                .map(|j| resolve_degree(key, pattern[j % pattern.len()]))
                .collect();
            assert_eq!(progression.chords, expected, "progression {}", i);
        }
    }

    #[test]
    fn mellow_intro_in_g_minor() {
        let result = generate_progressions("mellow intro in G minor", ProgressionLength::Four);
        assert_eq!(symbols(&result[0]), vec!["Gm", "Eb", "F", "Gm"]);
    }

    #[test]
    fn bright_pop_defaults_to_c_major() {
        let result = generate_progressions("bright pop", ProgressionLength::Four);
        assert_eq!(symbols(&result[0]), vec!["C", "G", "Am", "F"]);
    }

    #[test]
    fn short_patterns_cycle_to_sixteen_chords() {
        let result = generate_progressions("bright pop", ProgressionLength::Sixteen);
        let first = symbols(&result[0]);
        // Pattern length 4, so positions 0..4 repeat exactly.
        assert_eq!(&first[0..4], &first[4..8]);
        assert_eq!(&first[0..4], &first[12..16]);
    }

    #[test]
    fn invalid_length_is_rejected_before_the_core() {
        assert!(ProgressionLength::try_from(4).is_ok());
        assert!(ProgressionLength::try_from(12).is_err());
        assert_eq!(
            ProgressionLength::try_from(3).unwrap_err().to_string(),
            "chord count must be 4, 8 or 16, got 3"
        );
    }
}
