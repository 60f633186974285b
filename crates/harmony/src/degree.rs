//! Roman-numeral resolution against a key's diatonic tables.

use crate::tables;
use crate::types::{Chord, Key, KeyMode, ScaleDegree};

/// Resolve a scale degree to a concrete chord in the given key.
///
/// The root comes from the mode's scale-interval table applied to the tonic.
/// The quality comes from the mode's fixed diatonic quality table; the
/// degree's written case is advisory only and never overrides the table.
/// Degrees outside 1..=7 resolve to the tonic.
pub fn resolve_degree(key: Key, degree: ScaleDegree) -> Chord {
    let index = if (1..=7).contains(&degree.degree) {
        (degree.degree - 1) as usize
    } else {
        0
    };

    let root = key.tonic.transpose(key.scale_intervals()[index]);
    let quality = match key.mode {
        KeyMode::Major => tables::MAJOR_DEGREE_QUALITIES[index],
        KeyMode::Minor => tables::MINOR_DEGREE_QUALITIES[index],
    };

    if degree.written_minor != matches!(quality, crate::types::ChordQuality::Minor) {
        tracing::debug!(
            degree = degree.degree,
            written_minor = degree.written_minor,
            ?quality,
            "degree case disagrees with mode table, table wins"
        );
    }

    Chord::new(root, quality)
}
