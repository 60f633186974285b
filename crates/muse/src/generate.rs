//! Assisted generation: ask the model, repair what comes back, and fall
//! back to the rule-based generator whenever anything goes wrong.

use harmony::{
    generate_progressions, parse_symbol, Chord, Progression, ProgressionLength, PROGRESSION_COUNT,
};

use crate::client::MuseClient;
use crate::error::MuseError;
use crate::extract::extract_json_array;
use crate::maintenance::MaintenanceSwitch;
use crate::types::AiProgression;

pub struct AssistedGenerator {
    client: MuseClient,
    maintenance: MaintenanceSwitch,
}

impl AssistedGenerator {
    pub fn new(client: MuseClient, maintenance: MaintenanceSwitch) -> Self {
        AssistedGenerator {
            client,
            maintenance,
        }
    }

    /// Generate progressions with model assistance.
    ///
    /// Infallible by design: a suspended service, a timeout, an API error,
    /// or an unreadable reply all produce the deterministic output for the
    /// same prompt and length. The result always has exactly
    /// [`PROGRESSION_COUNT`] progressions of exactly the requested count.
    pub async fn generate(&self, prompt: &str, length: ProgressionLength) -> Vec<Progression> {
        if self.maintenance.is_engaged() {
            tracing::info!("assisted generation suspended, using rule-based generator");
            return generate_progressions(prompt, length);
        }

        match self.try_assisted(prompt, length).await {
            Ok(progressions) => progressions,
            Err(err) => {
                tracing::warn!(error = %err, "assisted generation failed, falling back");
                generate_progressions(prompt, length)
            }
        }
    }

    async fn try_assisted(
        &self,
        prompt: &str,
        length: ProgressionLength,
    ) -> Result<Vec<Progression>, MuseError> {
        let instruction = build_instruction(prompt, length);
        let reply = self.client.generate_text(&instruction).await?;

        let json = extract_json_array(&reply).ok_or(MuseError::Unparseable)?;
        let entries: Vec<AiProgression> =
            serde_json::from_str(json).map_err(|_| MuseError::Unparseable)?;

        Ok(repair(prompt, length, entries))
    }
}

/// The instruction sent to the model: the exact JSON shape, the progression
/// count, and the requested chord count.
fn build_instruction(prompt: &str, length: ProgressionLength) -> String {
    format!(
        "You are a professional music theory expert. Generate exactly {count} chord \
         progressions of exactly {chords} chords each, based on the user's prompt.\n\
         \n\
         Respond with a JSON array only, in this shape:\n\
         [{{ \"description\": string, \"chords\": [{{ \"name\": string, \"notes\": [string] }}] }}]\n\
         \n\
         Each chord name must use standard notation (e.g. Am7, F#dim, Bb). \
         The progressions should be musically logical and fit the mood of the prompt.\n\
         \n\
         User prompt: {prompt}",
        count = PROGRESSION_COUNT,
        chords = length.as_usize(),
    )
}

/// Turn model output into well-formed progressions.
///
/// Chord names are re-parsed through the theory tables so note spellings
/// are always recomputed rather than trusted. Entries with no readable
/// chords are dropped; progressions are cycled or truncated to the
/// requested count; missing entries are backfilled from the rule-based
/// generator for the same prompt.
fn repair(
    prompt: &str,
    length: ProgressionLength,
    entries: Vec<AiProgression>,
) -> Vec<Progression> {
    let hints = harmony::infer(prompt);
    let count = length.as_usize();

    let mut progressions: Vec<Progression> = entries
        .into_iter()
        .filter_map(|entry| {
            let chords: Vec<Chord> = entry
                .chords
                .iter()
                .filter_map(|c| parse_symbol(&c.name))
                .collect();
            if chords.is_empty() {
                tracing::debug!("dropping progression with no readable chords");
                return None;
            }
            let filled = (0..count).map(|i| chords[i % chords.len()]).collect();
            Some(Progression {
                description: entry
                    .description
                    .unwrap_or_else(|| format!("Suggested in {}", hints.key.name())),
                key: hints.key,
                chords: filled,
            })
        })
        .take(PROGRESSION_COUNT)
        .collect();

    let kept = progressions.len();
    if kept < PROGRESSION_COUNT {
        let fallback = generate_progressions(prompt, length);
        progressions.extend(fallback.into_iter().skip(kept));
    }

    progressions
}
