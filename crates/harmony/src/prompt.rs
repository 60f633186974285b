//! Free-text prompt inference: mood keywords and an optional explicit key.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tables;
use crate::types::{Key, KeyMode, PitchClass};

/// Mood read off the prompt, used for mode inference and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Melancholy,
    Uplifting,
    Neutral,
}

impl Mood {
    pub fn adjective(self) -> &'static str {
        match self {
            Mood::Melancholy => "melancholy",
            Mood::Uplifting => "uplifting",
            Mood::Neutral => "versatile",
        }
    }
}

/// Everything the selector needs from the prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptHints {
    pub key: Key,
    pub mood: Mood,
}

/// A note letter with an explicit mode word ("G minor", "F# maj").
fn keyed_mode_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([A-Ga-g])\s*([#b♯♭])?\s+(?i:(major|minor|maj|min))\b").unwrap()
    })
}

/// An uppercase note letter with an explicit accidental ("Bb", "F#") and no
/// mode word. Bare letters are not treated as keys: too many English words
/// start with A-G.
fn keyed_accidental_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([A-G])([#b♯♭])(?:\s|$|[,.!?])").unwrap())
}

/// Infer key and mood from a free-text prompt.
///
/// Keyword scan is case-insensitive; minor keywords win when both moods
/// appear. An explicit key token overrides the keyword-derived mode when it
/// carries its own mode word. Defaults to C major.
pub fn infer(prompt: &str) -> PromptHints {
    let lower = prompt.to_lowercase();

    let mood = if tables::MINOR_MOOD_WORDS.iter().any(|w| lower.contains(w)) {
        Mood::Melancholy
    } else if tables::MAJOR_MOOD_WORDS.iter().any(|w| lower.contains(w)) {
        Mood::Uplifting
    } else {
        Mood::Neutral
    };

    let mood_mode = match mood {
        Mood::Melancholy => KeyMode::Minor,
        Mood::Uplifting => KeyMode::Major,
        Mood::Neutral => KeyMode::Major,
    };

    let key = if let Some(caps) = keyed_mode_re().captures(prompt) {
        let spelled = format!(
            "{}{}",
            caps.get(1).map(|m| m.as_str()).unwrap_or("C"),
            caps.get(2).map(|m| m.as_str()).unwrap_or("")
        );
        let tonic = PitchClass::parse(&spelled).unwrap_or(PitchClass::C);
        let mode = match caps.get(3).map(|m| m.as_str().to_lowercase()) {
            Some(word) if word.starts_with("min") => KeyMode::Minor,
            Some(_) => KeyMode::Major,
            None => mood_mode,
        };
        Key::new(tonic, mode)
    } else if let Some(caps) = keyed_accidental_re().captures(prompt) {
        let spelled = format!("{}{}", &caps[1], &caps[2]);
        let tonic = PitchClass::parse(&spelled).unwrap_or(PitchClass::C);
        Key::new(tonic, mood_mode)
    } else {
        Key::new(PitchClass::C, mood_mode)
    };

    tracing::debug!(key = %key.name(), ?mood, "inferred prompt hints");

    PromptHints { key, mood }
}
