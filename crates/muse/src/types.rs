//! Wire types for the generateContent-style API and the progression JSON
//! shape the model is asked to produce.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            temperature: 0.8,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 400,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl GenerateResponse {
    /// The first candidate's text, if any.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}

/// One progression as the model is instructed to emit it.
///
/// Every field is optional in practice: prose-wrapped, partially filled
/// responses are the norm, and the generator repairs what it can.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiProgression {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub chords: Vec<AiChord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiChord {
    pub name: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn response_text_digs_through_candidates() {
        let raw = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "hello" }] } }
            ]
        }"#;
        let resp: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.text(), Some("hello"));
        assert!(resp.error.is_none());
    }

    #[test]
    fn api_error_body_parses() {
        let raw = r#"{ "error": { "code": 429, "message": "quota" } }"#;
        let resp: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.text().is_none());
        assert_eq!(resp.error.unwrap().code, 429);
    }

    #[test]
    fn ai_progression_tolerates_missing_fields() {
        let raw = r#"[{ "chords": [{ "name": "Gm" }] }]"#;
        let parsed: Vec<AiProgression> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].description.is_none());
        assert!(parsed[0].chords[0].notes.is_empty());
    }
}
