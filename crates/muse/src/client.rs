//! Thin HTTP client for a generateContent-style text API.
//!
//! One POST per generation, a single client-side timeout, no retries.

use std::time::Duration;

use cadenza_conf::LlmConfig;

use crate::error::MuseError;
use crate::types::{Content, GenerateRequest, GenerateResponse, GenerationConfig, Part};

pub struct MuseClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    generation_config: GenerationConfig,
}

impl MuseClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self, MuseError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(MuseClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            generation_config: GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
                ..GenerationConfig::default()
            },
        })
    }

    fn endpoint(&self) -> String {
        let mut url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        if let Some(key) = &self.api_key {
            url.push_str("?key=");
            url.push_str(key);
        }
        url
    }

    /// Send a single-turn prompt and return the model's text reply.
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    pub async fn generate_text(&self, prompt: &str) -> Result<String, MuseError> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.generation_config.clone(),
        };

        let response = self
            .http
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body: GenerateResponse = response.json().await?;

        if let Some(error) = body.error {
            return Err(MuseError::Api {
                code: error.code,
                message: error.message,
            });
        }
        if !status.is_success() {
            return Err(MuseError::Api {
                code: status.as_u16() as i64,
                message: format!("request failed with status {}", status),
            });
        }

        body.text()
            .map(|t| t.to_string())
            .ok_or(MuseError::EmptyResponse)
    }
}
