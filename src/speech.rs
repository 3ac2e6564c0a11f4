//! Text-to-speech client.
//!
//! Accepts text and returns the synthesized audio bytes (MPEG).

use crate::config::SpeechConfig;
use crate::error::{Error, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice_id: &'a str,
    speed: f32,
}

pub struct SpeechClient {
    client: Client,
    config: SpeechConfig,
    api_key: Option<String>,
}

impl SpeechClient {
    pub fn new(config: &SpeechConfig, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Client using the API key named by `config.api_key_env`
    pub fn from_env(config: &SpeechConfig) -> Result<Self> {
        Self::new(config, config.api_key())
    }

    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        if text.trim().is_empty() {
            return Err(Error::Speech("Missing required field: text".to_string()));
        }

        let api_key = self.api_key.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "Speech API key not configured (set {})",
                self.config.api_key_env
            ))
        })?;

        let input = truncate_for_speech(text, self.config.max_chars);
        debug!(
            "Synthesizing {} characters with voice {}",
            input.chars().count(),
            self.config.voice_id
        );

        let request = SpeechRequest {
            model: &self.config.model,
            input: &input,
            voice_id: &self.config.voice_id,
            speed: self.config.speed,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("x-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Speech(format!("HTTP {}: {}", status, body)));
        }

        let audio = response.bytes().await?;
        info!("Audio generated, {} bytes", audio.len());
        Ok(audio.to_vec())
    }
}

/// Keep at most `max_chars` characters, cutting on a grapheme boundary so
/// Arabic diacritics stay attached, and mark the cut with `...`.
pub fn truncate_for_speech(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut kept = String::new();
    let mut count = 0;
    for grapheme in text.graphemes(true) {
        let len = grapheme.chars().count();
        if count + len > max_chars {
            break;
        }
        kept.push_str(grapheme);
        count += len;
    }
    kept.push_str("...");
    kept
}
