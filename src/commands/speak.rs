//! Speak command: synthesize a hadith's text to an audio file

use super::lookup::cmd_get;
use crate::error::Result;
use crate::retrieval::HadithRetrievalService;
use crate::speech::SpeechClient;
use crate::upstream::HadithSource;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Which hadith to speak
#[derive(Debug, Clone)]
pub enum SpeakTarget {
    Id(String),
    Random,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeakReport {
    pub hadith_id: String,
    pub output: PathBuf,
    pub bytes: usize,
}

pub async fn cmd_speak<S: HadithSource>(
    service: &HadithRetrievalService<S>,
    speech: &SpeechClient,
    target: SpeakTarget,
    output: &Path,
) -> Result<SpeakReport> {
    let record = match target {
        SpeakTarget::Id(id) => cmd_get(service, &id).await?,
        SpeakTarget::Random => service.random().await,
    };

    info!("Speaking {}", record.id);
    let audio = speech.synthesize(&record.primary_text).await?;
    std::fs::write(output, &audio)?;

    Ok(SpeakReport {
        hadith_id: record.id,
        output: output.to_path_buf(),
        bytes: audio.len(),
    })
}

pub fn print_speak_report(report: &SpeakReport) {
    println!(
        "✓ Wrote {} bytes of audio for {} to {}",
        report.bytes,
        report.hadith_id,
        report.output.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::upstream::HttpSource;
    use tempfile::TempDir;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_speak_random_writes_audio() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-api-key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xFB, 0x90]))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.random.collections.clear();
        config.speech.endpoint = format!("{}/tts", server.uri());

        let source = HttpSource::new(&config.api).unwrap();
        let service = HadithRetrievalService::new(source, &config);
        let speech = SpeechClient::new(&config.speech, Some("secret".to_string())).unwrap();

        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out.mp3");
        let report = cmd_speak(&service, &speech, SpeakTarget::Random, &output)
            .await
            .unwrap();

        assert_eq!(report.hadith_id, "fallback-1");
        assert_eq!(report.bytes, 3);
        assert_eq!(std::fs::read(&output).unwrap(), vec![0xFF, 0xFB, 0x90]);
    }
}
