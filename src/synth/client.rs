//! Synthesis client
//!
//! One blocking POST of an SSML document to the service, returning the raw
//! WAV payload. No retry and no explicit timeout: whatever the HTTP client
//! does by default is inherited unmodified, and any service failure is
//! surfaced with the service's own diagnostics.

use crate::synth::SpeechConfig;
use crate::{AzttsError, Result};
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;

/// Requested audio container, a plain RIFF/WAV stream
const OUTPUT_FORMAT: &str = "riff-24khz-16bit-mono-pcm";

/// Client for the speech synthesis endpoint
pub struct Synthesizer {
    config: SpeechConfig,
    client: reqwest::blocking::Client,
}

impl Synthesizer {
    /// Create a synthesizer bound to one configuration
    pub fn new(config: SpeechConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()?;

        Ok(Self { config, client })
    }

    /// Synthesize one piece of text, blocking until the audio is complete
    ///
    /// Returns the service's WAV payload on success. Non-2xx responses
    /// become a [`AzttsError::Synthesis`] carrying the status code and the
    /// service's response body (auth failures, unknown voice, quota).
    pub fn synthesize(&self, text: &str) -> Result<SynthesisResult> {
        let ssml = self.config.ssml_for(text);
        debug!("SSML request body: {}", ssml);
        info!(
            "Requesting synthesis from {} with voice {}",
            self.config.endpoint(),
            self.config.voice()
        );

        let response = self
            .client
            .post(self.config.endpoint().clone())
            .header("Ocp-Apim-Subscription-Key", self.config.subscription_key())
            .header(CONTENT_TYPE, "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .body(ssml)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AzttsError::Synthesis(format!(
                "service returned {}: {}",
                status,
                body.trim()
            )));
        }

        let audio = response.bytes()?.to_vec();
        info!("Synthesis complete, {} bytes of audio", audio.len());

        Ok(SynthesisResult::new(audio))
    }
}

/// Outcome of one synthesis call
///
/// Owns the raw WAV payload. Consumed exactly once, either by playback or
/// by saving to a file.
#[derive(Debug)]
pub struct SynthesisResult {
    audio: Vec<u8>,
}

impl SynthesisResult {
    pub fn new(audio: Vec<u8>) -> Self {
        Self { audio }
    }

    /// Raw WAV payload
    pub fn audio(&self) -> &[u8] {
        &self.audio
    }

    /// Consume the result, taking ownership of the payload
    pub fn into_audio(self) -> Vec<u8> {
        self.audio
    }

    pub fn len(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}
