//! Synthesis configuration
//!
//! Binds the service endpoint and subscription key to a voice, and renders
//! the SSML document the synthesis endpoint expects. One configuration is
//! built per invocation and never reused.

use crate::{AzttsError, Result};
use log::debug;
use reqwest::Url;

/// Path of the REST synthesis endpoint on a regional speech host
const SYNTHESIS_PATH: &str = "/cognitiveservices/v1";

/// Configuration for one synthesis request
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Full URL of the synthesis endpoint
    endpoint: Url,

    /// Subscription key, sent as `Ocp-Apim-Subscription-Key`
    subscription_key: String,

    /// Voice name, e.g. `zh-CN-XiaomoNeural`
    voice: String,
}

impl SpeechConfig {
    /// Create a configuration from an endpoint URI and subscription key
    ///
    /// The endpoint may be either a bare regional host
    /// (`https://eastasia.tts.speech.microsoft.com`) or a full synthesis
    /// URL; a bare host gets the standard `/cognitiveservices/v1` path
    /// appended. The voice starts out empty and must be set with
    /// [`set_voice`](Self::set_voice) before building SSML.
    pub fn from_endpoint(endpoint: &str, subscription_key: &str) -> Result<Self> {
        let endpoint = normalize_endpoint(endpoint)?;
        debug!("Synthesis endpoint: {}", endpoint);

        Ok(Self {
            endpoint,
            subscription_key: subscription_key.to_string(),
            voice: String::new(),
        })
    }

    /// Select the synthesis voice
    pub fn set_voice(&mut self, voice: &str) {
        self.voice = voice.to_string();
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn subscription_key(&self) -> &str {
        &self.subscription_key
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    /// Render the SSML document for one piece of input text
    ///
    /// Produces the minimal single-voice envelope the synthesis endpoint
    /// accepts. The text is XML-escaped; no other SSML features are used.
    pub fn ssml_for(&self, text: &str) -> String {
        format!(
            "<speak version='1.0' xml:lang='{}'><voice name='{}'>{}</voice></speak>",
            voice_locale(&self.voice),
            escape_xml(&self.voice),
            escape_xml(text)
        )
    }
}

/// Parse and normalize an endpoint URI
fn normalize_endpoint(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| AzttsError::Endpoint(format!("{}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AzttsError::Endpoint(format!(
                "{}: unsupported scheme '{}'",
                raw, scheme
            )));
        }
    }

    if url.path() == "/" || url.path().is_empty() {
        url.set_path(SYNTHESIS_PATH);
    }

    Ok(url)
}

/// Locale portion of a voice name (`zh-CN-XiaomoNeural` -> `zh-CN`)
///
/// Falls back to `en-US` for names that don't carry a locale prefix.
fn voice_locale(voice: &str) -> String {
    let mut parts = voice.splitn(3, '-');
    match (parts.next(), parts.next()) {
        (Some(lang), Some(region)) if !lang.is_empty() && !region.is_empty() => {
            format!("{}-{}", lang, region)
        }
        _ => "en-US".to_string(),
    }
}

/// Escape text for inclusion in an SSML document
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
