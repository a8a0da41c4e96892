//! Command-line interface
//!
//! A single command with five options. The option set mirrors the speech
//! service's own vocabulary: endpoint, subscription key, voice name, input
//! text, and an optional output file. When no output file is given the
//! audio goes to the default output device instead.

use clap::Parser;
use std::path::PathBuf;

/// Default voice used when `--voicename` is omitted
pub const DEFAULT_VOICE: &str = "zh-CN-XiaomoNeural";

/// Command-line options
#[derive(Parser, Debug, Clone)]
#[command(
    name = "aztts",
    version,
    about = "Synthesize speech with the Azure Speech service",
    long_about = "Synthesize speech with the Azure Speech service.\n\n\
                  Plays the result on the default output device, or writes \
                  it to a WAV file when --out is given."
)]
pub struct Cli {
    /// Speech service endpoint URI (e.g. https://eastasia.tts.speech.microsoft.com)
    #[arg(short = 'e', long)]
    pub endpoint: String,

    /// Speech service subscription key
    #[arg(short = 's', long)]
    pub subscription: String,

    /// Voice used for synthesis
    #[arg(short = 'v', long, default_value = DEFAULT_VOICE)]
    pub voicename: String,

    /// Text to synthesize
    #[arg(short = 't', long)]
    pub text: String,

    /// Destination WAV file; when absent, play on the default device
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,
}

impl Cli {
    /// Diagnostic echo of the received options
    ///
    /// The subscription key is redacted; everything else is shown verbatim.
    pub fn echo_line(&self) -> String {
        let out = match &self.out {
            Some(path) => path.display().to_string(),
            None => "None".to_string(),
        };
        format!(
            "endpoint {}, subscription {}, voice_name {}, text {}, out {}",
            self.endpoint,
            redact_key(&self.subscription),
            self.voicename,
            self.text,
            out
        )
    }

    /// Playback target selected by the presence of `--out`
    pub fn playback_target(&self) -> PlaybackTarget {
        PlaybackTarget::from_out(self.out.clone())
    }
}

/// Where the synthesized audio goes
///
/// Selected exactly once at startup; the two variants are mutually
/// exclusive and every consumer matches exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackTarget {
    /// Play on the default audio output device
    Device,
    /// Write to a WAV file at this path
    File(PathBuf),
}

impl PlaybackTarget {
    /// Map the optional `--out` value to a target
    pub fn from_out(out: Option<PathBuf>) -> Self {
        match out {
            Some(path) => PlaybackTarget::File(path),
            None => PlaybackTarget::Device,
        }
    }
}

/// Redact a subscription key for display
///
/// Long keys keep a short prefix so the user can tell which key was
/// picked up; short keys are masked entirely.
fn redact_key(key: &str) -> String {
    const VISIBLE: usize = 4;

    if key.chars().count() > VISIBLE * 2 {
        let prefix: String = key.chars().take(VISIBLE).collect();
        format!("{}***", prefix)
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_short_key() {
        assert_eq!(redact_key("KEY"), "***");
        assert_eq!(redact_key(""), "***");
    }

    #[test]
    fn test_redact_long_key_keeps_prefix() {
        let redacted = redact_key("0123456789abcdef");
        assert_eq!(redacted, "0123***");
        assert!(!redacted.contains("456789abcdef"));
    }

    #[test]
    fn test_playback_target_from_out() {
        assert_eq!(PlaybackTarget::from_out(None), PlaybackTarget::Device);
        assert_eq!(
            PlaybackTarget::from_out(Some(PathBuf::from("speech.wav"))),
            PlaybackTarget::File(PathBuf::from("speech.wav"))
        );
    }
}
