//! Audio output routing
//!
//! The two destinations for a synthesis result: the default output device,
//! or a WAV file on disk.

use crate::synth::SynthesisResult;
use crate::{AzttsError, Result};
use log::{debug, info};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Play a synthesis result on the default audio output device
///
/// Blocks until playback finishes.
pub fn play(result: SynthesisResult) -> Result<()> {
    debug!("Opening default audio output device");
    let stream = rodio::OutputStreamBuilder::open_default_stream()
        .map_err(|e| AzttsError::Playback(format!("failed to open output device: {}", e)))?;
    let sink = rodio::Sink::connect_new(stream.mixer());

    let source = rodio::Decoder::new(Cursor::new(result.into_audio()))
        .map_err(|e| AzttsError::Playback(format!("failed to decode audio: {}", e)))?;

    sink.append(source);
    sink.sleep_until_end();
    info!("Playback finished");

    Ok(())
}

/// Save a synthesis result as a WAV file
///
/// The payload is already a complete RIFF/WAV stream, so this is a single
/// write; the file handle is closed on both success and failure. The write
/// is not atomic.
pub fn save_to_wav_file(result: SynthesisResult, path: &Path) -> Result<()> {
    fs::write(path, result.audio())?;
    info!("Wrote {} bytes to {}", result.len(), path.display());

    Ok(())
}
