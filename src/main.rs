//! aztts main entry point
//!
//! Parses the five command-line options, builds a synthesis configuration,
//! makes exactly one blocking synthesis request, and routes the audio to
//! the default output device or to a WAV file.

use aztts::cli::{Cli, PlaybackTarget};
use aztts::synth::{output, SpeechConfig, Synthesizer};
use aztts::Result;
use clap::Parser;
use log::{debug, error};
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    // Missing required options fail here, before any network work
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    println!("{}", cli.echo_line());

    let mut config = SpeechConfig::from_endpoint(&cli.endpoint, &cli.subscription)?;
    config.set_voice(&cli.voicename);

    let target = cli.playback_target();
    debug!("Playback target: {:?}", target);

    let synthesizer = Synthesizer::new(config)?;
    let result = synthesizer.synthesize(&cli.text)?;

    match target {
        PlaybackTarget::Device => {
            output::play(result)?;
            println!("output to the default speaker");
        }
        PlaybackTarget::File(path) => {
            output::save_to_wav_file(result, &path)?;
            println!("save_to_wav_file: {}", path.display());
        }
    }

    Ok(())
}
