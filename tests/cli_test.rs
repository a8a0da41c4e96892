//! Option-routing contract tests
//!
//! Verifies the CLI surface: required options fail fast, the voice
//! default applies, and the presence of --out deterministically selects
//! between file capture and device playback.

use aztts::cli::{Cli, PlaybackTarget, DEFAULT_VOICE};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("aztts").chain(args.iter().copied()))
}

#[test]
fn test_missing_required_options_fail_fast() {
    // Each of endpoint, subscription, and text is required
    assert!(parse(&["-s", "KEY", "-t", "hello"]).is_err());
    assert!(parse(&["-e", "https://example.com", "-t", "hello"]).is_err());
    assert!(parse(&["-e", "https://example.com", "-s", "KEY"]).is_err());
    assert!(parse(&[]).is_err());
}

#[test]
fn test_voice_defaults_when_omitted() {
    let cli = parse(&["-e", "https://example.com", "-s", "KEY", "-t", "hello"])
        .expect("required options given");
    assert_eq!(cli.voicename, DEFAULT_VOICE);
    assert_eq!(cli.voicename, "zh-CN-XiaomoNeural");
}

#[test]
fn test_voice_override() {
    let cli = parse(&[
        "--endpoint",
        "https://example.com",
        "--subscription",
        "KEY",
        "--text",
        "hello",
        "--voicename",
        "en-US-JennyNeural",
    ])
    .expect("required options given");
    assert_eq!(cli.voicename, "en-US-JennyNeural");
}

#[test]
fn test_out_absent_selects_device_playback() {
    let cli = parse(&["-e", "https://example.com", "-s", "KEY", "-t", "hello"])
        .expect("required options given");
    assert_eq!(cli.playback_target(), PlaybackTarget::Device);
}

#[test]
fn test_out_present_selects_file_capture() {
    let cli = parse(&[
        "-e",
        "https://example.com",
        "-s",
        "KEY",
        "-t",
        "hello",
        "-o",
        "speech.wav",
    ])
    .expect("required options given");
    assert_eq!(
        cli.playback_target(),
        PlaybackTarget::File(PathBuf::from("speech.wav"))
    );
}

#[test]
fn test_echo_line_contains_options_but_not_the_key() {
    let cli = parse(&[
        "-e",
        "https://example.cognitiveservices.azure.com",
        "-s",
        "KEY",
        "-t",
        "hello",
    ])
    .expect("required options given");

    let echo = cli.echo_line();
    assert!(echo.contains("endpoint https://example.cognitiveservices.azure.com"));
    assert!(echo.contains("voice_name zh-CN-XiaomoNeural"));
    assert!(echo.contains("text hello"));
    assert!(echo.contains("out None"));
    // The subscription key itself must never appear
    assert!(!echo.contains("KEY"));
    assert!(echo.contains("subscription ***"));
}

#[test]
fn test_echo_line_shows_out_path() {
    let cli = parse(&[
        "-e",
        "https://example.com",
        "-s",
        "KEY",
        "-t",
        "hello",
        "-o",
        "result.wav",
    ])
    .expect("required options given");
    assert!(cli.echo_line().contains("out result.wav"));
}
