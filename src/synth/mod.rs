//! Speech synthesis against the Azure Speech REST endpoint

pub mod client;
pub mod config;
pub mod output;

pub use client::{SynthesisResult, Synthesizer};
pub use config::SpeechConfig;
