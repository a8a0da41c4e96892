//! aztts - Azure Speech text-to-speech from the command line
//!
//! Sends text to the Azure Cognitive Services Speech REST endpoint and
//! either plays the synthesized audio on the default output device or
//! saves it to a WAV file.

pub mod cli;
pub mod error;
pub mod synth;

pub use error::{AzttsError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "aztts";
