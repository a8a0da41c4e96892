//! Error types for aztts

use std::io;
use thiserror::Error;

/// Main error type for aztts
#[derive(Error, Debug)]
pub enum AzttsError {
    #[error("Invalid endpoint: {0}")]
    Endpoint(String),

    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for aztts operations
pub type Result<T> = std::result::Result<T, AzttsError>;
