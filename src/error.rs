//! Application-wide error type.
//!
//! Subsystems keep their own `thiserror` enums (`PickError`, `PlaybackError`)
//! for the failures the screen reacts to. Everything that can stop the
//! program at startup or shutdown funnels into [`Error`].

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The log file or subscriber could not be set up
    #[error("Logging error for {path}: {message}")]
    Logging { path: PathBuf, message: String },

    /// No usable audio output device
    #[error("Audio device error: {0}")]
    AudioDevice(String),
}

impl Error {
    pub fn logging(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Logging {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn audio_device(message: impl Into<String>) -> Self {
        Self::AudioDevice(message.into())
    }
}
