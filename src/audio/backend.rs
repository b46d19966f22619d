use std::path::PathBuf;
use std::time::Duration;

use crate::library::TrackRef;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
}

/// Something that can turn a track reference into a loaded stream.
pub trait AudioBackend {
    type Handle: PlaybackHandle;

    /// Load `track` without starting it.
    fn load(&mut self, track: &TrackRef) -> Result<Self::Handle, PlaybackError>;
}

/// One loaded, possibly playing, audio stream.
pub trait PlaybackHandle {
    fn start(&mut self);
    fn set_volume(&self, volume: f32);
    fn volume(&self) -> f32;
    fn position(&self) -> Duration;
    fn total(&self) -> Option<Duration>;
    fn is_finished(&self) -> bool;
    /// Stop output and free the underlying resource.
    fn release(self);
}
