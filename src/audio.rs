//! Audio playback subsystem.
//!
//! A dedicated thread owns the output stream and at most one live
//! [`PlaybackHandle`]. The UI talks to it through [`AudioPlayer`]: play
//! requests go in as [`AudioCmd`]s tagged with a [`RequestToken`], and
//! [`AudioEvent`]s come back saying how each request ended.

mod backend;
mod engine;
mod player;
mod sink;
mod thread;
mod types;

pub use backend::{AudioBackend, PlaybackError, PlaybackHandle};
pub use engine::Engine;
pub use player::AudioPlayer;
pub use types::*;

#[cfg(test)]
pub(crate) mod testing;
