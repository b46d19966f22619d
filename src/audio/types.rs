//! Audio-related small types and handles.
//!
//! Commands and events exchanged with the audio thread, the request token
//! sequence that orders play requests, and the playback info shared with the UI.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::library::TrackRef;

/// Identifies one play request. Later requests carry larger tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic token counter shared by the screen (which issues tokens) and
/// the audio engine (which refuses to commit anything but the latest).
#[derive(Debug, Clone, Default)]
pub struct RequestSeq(Arc<AtomicU64>);

impl RequestSeq {
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn latest(&self) -> RequestToken {
        RequestToken(self.0.load(Ordering::SeqCst))
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest() == token
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRequest {
    pub token: RequestToken,
    pub track: TrackRef,
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Release the current handle, then load and start `track`.
    Play(PlayRequest),
    /// Quit the audio thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// How a play request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioEvent {
    Started {
        token: RequestToken,
        total: Option<Duration>,
    },
    Failed {
        token: RequestToken,
        message: String,
    },
    /// A newer request was issued before this one could commit.
    Superseded { token: RequestToken },
}

impl AudioEvent {
    pub fn token(&self) -> RequestToken {
        match self {
            Self::Started { token, .. } | Self::Failed { token, .. } | Self::Superseded { token } => {
                *token
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Runtime playback information shared with the UI.
pub struct PlaybackInfo {
    /// Token of the live handle, if any.
    pub token: Option<RequestToken>,
    /// Position within the live handle.
    pub elapsed: Duration,
    /// Whether the live handle is still producing audio.
    pub playing: bool,
}

pub type InfoHandle = Arc<Mutex<PlaybackInfo>>;
