//! The player screen model: `PlayerScreen` and `PlaybackState`.
//!
//! `PlayerScreen` holds the selected track, the liked list and the playback
//! state machine. It never touches a capability directly; operations that
//! need playback return a `PlayRequest` for the runtime to hand to the
//! audio thread, and completions come back through `on_audio_event`.

use std::time::Duration;

use crate::audio::{AudioEvent, InfoHandle, PlayRequest, RequestSeq, RequestToken};
use crate::library::{LikedList, TrackRef};
use crate::permission::PermissionStatus;
use crate::picker::{PickOutcome, PickResult};

/// Playback as the screen sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    /// A play request is in flight.
    Loading {
        track: TrackRef,
        token: RequestToken,
    },
    Playing {
        track: TrackRef,
        token: RequestToken,
        total: Option<Duration>,
    },
}

impl PlaybackState {
    pub fn track(&self) -> Option<&TrackRef> {
        match self {
            Self::Idle => None,
            Self::Loading { track, .. } | Self::Playing { track, .. } => Some(track),
        }
    }

    fn token(&self) -> Option<RequestToken> {
        match self {
            Self::Idle => None,
            Self::Loading { token, .. } | Self::Playing { token, .. } => Some(*token),
        }
    }
}

/// One-off messages shown in a popup until dismissed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Shown once after the startup permission request was denied.
    PermissionAdvisory,
    /// Browse was refused because permission enforcement is on.
    PermissionRequired,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Self::PermissionAdvisory => "Permission to access the media library is required!",
            Self::PermissionRequired => {
                "Browsing is disabled until the media library can be read."
            }
        }
    }
}

pub struct PlayerScreen {
    seq: RequestSeq,
    pub playback: PlaybackState,
    /// Most recent track produced by Browse; what Like acts on.
    pub current_track: Option<TrackRef>,
    pub liked: LikedList,
    /// Cursor into `liked`.
    pub selected: usize,
    pub notice: Option<Notice>,
    /// Pickers opened but not yet answered.
    pub pending_picks: usize,
    pub info_handle: Option<InfoHandle>,

    permission: Option<PermissionStatus>,
    advisory_shown: bool,
    enforce_permission: bool,
}

impl PlayerScreen {
    /// Create a screen issuing play tokens from `seq`.
    pub fn new(seq: RequestSeq) -> Self {
        Self {
            seq,
            playback: PlaybackState::Idle,
            current_track: None,
            liked: LikedList::new(),
            selected: 0,
            notice: None,
            pending_picks: 0,
            info_handle: None,
            permission: None,
            advisory_shown: false,
            enforce_permission: false,
        }
    }

    pub fn set_enforce_permission(&mut self, enforce: bool) {
        self.enforce_permission = enforce;
    }

    /// Attach the shared info used to show elapsed time.
    pub fn set_info_handle(&mut self, h: InfoHandle) {
        self.info_handle = Some(h);
    }

    /// Record the startup permission result. A denial raises the advisory
    /// notice the first time only.
    pub fn apply_permission(&mut self, status: PermissionStatus) {
        self.permission = Some(status);
        if status == PermissionStatus::Denied && !self.advisory_shown {
            self.advisory_shown = true;
            self.notice = Some(Notice::PermissionAdvisory);
        }
    }

    pub fn permission(&self) -> Option<PermissionStatus> {
        self.permission
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Whether the runtime may open a picker now.
    pub fn begin_browse(&mut self) -> bool {
        if self.enforce_permission && self.permission == Some(PermissionStatus::Denied) {
            tracing::info!("browse refused: media library permission denied");
            self.notice = Some(Notice::PermissionRequired);
            return false;
        }
        self.pending_picks += 1;
        true
    }

    /// Apply a picker result. A picked track becomes the current track and
    /// starts playing; cancellation and failure leave the state untouched.
    pub fn complete_browse(&mut self, result: PickResult) -> Option<PlayRequest> {
        self.pending_picks = self.pending_picks.saturating_sub(1);
        match result {
            Ok(PickOutcome::Picked(track)) => {
                tracing::info!(uri = %track.uri, name = %track.name, "track selected");
                self.current_track = Some(track.clone());
                Some(self.play(track))
            }
            Ok(PickOutcome::Cancelled) => {
                tracing::info!("file selection cancelled");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "file selection failed");
                None
            }
        }
    }

    /// Start a new play request for `track`, superseding any earlier one.
    pub fn play(&mut self, track: TrackRef) -> PlayRequest {
        let token = self.seq.issue();
        tracing::debug!(%token, uri = %track.uri, "play requested");
        self.playback = PlaybackState::Loading {
            track: track.clone(),
            token,
        };
        PlayRequest { token, track }
    }

    /// Add the current track to the liked list. Returns whether it was added.
    pub fn like_current(&mut self) -> bool {
        let added = self.liked.like(self.current_track.as_ref());
        if added {
            tracing::info!(count = self.liked.len(), "track liked");
        }
        added
    }

    /// Play the liked entry at `idx`. This does not change `current_track`.
    pub fn play_liked(&mut self, idx: usize) -> Option<PlayRequest> {
        let track = self.liked.get(idx)?.clone();
        self.selected = idx;
        Some(self.play(track))
    }

    pub fn play_selected_liked(&mut self) -> Option<PlayRequest> {
        self.play_liked(self.selected)
    }

    /// Move the liked-list cursor down, wrapping around.
    pub fn next(&mut self) {
        if !self.liked.is_empty() {
            self.selected = (self.selected + 1) % self.liked.len();
        }
    }

    /// Move the liked-list cursor up, wrapping around.
    pub fn prev(&mut self) {
        if !self.liked.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.liked.len() - 1);
        }
    }

    /// Apply the outcome of a play request. Events for anything but the
    /// latest request are ignored.
    pub fn on_audio_event(&mut self, event: AudioEvent) {
        if self.playback.token() != Some(event.token()) {
            tracing::debug!(token = %event.token(), "ignoring event for an old request");
            return;
        }

        match event {
            AudioEvent::Started { total, .. } => {
                self.playback = match std::mem::take(&mut self.playback) {
                    PlaybackState::Loading { track, token } => PlaybackState::Playing {
                        track,
                        token,
                        total,
                    },
                    other => other,
                };
            }
            AudioEvent::Failed { message, .. } => {
                if let Some(track) = self.playback.track() {
                    tracing::error!(uri = %track.uri, %message, "playback failed");
                }
                self.playback = PlaybackState::Idle;
            }
            AudioEvent::Superseded { token } => {
                tracing::debug!(%token, "request superseded");
            }
        }
    }

    /// Elapsed time of the live handle, when it belongs to the current request.
    pub fn elapsed(&self) -> Option<Duration> {
        let token = self.playback.token()?;
        let info = self.info_handle.as_ref()?.lock().ok()?;
        (info.token == Some(token)).then_some(info.elapsed)
    }

    /// Screen is going away; nothing is playing from here on.
    pub fn teardown(&mut self) {
        tracing::info!("player screen torn down");
        self.playback = PlaybackState::Idle;
    }
}
