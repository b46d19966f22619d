use std::thread;
use std::time::Duration;

use super::backend::{AudioBackend, PlaybackHandle};
use super::types::{AudioEvent, InfoHandle, PlayRequest, PlaybackInfo, RequestSeq, RequestToken};

struct Active<H> {
    token: RequestToken,
    handle: H,
}

/// Owner of the single live playback handle.
///
/// Every mutation of the handle goes through `play`, `tick` or `shutdown`,
/// and the audio thread calls them one command at a time.
pub struct Engine<B: AudioBackend> {
    backend: B,
    seq: RequestSeq,
    info: InfoHandle,
    fade_steps: u64,
    active: Option<Active<B::Handle>>,
}

impl<B: AudioBackend> Engine<B> {
    pub fn new(backend: B, seq: RequestSeq, info: InfoHandle, fade_steps: u64) -> Self {
        Self {
            backend,
            seq,
            info,
            fade_steps: fade_steps.max(1),
            active: None,
        }
    }

    /// Token of the live handle, if any.
    pub fn live_token(&self) -> Option<RequestToken> {
        self.active.as_ref().map(|a| a.token)
    }

    /// Replace whatever is playing with `request.track`.
    ///
    /// The old handle is released before the new one is loaded. A request
    /// whose token is no longer the latest never commits: it is skipped if
    /// stale on arrival, and its freshly loaded handle is released if a newer
    /// request was issued while it loaded.
    pub fn play(&mut self, request: PlayRequest) -> AudioEvent {
        let PlayRequest { token, track } = request;
        self.release_active();

        if !self.seq.is_latest(token) {
            tracing::debug!(%token, uri = %track.uri, "skipping stale play request");
            return AudioEvent::Superseded { token };
        }

        let mut handle = match self.backend.load(&track) {
            Ok(h) => h,
            Err(e) => {
                tracing::error!(%token, uri = %track.uri, error = %e, "failed to load track");
                return AudioEvent::Failed {
                    token,
                    message: e.to_string(),
                };
            }
        };

        if !self.seq.is_latest(token) {
            tracing::debug!(%token, uri = %track.uri, "newer request issued during load; releasing");
            handle.release();
            return AudioEvent::Superseded { token };
        }

        handle.start();
        let total = handle.total();
        self.active = Some(Active { token, handle });
        self.publish(PlaybackInfo {
            token: Some(token),
            elapsed: Duration::ZERO,
            playing: true,
        });
        tracing::info!(%token, uri = %track.uri, "playback started");

        AudioEvent::Started { token, total }
    }

    /// Refresh the shared playback info from the live handle.
    pub fn tick(&mut self) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let info = PlaybackInfo {
            token: Some(active.token),
            elapsed: active.handle.position(),
            playing: !active.handle.is_finished(),
        };
        self.publish(info);
    }

    /// Fade out and release the live handle (screen teardown).
    pub fn shutdown(&mut self, fade_out_ms: u64) {
        if let Some(active) = self.active.take() {
            fade_out(&active.handle, fade_out_ms, self.fade_steps);
            active.handle.release();
            tracing::info!(token = %active.token, "playback released on teardown");
        }
        self.publish(PlaybackInfo::default());
    }

    fn release_active(&mut self) {
        if let Some(active) = self.active.take() {
            active.handle.release();
            self.publish(PlaybackInfo::default());
        }
    }

    fn publish(&self, info: PlaybackInfo) {
        if let Ok(mut shared) = self.info.lock() {
            *shared = info;
        }
    }
}

fn fade_out<H: PlaybackHandle>(handle: &H, fade_out_ms: u64, steps: u64) {
    if fade_out_ms == 0 {
        handle.set_volume(0.0);
        return;
    }
    let start = handle.volume();
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        handle.set_volume(start * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    handle.set_volume(0.0);
}
