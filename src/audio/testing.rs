//! In-memory playback backend for tests.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use crate::library::TrackRef;

use super::backend::{AudioBackend, PlaybackError, PlaybackHandle};
use super::types::RequestSeq;

/// Uris of handles that have been loaded and not yet released.
pub(crate) type Live = Rc<RefCell<Vec<String>>>;

pub(crate) struct FakeHandle {
    uri: String,
    live: Live,
    volume: Cell<f32>,
}

impl PlaybackHandle for FakeHandle {
    fn start(&mut self) {}

    fn set_volume(&self, volume: f32) {
        self.volume.set(volume);
    }

    fn volume(&self) -> f32 {
        self.volume.get()
    }

    fn position(&self) -> Duration {
        Duration::from_secs(3)
    }

    fn total(&self) -> Option<Duration> {
        Some(Duration::from_secs(180))
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn release(self) {
        self.live.borrow_mut().retain(|u| u != &self.uri);
    }
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    pub(crate) live: Live,
    pub(crate) loads: Live,
    /// Issue a newer token while loading, as a second Browse would.
    pub(crate) interrupt_with: Option<RequestSeq>,
}

impl AudioBackend for FakeBackend {
    type Handle = FakeHandle;

    fn load(&mut self, track: &TrackRef) -> Result<FakeHandle, PlaybackError> {
        self.loads.borrow_mut().push(track.uri.clone());
        if track.uri.ends_with(".broken") {
            return Err(PlaybackError::Decode {
                path: PathBuf::from(&track.uri),
                message: "unsupported format".into(),
            });
        }
        if let Some(seq) = self.interrupt_with.take() {
            seq.issue();
        }
        self.live.borrow_mut().push(track.uri.clone());
        Ok(FakeHandle {
            uri: track.uri.clone(),
            live: self.live.clone(),
            volume: Cell::new(1.0),
        })
    }
}
