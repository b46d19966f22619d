//! `rodio` implementation of the playback backend.
//!
//! Each handle is a `Sink` connected to the shared output stream, holding a
//! single decoded file.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, StreamError};

use crate::library::{TrackRef, probe_duration};

use super::backend::{AudioBackend, PlaybackError, PlaybackHandle};

pub(super) struct RodioBackend {
    stream: OutputStream,
    volume: f32,
}

impl RodioBackend {
    pub(super) fn open_default(volume: f32) -> Result<Self, StreamError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the TUI.
        stream.log_on_drop(false);
        Ok(Self { stream, volume })
    }
}

impl AudioBackend for RodioBackend {
    type Handle = SinkHandle;

    fn load(&mut self, track: &TrackRef) -> Result<SinkHandle, PlaybackError> {
        let path = track.path();
        let file = File::open(&path).map_err(|source| PlaybackError::Open {
            path: path.clone(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.pause();

        Ok(SinkHandle {
            sink,
            total: probe_duration(&path),
        })
    }
}

pub(super) struct SinkHandle {
    sink: Sink,
    total: Option<Duration>,
}

impl PlaybackHandle for SinkHandle {
    fn start(&mut self) {
        self.sink.play();
    }

    fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn volume(&self) -> f32 {
        self.sink.volume()
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn total(&self) -> Option<Duration> {
        self.total
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    fn release(self) {
        self.sink.stop();
    }
}
