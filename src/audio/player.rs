use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::error::{Error, Result};

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioEvent, InfoHandle, PlayRequest, PlaybackInfo, RequestSeq};

/// UI-side handle to the audio thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    events: Receiver<AudioEvent>,
    seq: RequestSeq,
    info: InfoHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Start the audio thread and wait until it has an output device.
    pub fn new(audio_settings: AudioSettings) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, events) = mpsc::channel::<AudioEvent>();
        let (ready_tx, ready_rx) = mpsc::sync_channel::<std::result::Result<(), String>>(1);
        let seq = RequestSeq::default();
        let info: InfoHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let join = spawn_audio_thread(
            rx,
            event_tx,
            seq.clone(),
            info.clone(),
            audio_settings,
            ready_tx,
        );

        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(msg)) => return Err(Error::audio_device(msg)),
            Err(_) => return Err(Error::audio_device("audio thread exited during startup")),
        }

        Ok(Self {
            tx,
            events,
            seq,
            info,
            join: Mutex::new(Some(join)),
        })
    }

    /// Token sequence shared with the audio thread.
    pub fn request_seq(&self) -> RequestSeq {
        self.seq.clone()
    }

    pub fn info_handle(&self) -> InfoHandle {
        self.info.clone()
    }

    /// Fire-and-forget: the outcome arrives later through `try_event`.
    pub fn play(&self, request: PlayRequest) {
        if self.tx.send(AudioCmd::Play(request)).is_err() {
            tracing::error!("audio thread is gone; play request dropped");
        }
    }

    pub fn try_event(&self) -> Option<AudioEvent> {
        self.events.try_recv().ok()
    }

    /// Fade out, release the live handle and wait for the audio thread.
    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.tx.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
