use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, SyncSender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::AudioSettings;

use super::backend::AudioBackend;
use super::engine::Engine;
use super::sink::RodioBackend;
use super::types::{AudioCmd, AudioEvent, InfoHandle, RequestSeq};

const TICK: Duration = Duration::from_millis(200);

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<AudioEvent>,
    seq: RequestSeq,
    info: InfoHandle,
    audio_settings: AudioSettings,
    ready: SyncSender<Result<(), String>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        // The output stream is not Send; it has to be opened on this thread.
        let backend = match RodioBackend::open_default(audio_settings.volume) {
            Ok(b) => b,
            Err(e) => {
                let _ = ready.send(Err(e.to_string()));
                return;
            }
        };
        let _ = ready.send(Ok(()));

        let mut engine = Engine::new(backend, seq, info, audio_settings.fade_steps);
        run_engine(&mut engine, &rx, &events);
    })
}

/// Process commands until `Quit` arrives or the UI side hangs up.
pub(super) fn run_engine<B: AudioBackend>(
    engine: &mut Engine<B>,
    rx: &Receiver<AudioCmd>,
    events: &Sender<AudioEvent>,
) {
    loop {
        match rx.recv_timeout(TICK) {
            Ok(AudioCmd::Play(request)) => {
                let event = engine.play(request);
                if events.send(event).is_err() {
                    tracing::debug!("screen stopped listening for audio events");
                }
            }
            Ok(AudioCmd::Quit { fade_out_ms }) => {
                engine.shutdown(fade_out_ms);
                break;
            }
            Err(RecvTimeoutError::Timeout) => engine.tick(),
            Err(RecvTimeoutError::Disconnected) => {
                engine.shutdown(0);
                break;
            }
        }
    }
}
