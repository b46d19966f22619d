//! File selection capability.
//!
//! The screen never talks to a dialog directly: it asks a [`FilePicker`] on a
//! worker thread and receives a [`PickResult`] back over a channel, so the UI
//! loop keeps drawing while the dialog is open.

mod dialog;
mod types;

pub use dialog::DialogPicker;
pub use types::*;

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

/// Run `picker` on its own thread and post the outcome to `tx`.
pub fn spawn_pick(
    picker: Arc<dyn FilePicker>,
    filter: AudioFilter,
    tx: Sender<PickResult>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let result = picker.pick(&filter);
        if tx.send(result).is_err() {
            tracing::debug!("screen closed before the picker returned");
        }
    })
}
