//! Application module: exposes the player screen model used by the TUI and runtime.
//!
//! The `PlayerScreen` model lives in `app::model` and holds the selected
//! track, the liked list and the playback state machine.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
