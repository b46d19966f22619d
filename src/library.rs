//! Track references and the liked-tracks list.
//!
//! A `TrackRef` is what the picker hands back: an opaque `uri` plus a display
//! name. The liked list keeps user-curated tracks in insertion order,
//! de-duplicated on `uri`.

mod liked;
mod model;
mod probe;

pub use liked::LikedList;
pub use model::TrackRef;
pub use probe::probe_duration;
