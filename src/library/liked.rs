use super::model::TrackRef;

/// Liked tracks in the order they were first liked. No two entries share a `uri`.
#[derive(Debug, Clone, Default)]
pub struct LikedList {
    tracks: Vec<TrackRef>,
}

impl LikedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `track` unless it is `None` or already liked.
    ///
    /// Returns `true` when the list changed. The duplicate check is a linear
    /// scan; the list is hand-curated and stays short.
    pub fn like(&mut self, track: Option<&TrackRef>) -> bool {
        let Some(track) = track else {
            return false;
        };
        if self.contains(track) {
            return false;
        }
        self.tracks.push(track.clone());
        true
    }

    pub fn contains(&self, track: &TrackRef) -> bool {
        self.tracks.iter().any(|t| t.same_track(track))
    }

    pub fn get(&self, idx: usize) -> Option<&TrackRef> {
        self.tracks.get(idx)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackRef> {
        self.tracks.iter()
    }
}
