use std::path::{Path, PathBuf};

use crate::config::PickerSettings;
use crate::library::TrackRef;

/// What the user did with the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(TrackRef),
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum PickError {
    #[error("selection is not a readable file: {0}")]
    NotAFile(PathBuf),
    #[error("selection is not an accepted audio type: {0}")]
    Unsupported(PathBuf),
}

pub type PickResult = Result<PickOutcome, PickError>;

/// Source of user-selected tracks.
pub trait FilePicker: Send + Sync {
    fn pick(&self, filter: &AudioFilter) -> PickResult;
}

/// Which files the picker offers, and where it starts.
#[derive(Debug, Clone)]
pub struct AudioFilter {
    pub extensions: Vec<String>,
    pub start_dir: Option<PathBuf>,
}

impl AudioFilter {
    /// Build a filter from settings; `start_dir` (from the command line) wins
    /// over the configured directory.
    pub fn from_settings(settings: &PickerSettings, start_dir: Option<PathBuf>) -> Self {
        let extensions = settings
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        Self {
            extensions,
            start_dir: start_dir.or_else(|| settings.start_dir.clone()),
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|e| e == &ext)
            })
            .unwrap_or(false)
    }

    /// Turn a path returned by a picker into a track reference.
    pub fn resolve(&self, path: PathBuf) -> PickResult {
        if !path.is_file() {
            return Err(PickError::NotAFile(path));
        }
        if !self.accepts(&path) {
            return Err(PickError::Unsupported(path));
        }
        Ok(PickOutcome::Picked(TrackRef::from_path(&path)))
    }
}
