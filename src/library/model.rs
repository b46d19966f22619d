use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file://";

/// A selectable audio file. Identity is `uri`; `name` is only for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRef {
    pub uri: String,
    pub name: String,
}

impl TrackRef {
    pub fn new(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
        }
    }

    /// Build a reference for a file on disk, named after its file name.
    pub fn from_path(path: &Path) -> Self {
        let uri = path.to_string_lossy().into_owned();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| uri.clone());
        Self { uri, name }
    }

    /// Whether both references point at the same file.
    pub fn same_track(&self, other: &TrackRef) -> bool {
        self.uri == other.uri
    }

    /// Filesystem location behind the `uri` (a leading `file://` is accepted).
    pub fn path(&self) -> PathBuf {
        PathBuf::from(self.uri.strip_prefix(FILE_SCHEME).unwrap_or(&self.uri))
    }
}
