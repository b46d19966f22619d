//! Media-library permission capability.
//!
//! On a desktop there is no OS prompt for "media library access"; the closest
//! equivalent is whether the user's music directory can be read. The result
//! is advisory unless `permissions.enforce` is set.

use std::fs;
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

pub trait PermissionGate {
    fn request(&self) -> PermissionStatus;
}

/// Grants access when `dir` exists and its entries can be listed.
pub struct DirectoryAccess {
    dir: Option<PathBuf>,
}

impl DirectoryAccess {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }
}

impl PermissionGate for DirectoryAccess {
    fn request(&self) -> PermissionStatus {
        let Some(dir) = &self.dir else {
            tracing::warn!("no media directory could be determined");
            return PermissionStatus::Denied;
        };

        match fs::read_dir(dir) {
            Ok(_) => PermissionStatus::Granted,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "media directory is not readable");
                PermissionStatus::Denied
            }
        }
    }
}
