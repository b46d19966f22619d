use crate::app::PlayerScreen;
use crate::config;
use crate::permission::{DirectoryAccess, PermissionGate};

/// Ask for media-library access once, as the screen mounts.
pub fn request_permission(screen: &mut PlayerScreen, settings: &config::PermissionSettings) {
    let dir = settings
        .media_dir
        .clone()
        .or_else(config::default_media_dir);
    apply_permission_gate(screen, &DirectoryAccess::new(dir));
}

pub fn apply_permission_gate(screen: &mut PlayerScreen, gate: &dyn PermissionGate) {
    let status = gate.request();
    tracing::info!(?status, "media library permission");
    screen.apply_permission(status);
}
