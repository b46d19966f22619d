use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;

/// Read the track length from the file's properties, if lofty understands it.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    let tagged = lofty::read_from_path(path).ok()?;
    let duration = tagged.properties().duration();
    (!duration.is_zero()).then_some(duration)
}
