use super::types::{AudioFilter, FilePicker, PickOutcome, PickResult};

/// Native file dialog backed by `rfd`.
pub struct DialogPicker {
    title: String,
}

impl DialogPicker {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl FilePicker for DialogPicker {
    fn pick(&self, filter: &AudioFilter) -> PickResult {
        let mut dialog = rfd::FileDialog::new()
            .set_title(self.title.as_str())
            .add_filter("Audio", filter.extensions.as_slice());
        if let Some(dir) = &filter.start_dir {
            dialog = dialog.set_directory(dir);
        }

        match dialog.pick_file() {
            Some(path) => filter.resolve(path),
            None => Ok(PickOutcome::Cancelled),
        }
    }
}
