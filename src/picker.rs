//! Native file dialog for choosing a map

use odrviewer_scene::FilePicker;
use std::path::PathBuf;
use tracing::debug;

/// Opens the platform file dialog filtered to OpenDRIVE files
#[derive(Debug, Default, Clone)]
pub struct NativeFilePicker {
    start_dir: Option<PathBuf>,
}

impl NativeFilePicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilePicker for NativeFilePicker {
    fn pick_map_file(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Load .xodr")
            .add_filter("OpenDRIVE", &["xodr"]);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let picked = dialog.pick_file();
        if let Some(path) = &picked {
            debug!("Picked {}", path.display());
            // Next dialog opens where this one left off
            self.start_dir = path.parent().map(|p| p.to_path_buf());
        }
        picked
    }
}
