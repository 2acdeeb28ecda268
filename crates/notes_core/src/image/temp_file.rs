//! Filesystem-backed `ImageFile`.

use crate::image::ImageFile;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Image file reserved inside a fixed directory.
///
/// The file outlives this handle unless `delete` is called.
#[derive(Debug)]
pub struct TempImageFile {
    directory: PathBuf,
    file: Option<PathBuf>,
}

impl TempImageFile {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            file: None,
        }
    }

    /// Uses the platform temp directory.
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

impl ImageFile for TempImageFile {
    fn create(&mut self, name: &str, extension: &str) -> io::Result<()> {
        fs::create_dir_all(&self.directory)?;
        let (_, path) = tempfile::Builder::new()
            .prefix(name)
            .suffix(extension)
            .tempfile_in(&self.directory)?
            .keep()
            .map_err(|err| err.error)?;

        if let Some(previous) = self.file.replace(path) {
            remove_quietly(&previous);
        }
        debug!("event=image_create module=image status=ok");
        Ok(())
    }

    fn path(&self) -> Option<String> {
        self.file.as_ref().map(|path| path.display().to_string())
    }

    fn exists(&self) -> bool {
        self.file.as_deref().is_some_and(Path::is_file)
    }

    fn delete(&mut self) {
        if let Some(path) = self.file.take() {
            remove_quietly(&path);
        }
    }
}

fn remove_quietly(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!("event=image_delete module=image status=ok"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!("event=image_delete module=image status=error error={err}"),
    }
}
