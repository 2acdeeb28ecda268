//! Add-note screen presenter.
//!
//! # Invariants
//! - A note with empty title and description never reaches the repository.
//! - Saving is fire-and-forget: the list screen is shown once the save is
//!   handed to the repository.
//! - The image file is deleted whenever a capture does not yield a file.

use crate::image::ImageFile;
use crate::model::note::Note;
use crate::presenter::IdleSignal;
use crate::repo::NotesRepository;
use log::{debug, info};
use std::io;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const IMAGE_FILE_PREFIX: &str = "JPEG_";
const IMAGE_FILE_EXTENSION: &str = ".jpg";

/// Passive add-note screen.
pub trait AddNoteView: Send + Sync {
    fn show_empty_note_error(&self);
    fn show_notes_list(&self);
    /// Launches the external camera, which writes into `save_to`.
    fn open_camera(&self, save_to: &str);
    fn show_image_preview(&self, image_url: &str);
    fn show_image_error(&self);
}

/// Validates and persists new notes; orchestrates image capture.
pub struct AddNotePresenter<V: AddNoteView, F: ImageFile> {
    repository: Arc<dyn NotesRepository>,
    view: Arc<V>,
    image_file: F,
    idle: IdleSignal,
}

impl<V: AddNoteView, F: ImageFile> AddNotePresenter<V, F> {
    pub fn new(repository: Arc<dyn NotesRepository>, view: Arc<V>, image_file: F) -> Self {
        Self {
            repository,
            view,
            image_file,
            idle: IdleSignal::new(),
        }
    }

    /// Saves a note, attaching the captured image when one exists.
    pub fn save_note(&self, title: &str, description: &str) {
        let image = if self.image_file.exists() {
            self.image_file.path()
        } else {
            None
        };
        let note = Note::with_image(title, description, image);

        if note.is_empty() {
            debug!("event=note_save module=presenter status=rejected reason=empty");
            self.view.show_empty_note_error();
            return;
        }

        self.idle.increment();
        self.repository.save_note(note);
        self.idle.decrement();
        info!("event=note_save module=presenter status=ok");
        self.view.show_notes_list();
    }

    /// Reserves an image file and opens the camera on it.
    ///
    /// # Errors
    /// Returns the I/O error when the file cannot be created.
    pub fn take_picture(&mut self) -> io::Result<()> {
        let name = format!("{IMAGE_FILE_PREFIX}{}_", capture_timestamp());
        self.image_file.create(&name, IMAGE_FILE_EXTENSION)?;
        let path = self.image_file.path().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "image file has no path after create",
            )
        })?;
        self.view.open_camera(&path);
        Ok(())
    }

    /// Camera reported success; preview the file or clean up.
    pub fn image_available(&mut self) {
        if self.image_file.exists() {
            if let Some(path) = self.image_file.path() {
                self.view.show_image_preview(&path);
                return;
            }
        }
        self.discard_image();
    }

    /// Camera was cancelled or failed.
    pub fn image_capture_failed(&mut self) {
        self.discard_image();
    }

    pub fn image_file(&self) -> &F {
        &self.image_file
    }

    /// Busy while a save is being handed to the repository.
    pub fn idle_signal(&self) -> &IdleSignal {
        &self.idle
    }

    fn discard_image(&mut self) {
        self.view.show_image_error();
        self.image_file.delete();
    }
}

fn capture_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
