//! Repository layer: the single read/write entry point used by presenters.
//!
//! # Responsibility
//! - Define the callback-based repository contract.
//! - Hide the cache/service distinction from presenters.
//!
//! # Invariants
//! - The note-list snapshot is either absent or fully populated.
//! - Every save invalidates the snapshot, whatever the service answered.
//! - Single-note reads never consult the snapshot.

use crate::model::note::Note;
use crate::service::ServiceError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod cached;

pub type RepoResult<T> = Result<T, RepoError>;

/// Completion for a note-list read.
pub type LoadNotesCallback = Box<dyn FnOnce(RepoResult<Vec<Note>>) + Send + 'static>;

/// Completion for a single-note read; `None` means no note has that id.
pub type GetNoteCallback = Box<dyn FnOnce(Option<Note>) + Send + 'static>;

/// Repository error surfaced to presenters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Service(ServiceError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
        }
    }
}

impl From<ServiceError> for RepoError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

/// Read/write contract presenters talk to.
pub trait NotesRepository: Send + Sync {
    /// Loads all notes, from the snapshot when warm.
    fn get_notes(&self, callback: LoadNotesCallback);
    /// Loads one note by id, always from the backing service.
    fn get_note(&self, note_id: &str, callback: GetNoteCallback);
    /// Persists a note and invalidates the snapshot.
    fn save_note(&self, note: Note);
    /// Drops the snapshot so the next `get_notes` reaches the service.
    fn refresh_data(&self);
}
