//! Notes service contract and in-process implementations.
//!
//! # Responsibility
//! - Define the asynchronous, callback-based contract of the backing notes
//!   service consumed by the repository.
//! - Provide an in-memory implementation for tests and local wiring.
//!
//! # Invariants
//! - Every issued read eventually invokes its callback exactly once.
//! - Callbacks may run on a thread other than the caller's.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod in_memory;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// One-shot completion for an asynchronous service read.
pub type ServiceCallback<T> = Box<dyn FnOnce(ServiceResult<T>) + Send + 'static>;

/// Failure reported by a backing notes service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service could not be reached or answered with a failure.
    Unavailable(String),
    /// The service refused a write.
    Rejected(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(details) => write!(f, "notes service unavailable: {details}"),
            Self::Rejected(details) => write!(f, "notes service rejected write: {details}"),
        }
    }
}

impl Error for ServiceError {}

/// Asynchronous source of truth for notes.
///
/// Implementations own their own execution context; the repository never
/// assumes a callback fires before the call returns.
pub trait NotesServiceApi: Send + Sync {
    /// Loads every note, in service order.
    fn get_all_notes(&self, callback: ServiceCallback<Vec<Note>>);
    /// Looks one note up by id; `Ok(None)` when no note matches.
    fn get_note(&self, note_id: &str, callback: ServiceCallback<Option<Note>>);
    /// Submits a create-or-replace write keyed by note id.
    ///
    /// The result reports acceptance of the write only.
    fn save_note(&self, note: Note) -> ServiceResult<()>;
}

impl<T: NotesServiceApi + ?Sized> NotesServiceApi for std::sync::Arc<T> {
    fn get_all_notes(&self, callback: ServiceCallback<Vec<Note>>) {
        (**self).get_all_notes(callback)
    }

    fn get_note(&self, note_id: &str, callback: ServiceCallback<Option<Note>>) {
        (**self).get_note(note_id, callback)
    }

    fn save_note(&self, note: Note) -> ServiceResult<()> {
        (**self).save_note(note)
    }
}
