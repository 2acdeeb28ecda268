//! Core client-side data layer for the notes application.
//! A caching repository over an asynchronous notes service, and the
//! presenters that drive the list, detail and add-note screens.

pub mod config;
pub mod image;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig, LoggingConfig, ServiceConfig};
pub use image::temp_file::TempImageFile;
pub use image::ImageFile;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId};
pub use presenter::add_note::{AddNotePresenter, AddNoteView};
pub use presenter::note_detail::{DetailState, NoteDetailPresenter, NoteDetailView};
pub use presenter::notes::{NotesPresenter, NotesView};
pub use presenter::IdleSignal;
pub use repo::cached::CachedNotesRepository;
pub use repo::{GetNoteCallback, LoadNotesCallback, NotesRepository, RepoError, RepoResult};
pub use service::in_memory::InMemoryNotesService;
pub use service::{NotesServiceApi, ServiceCallback, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
