//! Note-list screen presenter.

use crate::model::note::Note;
use crate::presenter::IdleSignal;
use crate::repo::NotesRepository;
use log::{debug, warn};
use std::sync::Arc;

/// Passive note-list screen.
pub trait NotesView: Send + Sync {
    fn set_progress_indicator(&self, active: bool);
    fn show_notes(&self, notes: Vec<Note>);
    /// The list could not be loaded from the backing service.
    fn show_loading_notes_error(&self);
    fn show_add_note(&self);
    fn show_note_detail_ui(&self, note_id: &str);
}

/// Drives the list screen's load, refresh and navigation.
pub struct NotesPresenter<V: NotesView + 'static> {
    repository: Arc<dyn NotesRepository>,
    view: Arc<V>,
    idle: IdleSignal,
}

impl<V: NotesView + 'static> NotesPresenter<V> {
    pub fn new(repository: Arc<dyn NotesRepository>, view: Arc<V>) -> Self {
        Self {
            repository,
            view,
            idle: IdleSignal::new(),
        }
    }

    /// Loads notes into the view, invalidating the cache first when
    /// `force_update` is set.
    pub fn load_notes(&self, force_update: bool) {
        if force_update {
            self.repository.refresh_data();
        }
        self.view.set_progress_indicator(true);

        self.idle.increment();
        let view = Arc::clone(&self.view);
        let idle = self.idle.clone();
        self.repository.get_notes(Box::new(move |result| {
            view.set_progress_indicator(false);
            match result {
                Ok(notes) => {
                    debug!(
                        "event=notes_show module=presenter status=ok count={}",
                        notes.len()
                    );
                    view.show_notes(notes);
                }
                Err(err) => {
                    warn!("event=notes_show module=presenter status=error error={err}");
                    view.show_loading_notes_error();
                }
            }
            idle.decrement();
        }));
    }

    pub fn add_new_note(&self) {
        self.view.show_add_note();
    }

    /// Navigates to the detail screen, which reloads the note by id.
    pub fn open_note_details(&self, note: &Note) {
        self.view.show_note_detail_ui(note.id());
    }

    /// Busy while a list load is outstanding.
    pub fn idle_signal(&self) -> &IdleSignal {
        &self.idle
    }
}
