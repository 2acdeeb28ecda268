//! Note-detail screen presenter.
//!
//! # Invariants
//! - A blank id resolves to `Missing` without touching the repository.
//! - State moves `Idle -> Loading -> Loaded | Missing`; a new `open_note`
//!   restarts it.

use crate::model::note::Note;
use crate::presenter::IdleSignal;
use crate::repo::NotesRepository;
use std::sync::{Arc, Mutex, PoisonError};

/// Passive note-detail screen.
pub trait NoteDetailView: Send + Sync {
    fn set_progress_indicator(&self, active: bool);
    fn show_missing_note(&self);
    fn show_title(&self, title: &str);
    fn hide_title(&self);
    fn show_description(&self, description: &str);
    fn hide_description(&self);
    fn show_image(&self, image_url: &str);
    fn hide_image(&self);
}

/// Resolution state of the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Idle,
    Loading,
    Loaded(Note),
    Missing,
}

/// Loads one note by id and projects it into the detail view.
pub struct NoteDetailPresenter<V: NoteDetailView + 'static> {
    repository: Arc<dyn NotesRepository>,
    view: Arc<V>,
    state: Arc<Mutex<DetailState>>,
    idle: IdleSignal,
}

impl<V: NoteDetailView + 'static> NoteDetailPresenter<V> {
    pub fn new(repository: Arc<dyn NotesRepository>, view: Arc<V>) -> Self {
        Self {
            repository,
            view,
            state: Arc::new(Mutex::new(DetailState::Idle)),
            idle: IdleSignal::new(),
        }
    }

    pub fn open_note(&self, note_id: &str) {
        if note_id.trim().is_empty() {
            set_state(&self.state, DetailState::Missing);
            self.view.show_missing_note();
            return;
        }

        set_state(&self.state, DetailState::Loading);
        self.view.set_progress_indicator(true);

        self.idle.increment();
        let view = Arc::clone(&self.view);
        let state = Arc::clone(&self.state);
        let idle = self.idle.clone();
        self.repository.get_note(
            note_id,
            Box::new(move |note| {
                view.set_progress_indicator(false);
                match note {
                    Some(note) => {
                        show_note(view.as_ref(), &note);
                        set_state(&state, DetailState::Loaded(note));
                    }
                    None => {
                        view.show_missing_note();
                        set_state(&state, DetailState::Missing);
                    }
                }
                idle.decrement();
            }),
        );
    }

    pub fn state(&self) -> DetailState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn idle_signal(&self) -> &IdleSignal {
        &self.idle
    }
}

fn show_note<V: NoteDetailView + ?Sized>(view: &V, note: &Note) {
    if note.title.is_empty() {
        view.hide_title();
    } else {
        view.show_title(&note.title);
    }

    if note.description.is_empty() {
        view.hide_description();
    } else {
        view.show_description(&note.description);
    }

    match note.image.as_deref() {
        Some(image_url) => view.show_image(image_url),
        None => view.hide_image(),
    }
}

fn set_state(state: &Mutex<DetailState>, next: DetailState) {
    *state.lock().unwrap_or_else(PoisonError::into_inner) = next;
}
