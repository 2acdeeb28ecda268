//! In-memory notes service.
//!
//! # Responsibility
//! - Serve notes from a process-local store through the callback contract.
//! - Optionally answer from a worker thread after a fixed latency, to
//!   exercise callers against truly asynchronous completion.
//!
//! # Invariants
//! - Saves replace an existing note with the same id, otherwise append.
//! - List results preserve insertion order.

use crate::config::ServiceConfig;
use crate::model::note::Note;
use crate::service::{NotesServiceApi, ServiceCallback, ServiceError, ServiceResult};
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

type NoteStore = Arc<Mutex<Vec<Note>>>;

/// Process-local `NotesServiceApi` implementation.
#[derive(Default)]
pub struct InMemoryNotesService {
    notes: NoteStore,
    latency: Option<Duration>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryNotesService {
    /// Creates an empty service that answers inline on the calling thread.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty service that answers from a worker thread.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    /// Creates a service from configuration; zero latency means inline.
    pub fn from_config(config: &ServiceConfig) -> Self {
        match config.latency_ms {
            0 => Self::new(),
            millis => Self::with_latency(Duration::from_millis(millis)),
        }
    }

    /// Seeds notes, replacing any stored note with the same id.
    pub fn add_notes(&self, notes: impl IntoIterator<Item = Note>) {
        let mut store = lock_store(&self.notes);
        for note in notes {
            upsert(&mut store, note);
        }
    }

    /// Toggles simulated outage; while unavailable every call fails.
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Number of notes currently stored.
    pub fn len(&self) -> usize {
        lock_store(&self.notes).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn dispatch<T, F>(&self, callback: ServiceCallback<T>, read: F)
    where
        T: Send + 'static,
        F: FnOnce(&[Note]) -> T + Send + 'static,
    {
        let notes = Arc::clone(&self.notes);
        let unavailable = Arc::clone(&self.unavailable);
        let answer = move || {
            if unavailable.load(Ordering::SeqCst) {
                callback(Err(ServiceError::Unavailable(
                    "in-memory service is offline".to_string(),
                )));
                return;
            }
            let value = read(&lock_store(&notes));
            callback(Ok(value));
        };

        match self.latency {
            None => answer(),
            Some(latency) => {
                thread::spawn(move || {
                    thread::sleep(latency);
                    answer();
                });
            }
        }
    }
}

impl NotesServiceApi for InMemoryNotesService {
    fn get_all_notes(&self, callback: ServiceCallback<Vec<Note>>) {
        debug!("event=service_get_all module=service status=dispatch");
        self.dispatch(callback, |notes| notes.to_vec());
    }

    fn get_note(&self, note_id: &str, callback: ServiceCallback<Option<Note>>) {
        debug!("event=service_get_note module=service status=dispatch");
        let note_id = note_id.to_string();
        self.dispatch(callback, move |notes| {
            notes.iter().find(|note| note.id() == note_id).cloned()
        });
    }

    fn save_note(&self, note: Note) -> ServiceResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ServiceError::Unavailable(
                "in-memory service is offline".to_string(),
            ));
        }
        upsert(&mut lock_store(&self.notes), note);
        debug!("event=service_save module=service status=ok");
        Ok(())
    }
}

fn lock_store(store: &NoteStore) -> std::sync::MutexGuard<'_, Vec<Note>> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

fn upsert(store: &mut Vec<Note>, note: Note) {
    match store.iter_mut().find(|existing| existing.id() == note.id()) {
        Some(existing) => *existing = note,
        None => store.push(note),
    }
}
