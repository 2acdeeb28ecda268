//! Caching repository over a `NotesServiceApi`.
//!
//! # Responsibility
//! - Answer note-list reads from an in-memory snapshot when warm.
//! - Populate the snapshot from the first successful service list call.
//! - Invalidate on every write and on explicit refresh.
//!
//! # Invariants
//! - A failed list call never populates the snapshot and is never retried.
//! - A list answer issued before an invalidation is forwarded to its caller
//!   but does not repopulate the snapshot.
//! - The snapshot lock is never held across a service call or a callback.

use crate::model::note::Note;
use crate::repo::{GetNoteCallback, LoadNotesCallback, NotesRepository, RepoError};
use crate::service::NotesServiceApi;
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct CacheState {
    notes: Option<Vec<Note>>,
    generation: u64,
}

/// Repository instance owning one note-list snapshot.
///
/// Each instance starts cold; construct one per application session.
pub struct CachedNotesRepository<S: NotesServiceApi> {
    service: S,
    cache: Arc<Mutex<CacheState>>,
}

impl<S: NotesServiceApi> CachedNotesRepository<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            cache: Arc::new(Mutex::new(CacheState::default())),
        }
    }

    /// Alias of `refresh_data`.
    pub fn invalidate_cache(&self) {
        let mut state = lock_cache(&self.cache);
        state.notes = None;
        state.generation = state.generation.wrapping_add(1);
    }

    /// Returns whether the note-list snapshot is populated.
    pub fn has_cached_notes(&self) -> bool {
        lock_cache(&self.cache).notes.is_some()
    }

    /// Borrows the backing service.
    pub fn service(&self) -> &S {
        &self.service
    }
}

impl<S: NotesServiceApi> NotesRepository for CachedNotesRepository<S> {
    fn get_notes(&self, callback: LoadNotesCallback) {
        let (snapshot, generation) = {
            let state = lock_cache(&self.cache);
            (state.notes.clone(), state.generation)
        };

        if let Some(notes) = snapshot {
            debug!(
                "event=notes_load module=repo status=cache_hit count={}",
                notes.len()
            );
            callback(Ok(notes));
            return;
        }

        debug!("event=notes_load module=repo status=cache_miss");
        let cache = Arc::clone(&self.cache);
        self.service.get_all_notes(Box::new(move |result| match result {
            Ok(notes) => {
                {
                    let mut state = lock_cache(&cache);
                    if state.generation == generation {
                        state.notes = Some(notes.clone());
                    } else {
                        debug!("event=notes_load module=repo status=stale_answer");
                    }
                }
                callback(Ok(notes));
            }
            Err(err) => {
                warn!("event=notes_load module=repo status=error error={err}");
                callback(Err(RepoError::from(err)));
            }
        }));
    }

    fn get_note(&self, note_id: &str, callback: GetNoteCallback) {
        self.service.get_note(
            note_id,
            Box::new(move |result| match result {
                Ok(note) => callback(note),
                Err(err) => {
                    warn!("event=note_load module=repo status=error error={err}");
                    callback(None);
                }
            }),
        );
    }

    fn save_note(&self, note: Note) {
        if let Err(err) = self.service.save_note(note) {
            warn!("event=note_save module=repo status=error error={err}");
        }
        self.invalidate_cache();
    }

    fn refresh_data(&self) {
        self.invalidate_cache();
    }
}

fn lock_cache(cache: &Mutex<CacheState>) -> MutexGuard<'_, CacheState> {
    cache.lock().unwrap_or_else(PoisonError::into_inner)
}
