mod support;

use notes_core::{
    CachedNotesRepository, InMemoryNotesService, Note, NotesPresenter, NotesRepository,
    RepoError, ServiceError,
};
use std::sync::Arc;
use support::{ids, sample_notes, RecordingRepository, RecordingView, ScriptedService, ViewEvent};

#[test]
fn load_notes_shows_progress_then_hides_it_before_notes() {
    let repo = RecordingRepository::new();
    let view = RecordingView::new();
    let presenter = NotesPresenter::new(repo.clone(), view.clone());

    presenter.load_notes(true);
    assert_eq!(view.events(), vec![ViewEvent::Progress(true)]);
    assert_eq!(repo.list_requests(), 1);
    assert!(!presenter.idle_signal().is_idle());

    repo.complete_list(Ok(sample_notes()));
    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Progress(true),
            ViewEvent::Progress(false),
            ViewEvent::Notes(ids(&sample_notes())),
        ]
    );
    assert!(presenter.idle_signal().is_idle());
}

#[test]
fn forced_load_invalidates_before_loading() {
    let repo = RecordingRepository::new();
    let view = RecordingView::new();
    let presenter = NotesPresenter::new(repo.clone(), view);

    presenter.load_notes(false);
    assert_eq!(repo.refreshes(), 0);

    presenter.load_notes(true);
    assert_eq!(repo.refreshes(), 1);
    assert_eq!(repo.list_requests(), 2);
}

#[test]
fn forced_load_reaches_service_even_with_warm_cache() {
    let service = ScriptedService::new();
    let repo = Arc::new(CachedNotesRepository::new(service.clone()));
    repo.get_notes(Box::new(|_| {}));
    service.complete_list(Ok(sample_notes()));
    assert!(repo.has_cached_notes());

    let view = RecordingView::new();
    let presenter = NotesPresenter::new(repo.clone(), view.clone());
    presenter.load_notes(true);

    assert_eq!(service.list_calls(), 2);
    service.complete_list(Ok(vec![Note::with_id("n-9", "fresh", "", None)]));
    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Progress(true),
            ViewEvent::Progress(false),
            ViewEvent::Notes(vec!["n-9".to_string()]),
        ]
    );
}

#[test]
fn unforced_load_with_warm_cache_skips_service_but_keeps_ordering() {
    let service = Arc::new(InMemoryNotesService::new());
    service.add_notes(sample_notes());
    let repo = Arc::new(CachedNotesRepository::new(service.clone()));
    repo.get_notes(Box::new(|_| {}));
    service.add_notes([Note::new("late", "arrival")]);

    let view = RecordingView::new();
    let presenter = NotesPresenter::new(repo.clone(), view.clone());
    presenter.load_notes(false);

    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Progress(true),
            ViewEvent::Progress(false),
            ViewEvent::Notes(ids(&sample_notes())),
        ]
    );
}

#[test]
fn failed_load_hides_progress_then_reports_error() {
    let repo = RecordingRepository::new();
    let view = RecordingView::new();
    let presenter = NotesPresenter::new(repo.clone(), view.clone());

    presenter.load_notes(false);
    repo.complete_list(Err(RepoError::Service(ServiceError::Unavailable(
        "offline".to_string(),
    ))));

    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Progress(true),
            ViewEvent::Progress(false),
            ViewEvent::LoadingNotesError,
        ]
    );
    assert!(presenter.idle_signal().is_idle());
}

#[test]
fn add_new_note_shows_add_note_ui_without_repository() {
    let repo = RecordingRepository::new();
    let view = RecordingView::new();
    let presenter = NotesPresenter::new(repo.clone(), view.clone());

    presenter.add_new_note();

    assert_eq!(view.events(), vec![ViewEvent::AddNote]);
    assert_eq!(repo.list_requests(), 0);
}

#[test]
fn open_note_details_passes_note_id() {
    let repo = RecordingRepository::new();
    let view = RecordingView::new();
    let presenter = NotesPresenter::new(repo, view.clone());
    let requested = Note::new("Details Requested", "For this note");

    presenter.open_note_details(&requested);

    assert_eq!(
        view.events(),
        vec![ViewEvent::NoteDetail(requested.id().to_string())]
    );
}
