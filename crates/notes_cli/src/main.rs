//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire `notes_core` presenters against the in-memory service and
//!   console-printing views.
//! - Usage: `notes_cli [TITLE [DESCRIPTION]]`; a given note is added
//!   before the list is reloaded.

use log::info;
use notes_core::{
    AddNotePresenter, AddNoteView, CachedNotesRepository, CoreConfig, IdleSignal,
    InMemoryNotesService, Note, NoteDetailPresenter, NoteDetailView, NotesPresenter,
    NotesRepository, NotesView, TempImageFile,
};
use std::error::Error;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Default)]
struct ConsoleView {
    last_notes: Mutex<Vec<Note>>,
}

impl ConsoleView {
    fn first_note(&self) -> Option<Note> {
        self.last_notes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .first()
            .cloned()
    }
}

impl NotesView for ConsoleView {
    fn set_progress_indicator(&self, active: bool) {
        if active {
            println!("loading notes...");
        }
    }

    fn show_notes(&self, notes: Vec<Note>) {
        println!("{} note(s):", notes.len());
        for note in &notes {
            println!("  [{}] {}", note.id(), note.title_for_list());
        }
        *self.last_notes.lock().unwrap_or_else(PoisonError::into_inner) = notes;
    }

    fn show_loading_notes_error(&self) {
        eprintln!("could not load notes");
    }

    fn show_add_note(&self) {
        println!("-> add note");
    }

    fn show_note_detail_ui(&self, note_id: &str) {
        println!("-> note {note_id}");
    }
}

impl NoteDetailView for ConsoleView {
    fn set_progress_indicator(&self, _active: bool) {}

    fn show_missing_note(&self) {
        println!("  (no such note)");
    }

    fn show_title(&self, title: &str) {
        println!("  title: {title}");
    }

    fn hide_title(&self) {}

    fn show_description(&self, description: &str) {
        println!("  description: {description}");
    }

    fn hide_description(&self) {}

    fn show_image(&self, image_url: &str) {
        println!("  image: {image_url}");
    }

    fn hide_image(&self) {}
}

impl AddNoteView for ConsoleView {
    fn show_empty_note_error(&self) {
        eprintln!("notes cannot be empty");
    }

    fn show_notes_list(&self) {
        println!("note saved");
    }

    fn open_camera(&self, save_to: &str) {
        println!("-> camera {save_to}");
    }

    fn show_image_preview(&self, image_url: &str) {
        println!("  preview: {image_url}");
    }

    fn show_image_error(&self) {
        eprintln!("image capture failed");
    }
}

fn wait_idle(signal: &IdleSignal) {
    while !signal.is_idle() {
        thread::sleep(IDLE_POLL_INTERVAL);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    notes_core::init_logging(&config.logging)?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        notes_core::core_version()
    );

    let service = InMemoryNotesService::from_config(&config.service);
    service.add_notes([
        Note::new("Welcome", "Notes load through a caching repository."),
        Note::new("", "A note without a title is listed by its description."),
    ]);
    let repository: Arc<dyn NotesRepository> = Arc::new(CachedNotesRepository::new(service));
    let view = Arc::new(ConsoleView::default());

    let list = NotesPresenter::new(Arc::clone(&repository), Arc::clone(&view));
    list.load_notes(false);
    wait_idle(list.idle_signal());

    let mut args = std::env::args().skip(1);
    if let Some(title) = args.next() {
        let description = args.next().unwrap_or_default();
        let add = AddNotePresenter::new(
            Arc::clone(&repository),
            Arc::clone(&view),
            TempImageFile::in_temp_dir(),
        );
        list.add_new_note();
        add.save_note(&title, &description);
        list.load_notes(false);
        wait_idle(list.idle_signal());
    }

    if let Some(note) = view.first_note() {
        list.open_note_details(&note);
        let detail = NoteDetailPresenter::new(Arc::clone(&repository), Arc::clone(&view));
        detail.open_note(note.id());
        wait_idle(detail.idle_signal());
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("notes_cli: {err}");
        std::process::exit(1);
    }
}
