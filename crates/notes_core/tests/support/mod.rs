#![allow(dead_code)]

use notes_core::{
    AddNoteView, GetNoteCallback, ImageFile, LoadNotesCallback, Note, NoteDetailView,
    NotesRepository, NotesServiceApi, NotesView, RepoResult, ServiceCallback, ServiceResult,
};
use std::io;
use std::sync::{Arc, Mutex};

/// Service fake that holds callbacks until the test completes them.
#[derive(Default)]
pub struct ScriptedService {
    pub list_calls: Mutex<usize>,
    pub note_calls: Mutex<Vec<String>>,
    pub saved: Mutex<Vec<Note>>,
    pending_lists: Mutex<Vec<ServiceCallback<Vec<Note>>>>,
    pending_notes: Mutex<Vec<ServiceCallback<Option<Note>>>>,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn note_calls(&self) -> Vec<String> {
        self.note_calls.lock().unwrap().clone()
    }

    pub fn saved(&self) -> Vec<Note> {
        self.saved.lock().unwrap().clone()
    }

    /// Completes the oldest outstanding list call.
    pub fn complete_list(&self, result: ServiceResult<Vec<Note>>) {
        let callback = self.pending_lists.lock().unwrap().remove(0);
        callback(result);
    }

    /// Completes the oldest outstanding single-note call.
    pub fn complete_note(&self, result: ServiceResult<Option<Note>>) {
        let callback = self.pending_notes.lock().unwrap().remove(0);
        callback(result);
    }
}

impl NotesServiceApi for ScriptedService {
    fn get_all_notes(&self, callback: ServiceCallback<Vec<Note>>) {
        *self.list_calls.lock().unwrap() += 1;
        self.pending_lists.lock().unwrap().push(callback);
    }

    fn get_note(&self, note_id: &str, callback: ServiceCallback<Option<Note>>) {
        self.note_calls.lock().unwrap().push(note_id.to_string());
        self.pending_notes.lock().unwrap().push(callback);
    }

    fn save_note(&self, note: Note) -> ServiceResult<()> {
        self.saved.lock().unwrap().push(note);
        Ok(())
    }
}

/// Repository fake that records calls and holds callbacks.
#[derive(Default)]
pub struct RecordingRepository {
    pub refreshes: Mutex<usize>,
    pub list_requests: Mutex<usize>,
    pub note_requests: Mutex<Vec<String>>,
    pub saved: Mutex<Vec<Note>>,
    pending_lists: Mutex<Vec<LoadNotesCallback>>,
    pending_notes: Mutex<Vec<GetNoteCallback>>,
}

impl RecordingRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn refreshes(&self) -> usize {
        *self.refreshes.lock().unwrap()
    }

    pub fn list_requests(&self) -> usize {
        *self.list_requests.lock().unwrap()
    }

    pub fn note_requests(&self) -> Vec<String> {
        self.note_requests.lock().unwrap().clone()
    }

    pub fn saved(&self) -> Vec<Note> {
        self.saved.lock().unwrap().clone()
    }

    pub fn complete_list(&self, result: RepoResult<Vec<Note>>) {
        let callback = self.pending_lists.lock().unwrap().remove(0);
        callback(result);
    }

    pub fn complete_note(&self, note: Option<Note>) {
        let callback = self.pending_notes.lock().unwrap().remove(0);
        callback(note);
    }
}

impl NotesRepository for RecordingRepository {
    fn get_notes(&self, callback: LoadNotesCallback) {
        *self.list_requests.lock().unwrap() += 1;
        self.pending_lists.lock().unwrap().push(callback);
    }

    fn get_note(&self, note_id: &str, callback: GetNoteCallback) {
        self.note_requests.lock().unwrap().push(note_id.to_string());
        self.pending_notes.lock().unwrap().push(callback);
    }

    fn save_note(&self, note: Note) {
        self.saved.lock().unwrap().push(note);
    }

    fn refresh_data(&self) {
        *self.refreshes.lock().unwrap() += 1;
    }
}

/// Every view instruction a presenter can issue, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Progress(bool),
    Notes(Vec<String>),
    LoadingNotesError,
    AddNote,
    NoteDetail(String),
    MissingNote,
    Title(String),
    HideTitle,
    Description(String),
    HideDescription,
    Image(String),
    HideImage,
    EmptyNoteError,
    NotesList,
    OpenCamera(String),
    ImagePreview(String),
    ImageError,
}

/// Single recorder implementing all three view contracts.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl NotesView for RecordingView {
    fn set_progress_indicator(&self, active: bool) {
        self.push(ViewEvent::Progress(active));
    }

    fn show_notes(&self, notes: Vec<Note>) {
        self.push(ViewEvent::Notes(
            notes.iter().map(|note| note.id().to_string()).collect(),
        ));
    }

    fn show_loading_notes_error(&self) {
        self.push(ViewEvent::LoadingNotesError);
    }

    fn show_add_note(&self) {
        self.push(ViewEvent::AddNote);
    }

    fn show_note_detail_ui(&self, note_id: &str) {
        self.push(ViewEvent::NoteDetail(note_id.to_string()));
    }
}

impl NoteDetailView for RecordingView {
    fn set_progress_indicator(&self, active: bool) {
        self.push(ViewEvent::Progress(active));
    }

    fn show_missing_note(&self) {
        self.push(ViewEvent::MissingNote);
    }

    fn show_title(&self, title: &str) {
        self.push(ViewEvent::Title(title.to_string()));
    }

    fn hide_title(&self) {
        self.push(ViewEvent::HideTitle);
    }

    fn show_description(&self, description: &str) {
        self.push(ViewEvent::Description(description.to_string()));
    }

    fn hide_description(&self) {
        self.push(ViewEvent::HideDescription);
    }

    fn show_image(&self, image_url: &str) {
        self.push(ViewEvent::Image(image_url.to_string()));
    }

    fn hide_image(&self) {
        self.push(ViewEvent::HideImage);
    }
}

impl AddNoteView for RecordingView {
    fn show_empty_note_error(&self) {
        self.push(ViewEvent::EmptyNoteError);
    }

    fn show_notes_list(&self) {
        self.push(ViewEvent::NotesList);
    }

    fn open_camera(&self, save_to: &str) {
        self.push(ViewEvent::OpenCamera(save_to.to_string()));
    }

    fn show_image_preview(&self, image_url: &str) {
        self.push(ViewEvent::ImagePreview(image_url.to_string()));
    }

    fn show_image_error(&self) {
        self.push(ViewEvent::ImageError);
    }
}

/// Shared call log of a `FakeImageFile`.
#[derive(Debug, Default)]
pub struct ImageFileLog {
    pub creates: Vec<(String, String)>,
    pub deletes: usize,
}

/// Image file stub with scripted existence and path.
pub struct FakeImageFile {
    pub log: Arc<Mutex<ImageFileLog>>,
    pub path: Option<String>,
    pub exists: bool,
    pub fail_create: bool,
}

impl FakeImageFile {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(ImageFileLog::default())),
            path: None,
            exists: false,
            fail_create: false,
        }
    }

    pub fn existing(path: &str) -> Self {
        Self {
            path: Some(path.to_string()),
            exists: true,
            ..Self::new()
        }
    }
}

impl ImageFile for FakeImageFile {
    fn create(&mut self, name: &str, extension: &str) -> io::Result<()> {
        if self.fail_create {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.log
            .lock()
            .unwrap()
            .creates
            .push((name.to_string(), extension.to_string()));
        self.path = Some(format!("/images/{name}{extension}"));
        Ok(())
    }

    fn path(&self) -> Option<String> {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.exists
    }

    fn delete(&mut self) {
        self.log.lock().unwrap().deletes += 1;
        self.path = None;
        self.exists = false;
    }
}

pub fn sample_notes() -> Vec<Note> {
    vec![
        Note::with_id("n-1", "Title1", "Description1", None),
        Note::with_id("n-2", "Title2", "Description2", None),
    ]
}

pub fn ids(notes: &[Note]) -> Vec<String> {
    notes.iter().map(|note| note.id().to_string()).collect()
}
