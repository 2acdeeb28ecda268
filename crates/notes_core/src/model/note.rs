//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note value passed between service, repository,
//!   presenters and views.
//! - Provide the display-label projection used by list screens.
//!
//! # Invariants
//! - `id` is assigned once at construction and never changes afterwards.
//! - Two notes are the same entity iff their ids match.
//! - Notes are replaced, never mutated in place, once handed to a repository.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias so signatures read by intent. Generated ids are v4
/// UUID strings, but ids supplied by a service are accepted verbatim.
pub type NoteId = String;

/// Canonical note record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    /// Short heading; may be empty.
    pub title: String,
    /// Body text; may be empty.
    pub description: String,
    /// Optional image reference (file path or URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Note {
    /// Creates a note with a generated stable id and no image.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, description, None)
    }

    /// Creates a note with a generated stable id and an optional image.
    pub fn with_image(
        title: impl Into<String>,
        description: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, description, image)
    }

    /// Creates a note with a caller-provided id.
    ///
    /// Used by service implementations where identity already exists.
    pub fn with_id(
        id: impl Into<NoteId>,
        title: impl Into<String>,
        description: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image,
        }
    }

    /// Returns the stable id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Single display label: title when non-empty, otherwise description.
    pub fn title_for_list(&self) -> &str {
        if self.title.is_empty() {
            &self.description
        } else {
            &self.title
        }
    }

    /// Returns whether both title and description are empty.
    ///
    /// The image reference does not make a note non-empty.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
