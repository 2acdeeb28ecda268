//! Domain model for the notes client.
//!
//! # Responsibility
//! - Define the note value shared by repository, service and presenters.
//!
//! # Invariants
//! - Every note is identified by a stable string `NoteId`.
//! - Note identity is id-based; content never participates in equality.

pub mod note;
