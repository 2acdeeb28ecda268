//! Image file contract for the add-note capture round trip.
//!
//! # Responsibility
//! - Define the handle the add-note presenter uses to reserve, inspect and
//!   discard the file an external camera writes into.
//!
//! # Invariants
//! - `create` failures surface as `std::io::Error`; they are never swallowed.
//! - `delete` is best-effort and idempotent.

use std::io;

pub mod temp_file;

/// Handle to the single image file of one add-note flow.
pub trait ImageFile: Send {
    /// Reserves a new empty file named `<name><random><extension>`.
    fn create(&mut self, name: &str, extension: &str) -> io::Result<()>;
    /// Readable location of the current file, if one was created.
    fn path(&self) -> Option<String>;
    /// Returns whether the current file exists on storage.
    fn exists(&self) -> bool;
    /// Removes the current file and forgets it.
    fn delete(&mut self);
}
