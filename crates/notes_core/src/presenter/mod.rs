//! Presenters mediating between the repository and passive views.
//!
//! # Responsibility
//! - Sequence repository calls for one screen each (list, detail, add).
//! - Translate repository outcomes into ordered view instructions.
//!
//! # Invariants
//! - Presenters are the only component that calls into a view.
//! - On every load, `set_progress_indicator(false)` is issued before any
//!   content or outcome call for that load.
//! - One repository call per user action; no fan-out.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub mod add_note;
pub mod note_detail;
pub mod notes;

/// Counting busy/idle signal for outstanding asynchronous work.
///
/// Clones share one counter, so a presenter can hand a clone to its
/// callbacks and to an external observer.
#[derive(Debug, Clone, Default)]
pub struct IdleSignal {
    pending: Arc<AtomicUsize>,
}

impl IdleSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one unit of work as started.
    pub fn increment(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    /// Marks one unit of work as finished. Never goes below zero.
    pub fn decrement(&self) {
        let _ = self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |value| {
                value.checked_sub(1)
            });
    }

    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}
