//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record owned by `NoteStore`.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another note.
//! - `title`/`description` are only written after passing validation.
//! - `completed` is never validated.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by `NoteStore` at creation time.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = u64;

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Sequential id, starting at 1.
    pub id: NoteId,
    /// Short headline, 3..=50 characters.
    pub title: String,
    /// Body text, 1..=120 characters.
    pub description: String,
    /// Checkbox state shown in the list.
    #[serde(default)]
    pub completed: bool,
}

impl Note {
    /// Builds a not-yet-completed note. Callers must validate fields first.
    pub(crate) fn new(id: NoteId, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
        }
    }
}
