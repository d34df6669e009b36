//! Reversible-delete capability and undo window policy.
//!
//! # Invariants
//! - At most one removal is undoable at a time; a newer removal closes the
//!   previous window (last wins).
//! - A window is open while `elapsed < undo_window`.

use crate::model::note::Note;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// Default undo window, matching a short dismissible banner.
pub const DEFAULT_UNDO_WINDOW: Duration = Duration::from_secs(4);

/// Where `undo_remove` puts a restored note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestorePosition {
    /// Append at the end of the list.
    #[default]
    Append,
    /// Reinsert at the index the note had before removal, clamped to length.
    Original,
}

/// Identity of one `remove` call. Unique for the store's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RemovalToken(pub u64);

impl Display for RemovalToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Restore capability returned by `NoteStore::remove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedNote {
    pub(crate) token: RemovalToken,
    pub(crate) note: Note,
    pub(crate) original_index: usize,
    pub(crate) removed_at: Instant,
}

impl RemovedNote {
    pub fn token(&self) -> RemovalToken {
        self.token
    }

    /// Snapshot of the note as it was when removed.
    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn original_index(&self) -> usize {
        self.original_index
    }

    pub(crate) fn window_open(&self, undo_window: Duration) -> bool {
        self.removed_at.elapsed() < undo_window
    }
}
