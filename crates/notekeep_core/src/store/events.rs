//! Change notification for store subscribers.
//!
//! Replaces an auto-refreshing observable list: shells subscribe once and
//! re-render on each event instead of polling snapshots.

use crate::model::note::{Note, NoteId};
use crate::store::undo::RemovalToken;

/// Handle returned by `NoteStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// One successful store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(Note),
    Edited(Note),
    Toggled(Note),
    Removed { note: Note, token: RemovalToken },
    Restored(Note),
    /// The undo window for this removal closed; the note is gone for good.
    RemovalFinalized { id: NoteId, token: RemovalToken },
}

impl StoreEvent {
    /// Stable event name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Added(_) => "note_add",
            Self::Edited(_) => "note_edit",
            Self::Toggled(_) => "note_toggle",
            Self::Removed { .. } => "note_remove",
            Self::Restored(_) => "note_restore",
            Self::RemovalFinalized { .. } => "note_remove_finalized",
        }
    }

    /// Id of the note the event refers to.
    pub fn note_id(&self) -> NoteId {
        match self {
            Self::Added(note) | Self::Edited(note) | Self::Toggled(note) | Self::Restored(note) => {
                note.id
            }
            Self::Removed { note, .. } => note.id,
            Self::RemovalFinalized { id, .. } => *id,
        }
    }
}

/// Receiver contract for store change events.
///
/// Listeners run synchronously on the mutating caller's thread, after the
/// mutation is applied.
pub trait StoreListener: Send + Sync {
    fn on_event(&self, event: &StoreEvent);
}

impl<F> StoreListener for F
where
    F: Fn(&StoreEvent) + Send + Sync,
{
    fn on_event(&self, event: &StoreEvent) {
        self(event)
    }
}
