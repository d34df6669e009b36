//! In-memory note collection and its mutation rules.
//!
//! # Responsibility
//! - Own the ordered live note collection and id assignment.
//! - Run validation before every add/edit write.
//! - Provide two-phase delete: immediate removal plus a time-boxed restore.
//! - Notify subscribers after each successful mutation.
//!
//! # Invariants
//! - Ids are strictly increasing and never reused, even after removal.
//! - Collection order is insertion order; edit/toggle never reorder.
//! - A failed operation leaves the collection untouched.
//! - Log lines carry ids and event names only, never note text.

use crate::model::note::{Note, NoteId};
use crate::model::validation::{validate_note_fields, ValidationError};
use crate::store::errors::{EditError, NoteNotFound, UndoError};
use crate::store::events::{StoreEvent, StoreListener, SubscriptionId};
use crate::store::undo::{RemovalToken, RemovedNote, RestorePosition, DEFAULT_UNDO_WINDOW};
use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Behavior knobs for `NoteStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// How long a removal stays undoable.
    pub undo_window: Duration,
    /// Where restored notes are reinserted.
    pub restore_position: RestorePosition,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            undo_window: DEFAULT_UNDO_WINDOW,
            restore_position: RestorePosition::Append,
        }
    }
}

/// Owning component for the note collection.
pub struct NoteStore {
    config: StoreConfig,
    notes: Vec<Note>,
    next_id: NoteId,
    next_token: u64,
    pending: Option<RemovedNote>,
    listeners: BTreeMap<SubscriptionId, Arc<dyn StoreListener>>,
    next_subscription: u64,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Creates an empty store with default config.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            notes: Vec::new(),
            next_id: 1,
            next_token: 1,
            pending: None,
            listeners: BTreeMap::new(),
            next_subscription: 1,
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Ordered snapshot of live notes.
    pub fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    /// Looks up one live note, e.g. to resolve an edit screen target.
    pub fn get(&self, id: NoteId) -> Option<Note> {
        self.notes.iter().find(|note| note.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Validates input and appends a new note.
    ///
    /// # Errors
    /// - Returns all field errors when either field is invalid; no id is
    ///   consumed in that case.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Note, ValidationError> {
        let title = title.into();
        let description = description.into();
        if let Err(err) = validate_note_fields(&title, &description) {
            debug!(
                "event=note_add module=store status=rejected errors={}",
                err.errors().len()
            );
            return Err(err);
        }

        let note = Note::new(self.next_id, title, description);
        self.next_id += 1;
        self.notes.push(note.clone());
        info!("event=note_add module=store status=ok id={}", note.id);
        self.emit(StoreEvent::Added(note.clone()));
        Ok(note)
    }

    /// Replaces title/description of a live note in place.
    ///
    /// # Errors
    /// - `EditError::NotFound` when no live note has `id`.
    /// - `EditError::Invalid` with all field errors otherwise.
    pub fn edit(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Note, EditError> {
        let index = self.index_of(id)?;
        let title = title.into();
        let description = description.into();
        validate_note_fields(&title, &description)?;

        let note = &mut self.notes[index];
        note.title = title;
        note.description = description;
        let updated = note.clone();
        info!("event=note_edit module=store status=ok id={id}");
        self.emit(StoreEvent::Edited(updated.clone()));
        Ok(updated)
    }

    /// Flips `completed`. No validation.
    pub fn toggle_completed(&mut self, id: NoteId) -> Result<Note, NoteNotFound> {
        let index = self.index_of(id)?;
        let note = &mut self.notes[index];
        note.completed = !note.completed;
        let updated = note.clone();
        debug!(
            "event=note_toggle module=store status=ok id={id} completed={}",
            updated.completed
        );
        self.emit(StoreEvent::Toggled(updated.clone()));
        Ok(updated)
    }

    /// Removes a note from the live collection and opens its undo window.
    ///
    /// Any earlier pending undo is finalized first.
    pub fn remove(&mut self, id: NoteId) -> Result<RemovedNote, NoteNotFound> {
        let index = self.index_of(id)?;
        self.finalize_pending();

        let note = self.notes.remove(index);
        let token = RemovalToken(self.next_token);
        self.next_token += 1;
        let removed = RemovedNote {
            token,
            note: note.clone(),
            original_index: index,
            removed_at: Instant::now(),
        };
        self.pending = Some(removed.clone());
        info!("event=note_remove module=store status=ok id={id} token={token}");
        self.emit(StoreEvent::Removed { note, token });
        Ok(removed)
    }

    /// Puts a removed note back while its undo window is open.
    ///
    /// # Errors
    /// - `UndoError::AlreadyRestored` when the note is live again; the
    ///   collection is never duplicated.
    /// - `UndoError::WindowClosed` when the window elapsed, was dismissed, or
    ///   was superseded by a later removal.
    pub fn undo_remove(&mut self, removed: &RemovedNote) -> Result<Note, UndoError> {
        let id = removed.note.id;
        if self.index_of(id).is_ok() {
            return Err(UndoError::AlreadyRestored(id));
        }

        let is_pending = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.token == removed.token);
        if !is_pending {
            return Err(UndoError::WindowClosed(id));
        }
        if !removed.window_open(self.config.undo_window) {
            self.finalize_pending();
            return Err(UndoError::WindowClosed(id));
        }

        self.pending = None;
        let note = removed.note.clone();
        let index = match self.config.restore_position {
            RestorePosition::Append => self.notes.len(),
            RestorePosition::Original => removed.original_index.min(self.notes.len()),
        };
        self.notes.insert(index, note.clone());
        info!(
            "event=note_restore module=store status=ok id={id} token={} index={index}",
            removed.token
        );
        self.emit(StoreEvent::Restored(note.clone()));
        Ok(note)
    }

    /// Pending removal whose undo window is still open.
    pub fn pending_undo(&self) -> Option<&RemovedNote> {
        self.pending
            .as_ref()
            .filter(|pending| pending.window_open(self.config.undo_window))
    }

    /// Returns whether `removed` can still be undone.
    pub fn undo_window_open(&self, removed: &RemovedNote) -> bool {
        self.pending_undo()
            .is_some_and(|pending| pending.token == removed.token)
    }

    /// Finalizes the pending removal once its window has elapsed.
    ///
    /// Shells call this on their own tick. Returns whether a removal was
    /// finalized.
    pub fn poll_undo_window(&mut self) -> bool {
        let expired = self
            .pending
            .as_ref()
            .is_some_and(|pending| !pending.window_open(self.config.undo_window));
        if expired {
            self.finalize_pending();
        }
        expired
    }

    /// Closes the undo window immediately (banner dismissed).
    ///
    /// Returns whether a pending removal was finalized.
    pub fn close_undo_window(&mut self) -> bool {
        self.finalize_pending()
    }

    /// Registers a change listener.
    pub fn subscribe<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: StoreListener + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.insert(id, Arc::new(listener));
        id
    }

    /// Removes a listener. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    fn index_of(&self, id: NoteId) -> Result<usize, NoteNotFound> {
        self.notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(NoteNotFound(id))
    }

    fn finalize_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let id = pending.note.id;
        debug!(
            "event=note_remove_finalized module=store status=ok id={id} token={}",
            pending.token
        );
        self.emit(StoreEvent::RemovalFinalized {
            id,
            token: pending.token,
        });
        true
    }

    fn emit(&self, event: StoreEvent) {
        for listener in self.listeners.values() {
            listener.on_event(&event);
        }
    }
}
