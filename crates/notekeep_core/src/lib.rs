//! Core domain logic for NoteKeep.
//! This crate is the single source of truth for note invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use model::validation::{
    validate_note_fields, FieldError, NoteField, ValidationError, DESCRIPTION_MAX_CHARS,
    TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
pub use store::errors::{EditError, NoteNotFound, UndoError};
pub use store::events::{StoreEvent, StoreListener, SubscriptionId};
pub use store::note_store::{NoteStore, StoreConfig};
pub use store::undo::{RemovalToken, RemovedNote, RestorePosition, DEFAULT_UNDO_WINDOW};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
