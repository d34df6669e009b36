//! Note store: the single owner of live notes.
//!
//! # Responsibility
//! - Expose add/edit/toggle/remove/undo as synchronous in-process calls.
//! - Keep shells decoupled from collection bookkeeping.
//!
//! # Invariants
//! - All mutations go through `NoteStore`; shells only hold snapshots.
//! - Callers sharing a store across threads must serialize access
//!   (single writer).

pub mod errors;
pub mod events;
pub mod note_store;
pub mod undo;
