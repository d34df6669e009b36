//! Domain model for notes and their input rules.
//!
//! # Responsibility
//! - Define the note record used by store, FFI and shells.
//! - Own the title/description validation rules shared by add and edit.
//!
//! # Invariants
//! - Every note is identified by a store-assigned `NoteId`.
//! - Validation runs before a write, never after.

pub mod note;
pub mod validation;
