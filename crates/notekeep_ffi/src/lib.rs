//! Flutter bridge crate for NoteKeep core.

pub mod api;
