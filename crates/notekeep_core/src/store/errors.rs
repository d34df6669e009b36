use crate::model::note::NoteId;
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Operation target id is not present in the live collection.
///
/// Usually a stale reference (e.g. an edit screen for a deleted note);
/// shells treat it as a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteNotFound(pub NoteId);

impl Display for NoteNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "note not found: {}", self.0)
    }
}

impl Error for NoteNotFound {}

/// Errors returned by `NoteStore::edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    NotFound(NoteId),
    Invalid(ValidationError),
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<NoteNotFound> for EditError {
    fn from(value: NoteNotFound) -> Self {
        Self::NotFound(value.0)
    }
}

impl From<ValidationError> for EditError {
    fn from(value: ValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Errors returned by `NoteStore::undo_remove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    /// The note is already back in the live collection.
    AlreadyRestored(NoteId),
    /// The undo window elapsed, was dismissed, or a later removal took it over.
    WindowClosed(NoteId),
}

impl Display for UndoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyRestored(id) => write!(f, "note already restored: {id}"),
            Self::WindowClosed(id) => write!(f, "undo window closed for note: {id}"),
        }
    }
}

impl Error for UndoError {}
