//! Field validation for note title/description input.
//!
//! # Invariants
//! - Both fields are checked on every call; errors are collected, never
//!   short-circuited.
//! - At most one error is reported per field.
//! - Lengths count Unicode scalar values, not bytes.
//! - Input is never rewritten; trimming only feeds the blank/min checks.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum title length after trimming.
pub const TITLE_MIN_CHARS: usize = 3;
/// Maximum title length.
pub const TITLE_MAX_CHARS: usize = 50;
/// Maximum description length.
pub const DESCRIPTION_MAX_CHARS: usize = 120;

/// Which input field an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoteField {
    Title,
    Description,
}

/// One failed rule for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    TitleRequired,
    TitleTooShort,
    TitleTooLong,
    DescriptionRequired,
    DescriptionTooLong,
}

impl FieldError {
    pub fn field(self) -> NoteField {
        match self {
            Self::TitleRequired | Self::TitleTooShort | Self::TitleTooLong => NoteField::Title,
            Self::DescriptionRequired | Self::DescriptionTooLong => NoteField::Description,
        }
    }

    /// User-facing message shown under the offending input.
    pub fn message(self) -> &'static str {
        match self {
            Self::TitleRequired => "Title is required",
            Self::TitleTooShort => "Title must be at least 3 characters",
            Self::TitleTooLong => "Title cannot exceed 50 characters",
            Self::DescriptionRequired => "Description is required",
            Self::DescriptionTooLong => "Description cannot exceed 120 characters",
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// All field errors produced by one add/edit attempt.
///
/// Never empty when returned from `validate_note_fields`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Errors in field order (title first).
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn contains(&self, error: FieldError) -> bool {
        self.errors.contains(&error)
    }

    pub fn title_error(&self) -> Option<FieldError> {
        self.for_field(NoteField::Title)
    }

    pub fn description_error(&self) -> Option<FieldError> {
        self.for_field(NoteField::Description)
    }

    fn for_field(&self, field: NoteField) -> Option<FieldError> {
        self.errors.iter().copied().find(|err| err.field() == field)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(|err| err.message())
            .collect::<Vec<_>>();
        write!(f, "invalid note input: {}", messages.join("; "))
    }
}

impl Error for ValidationError {}

/// Validates title and description together.
///
/// # Errors
/// - Returns every failing rule across both fields, one per field at most.
pub fn validate_note_fields(title: &str, description: &str) -> Result<(), ValidationError> {
    let errors = [check_title(title), check_description(description)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}

fn check_title(title: &str) -> Option<FieldError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Some(FieldError::TitleRequired);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Some(FieldError::TitleTooLong);
    }
    if trimmed.chars().count() < TITLE_MIN_CHARS {
        return Some(FieldError::TitleTooShort);
    }
    None
}

fn check_description(description: &str) -> Option<FieldError> {
    if description.trim().is_empty() {
        return Some(FieldError::DescriptionRequired);
    }
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Some(FieldError::DescriptionTooLong);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{validate_note_fields, FieldError, NoteField};

    #[test]
    fn accepts_boundary_lengths() {
        validate_note_fields("abc", "d").expect("minimum lengths are valid");
        validate_note_fields(&"t".repeat(50), &"d".repeat(120)).expect("maximum lengths are valid");
    }

    #[test]
    fn title_min_length_is_measured_after_trim() {
        let err = validate_note_fields("  ab  ", "body").expect_err("trimmed title too short");
        assert_eq!(err.errors(), &[FieldError::TitleTooShort]);
    }

    #[test]
    fn blank_title_reports_required_only() {
        let err = validate_note_fields("   ", "body").expect_err("blank title must fail");
        assert_eq!(err.errors(), &[FieldError::TitleRequired]);
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let title = "é".repeat(50);
        assert!(title.len() > 50);
        validate_note_fields(&title, "ü").expect("50 multi-byte chars are valid");
    }

    #[test]
    fn collects_errors_for_both_fields() {
        let err = validate_note_fields(&"a".repeat(51), &"d".repeat(121))
            .expect_err("both fields too long");
        assert_eq!(err.title_error(), Some(FieldError::TitleTooLong));
        assert_eq!(err.description_error(), Some(FieldError::DescriptionTooLong));
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn display_joins_user_messages() {
        let err = validate_note_fields("", "").expect_err("empty input must fail");
        let text = err.to_string();
        assert!(text.contains("Title is required"));
        assert!(text.contains("Description is required"));
        assert_eq!(FieldError::DescriptionRequired.field(), NoteField::Description);
    }
}
