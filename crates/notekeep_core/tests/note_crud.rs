use notekeep_core::{EditError, FieldError, NoteNotFound, NoteStore};

#[test]
fn add_returns_note_with_exact_inputs() {
    let mut store = NoteStore::new();
    let title = "  Groceries ";
    let description = "milk, eggs\nbread";

    let note = store.add(title, description).unwrap();
    assert_eq!(note.title, title);
    assert_eq!(note.description, description);
    assert!(!note.completed);
    assert_eq!(store.list(), vec![note]);
}

#[test]
fn add_rejects_short_title() {
    let mut store = NoteStore::new();
    let err = store.add("ab", "valid").unwrap_err();
    assert_eq!(err.errors(), &[FieldError::TitleTooShort]);
    assert!(store.is_empty());
}

#[test]
fn add_rejects_long_title() {
    let mut store = NoteStore::new();
    let err = store.add("a".repeat(51), "valid").unwrap_err();
    assert_eq!(err.errors(), &[FieldError::TitleTooLong]);
}

#[test]
fn add_rejects_long_description() {
    let mut store = NoteStore::new();
    let err = store.add("valid title", "d".repeat(121)).unwrap_err();
    assert_eq!(err.errors(), &[FieldError::DescriptionTooLong]);
}

#[test]
fn add_reports_both_required_errors_together() {
    let mut store = NoteStore::new();
    let err = store.add("", "").unwrap_err();
    assert!(err.contains(FieldError::TitleRequired));
    assert!(err.contains(FieldError::DescriptionRequired));
    assert_eq!(err.errors().len(), 2);
    assert!(store.is_empty());
}

#[test]
fn ids_increase_and_are_never_reused_after_remove() {
    let mut store = NoteStore::new();
    let first = store.add("first", "1").unwrap();
    let second = store.add("second", "2").unwrap();
    let third = store.add("third", "3").unwrap();
    assert!(first.id < second.id && second.id < third.id);

    store.remove(second.id).unwrap();
    let fourth = store.add("fourth", "4").unwrap();
    assert!(fourth.id > third.id);

    let ids = store.list().iter().map(|note| note.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![first.id, third.id, fourth.id]);
}

#[test]
fn edit_replaces_fields_in_place() {
    let mut store = NoteStore::new();
    let first = store.add("first", "1").unwrap();
    let second = store.add("second", "2").unwrap();
    store.toggle_completed(first.id).unwrap();

    let edited = store.edit(first.id, "renamed", "new body").unwrap();
    assert_eq!(edited.id, first.id);
    assert_eq!(edited.title, "renamed");
    assert_eq!(edited.description, "new body");
    assert!(edited.completed);

    let listed = store.list();
    assert_eq!(listed[0], edited);
    assert_eq!(listed[1], second);
}

#[test]
fn edit_unknown_id_is_not_found_and_leaves_store_unchanged() {
    let mut store = NoteStore::new();
    store.add("first", "1").unwrap();
    let before = store.list();

    let err = store.edit(42, "valid title", "valid").unwrap_err();
    assert_eq!(err, EditError::NotFound(42));
    assert_eq!(store.list(), before);
}

#[test]
fn edit_with_invalid_input_leaves_note_unchanged() {
    let mut store = NoteStore::new();
    let note = store.add("first", "1").unwrap();

    let err = store.edit(note.id, "no", "").unwrap_err();
    match err {
        EditError::Invalid(validation) => {
            assert_eq!(validation.title_error(), Some(FieldError::TitleTooShort));
            assert_eq!(
                validation.description_error(),
                Some(FieldError::DescriptionRequired)
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.get(note.id), Some(note));
}

#[test]
fn toggle_twice_restores_original_value() {
    let mut store = NoteStore::new();
    let note = store.add("task", "do it").unwrap();

    let once = store.toggle_completed(note.id).unwrap();
    assert!(once.completed);
    let twice = store.toggle_completed(note.id).unwrap();
    assert_eq!(twice, note);
}

#[test]
fn toggle_and_remove_unknown_id_fail_with_not_found() {
    let mut store = NoteStore::new();
    assert_eq!(store.toggle_completed(7).unwrap_err(), NoteNotFound(7));
    assert_eq!(store.remove(7).unwrap_err(), NoteNotFound(7));
}

#[test]
fn get_resolves_live_notes_only() {
    let mut store = NoteStore::new();
    let note = store.add("target", "edit me").unwrap();
    assert_eq!(store.get(note.id), Some(note.clone()));

    store.remove(note.id).unwrap();
    assert_eq!(store.get(note.id), None);
}
