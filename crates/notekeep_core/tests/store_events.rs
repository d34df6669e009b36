use notekeep_core::{NoteStore, StoreEvent};
use std::sync::{Arc, Mutex};

fn recording_store() -> (NoteStore, Arc<Mutex<Vec<StoreEvent>>>) {
    let mut store = NoteStore::new();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    store.subscribe(move |event: &StoreEvent| sink.lock().unwrap().push(event.clone()));
    (store, events)
}

#[test]
fn listeners_see_mutations_in_order() {
    let (mut store, events) = recording_store();
    let note = store.add("watched", "body").unwrap();
    store.edit(note.id, "watched again", "body").unwrap();
    store.toggle_completed(note.id).unwrap();
    let removed = store.remove(note.id).unwrap();
    store.undo_remove(&removed).unwrap();

    let names = events
        .lock()
        .unwrap()
        .iter()
        .map(StoreEvent::name)
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "note_add",
            "note_edit",
            "note_toggle",
            "note_remove",
            "note_restore"
        ]
    );
    assert!(events
        .lock()
        .unwrap()
        .iter()
        .all(|event| event.note_id() == note.id));
}

#[test]
fn failed_operations_emit_nothing() {
    let (mut store, events) = recording_store();
    store.add("", "").unwrap_err();
    store.edit(9, "valid title", "valid").unwrap_err();
    store.toggle_completed(9).unwrap_err();
    store.remove(9).unwrap_err();

    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn superseded_removal_emits_finalized_before_new_remove() {
    let (mut store, events) = recording_store();
    let first = store.add("first", "1").unwrap();
    let second = store.add("second", "2").unwrap();
    let removed_first = store.remove(first.id).unwrap();
    store.remove(second.id).unwrap();

    let recorded = events.lock().unwrap();
    let tail = &recorded[recorded.len() - 3..];
    assert!(matches!(
        &tail[0],
        StoreEvent::Removed { note, .. } if note.id == first.id
    ));
    assert_eq!(
        tail[1],
        StoreEvent::RemovalFinalized {
            id: first.id,
            token: removed_first.token(),
        }
    );
    assert!(matches!(
        &tail[2],
        StoreEvent::Removed { note, .. } if note.id == second.id
    ));
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let mut store = NoteStore::new();
    let count = Arc::new(Mutex::new(0_usize));
    let counter = Arc::clone(&count);
    let subscription = store.subscribe(move |_event: &StoreEvent| {
        *counter.lock().unwrap() += 1;
    });

    store.add("counted", "1").unwrap();
    assert!(store.unsubscribe(subscription));
    assert!(!store.unsubscribe(subscription));
    store.add("ignored", "2").unwrap();

    assert_eq!(*count.lock().unwrap(), 1);
}
