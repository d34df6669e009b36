//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose note list/add/edit/toggle/delete/undo to Dart via FRB.
//! - Flatten core errors into field messages the UI can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide `NoteStore`; every call takes its lock, so writes are
//!   serialized.
//! - A poisoned lock is recovered, never propagated.

use notekeep_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    EditError, Note, NoteStore, RemovalToken, RemovedNote, StoreConfig, ValidationError,
};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Duration;

const UNDO_WINDOW_ENV: &str = "NOTEKEEP_UNDO_WINDOW_MS";
static BRIDGE: OnceLock<Mutex<BridgeState>> = OnceLock::new();

/// Process-wide store plus the restore capability of the latest delete.
///
/// The capability outlives a successful undo so that replaying a token
/// reaches the core and reports `AlreadyRestored`.
struct BridgeState {
    store: NoteStore,
    last_removed: Option<RemovedNote>,
}

impl BridgeState {
    fn new(config: StoreConfig) -> Self {
        Self {
            store: NoteStore::with_config(config),
            last_removed: None,
        }
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Note row rendered by the list and edit screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Generic action response envelope for note screens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Note after the operation (or the removed snapshot for deletes).
    pub note: Option<NoteItem>,
    /// Message shown under the title input.
    pub title_error: Option<String>,
    /// Message shown under the description input.
    pub description_error: Option<String>,
    /// Set by `note_remove`; pass back to `note_undo_remove`.
    pub undo_token: Option<u64>,
    /// Toast text for the UI, or diagnostics on failure.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note: Note) -> Self {
        Self {
            ok: true,
            note: Some(to_note_item(note)),
            message: message.into(),
            ..Self::default()
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            ..Self::default()
        }
    }

    fn invalid(err: &ValidationError) -> Self {
        Self {
            ok: false,
            title_error: err.title_error().map(|e| e.message().to_string()),
            description_error: err.description_error().map(|e| e.message().to_string()),
            message: err.to_string(),
            ..Self::default()
        }
    }
}

/// Lists live notes in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn note_list() -> Vec<NoteItem> {
    lock_bridge()
        .store
        .list()
        .into_iter()
        .map(to_note_item)
        .collect()
}

/// Resolves an edit screen target.
///
/// Returns `None` for ids that are no longer live; callers should pop back
/// to the list without rendering.
#[flutter_rust_bridge::frb(sync)]
pub fn note_get(id: u64) -> Option<NoteItem> {
    lock_bridge().store.get(id).map(to_note_item)
}

/// Adds a note from the add screen form.
#[flutter_rust_bridge::frb(sync)]
pub fn note_add(title: String, description: String) -> NoteActionResponse {
    match lock_bridge().store.add(title, description) {
        Ok(note) => NoteActionResponse::success("Note added", note),
        Err(err) => NoteActionResponse::invalid(&err),
    }
}

/// Saves the edit screen form.
#[flutter_rust_bridge::frb(sync)]
pub fn note_edit(id: u64, title: String, description: String) -> NoteActionResponse {
    match lock_bridge().store.edit(id, title, description) {
        Ok(note) => NoteActionResponse::success("Note edited", note),
        Err(EditError::Invalid(err)) => NoteActionResponse::invalid(&err),
        Err(err @ EditError::NotFound(_)) => {
            NoteActionResponse::failure(format!("note_edit failed: {err}"))
        }
    }
}

/// Flips the checkbox state of one note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_toggle(id: u64) -> NoteActionResponse {
    match lock_bridge().store.toggle_completed(id) {
        Ok(note) => NoteActionResponse::success("Note updated", note),
        Err(err) => NoteActionResponse::failure(format!("note_toggle failed: {err}")),
    }
}

/// Deletes a note and opens its undo window.
///
/// # FFI contract
/// - Success carries `undo_token`; a later delete invalidates earlier tokens.
#[flutter_rust_bridge::frb(sync)]
pub fn note_remove(id: u64) -> NoteActionResponse {
    remove_with(&mut lock_bridge(), id)
}

/// Undo action of the delete banner.
///
/// # FFI contract
/// - Known tokens are always delegated to the core, so replays report
///   "already restored" and expired windows are finalized.
#[flutter_rust_bridge::frb(sync)]
pub fn note_undo_remove(undo_token: u64) -> NoteActionResponse {
    undo_with(&mut lock_bridge(), undo_token)
}

/// Delete banner dismissed or timed out; finalizes the pending delete.
///
/// Returns whether a pending delete was finalized.
#[flutter_rust_bridge::frb(sync)]
pub fn note_dismiss_undo() -> bool {
    lock_bridge().store.close_undo_window()
}

fn remove_with(state: &mut BridgeState, id: u64) -> NoteActionResponse {
    match state.store.remove(id) {
        Ok(removed) => {
            let mut response = NoteActionResponse::success("Note deleted", removed.note().clone());
            response.undo_token = Some(removed.token().0);
            state.last_removed = Some(removed);
            response
        }
        Err(err) => NoteActionResponse::failure(format!("note_remove failed: {err}")),
    }
}

fn undo_with(state: &mut BridgeState, undo_token: u64) -> NoteActionResponse {
    let Some(removed) = state
        .last_removed
        .as_ref()
        .filter(|removed| removed.token() == RemovalToken(undo_token))
    else {
        return NoteActionResponse::failure(format!(
            "note_undo_remove failed: unknown undo token {undo_token}"
        ));
    };

    match state.store.undo_remove(removed) {
        Ok(note) => NoteActionResponse::success("Note restored", note),
        Err(err) => NoteActionResponse::failure(format!("note_undo_remove failed: {err}")),
    }
}

fn lock_bridge() -> MutexGuard<'static, BridgeState> {
    BRIDGE
        .get_or_init(|| Mutex::new(BridgeState::new(resolve_store_config())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn resolve_store_config() -> StoreConfig {
    let mut config = StoreConfig::default();
    // Unit tests share one process-wide store; keep them on the default window.
    if cfg!(test) {
        return config;
    }
    if let Some(window) = parse_undo_window(std::env::var(UNDO_WINDOW_ENV).ok().as_deref()) {
        config.undo_window = window;
    }
    config
}

fn parse_undo_window(raw: Option<&str>) -> Option<Duration> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
}

fn to_note_item(note: Note) -> NoteItem {
    NoteItem {
        id: note.id,
        title: note.title,
        description: note.description,
        completed: note.completed,
    }
}
