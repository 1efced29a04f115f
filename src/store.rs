//! Board State Store
//!
//! Uses Leptos reactive_stores for the note list, the single source of
//! truth for everything on screen. The list primitives are plain functions
//! over `Vec<Note>` so the mutation rules stay testable; the store helpers
//! below wrap them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Note, NotePatch};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Notes in render order, newest first
    pub notes: Vec<Note>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// List Primitives
// ========================

pub fn prepend_note(notes: &mut Vec<Note>, note: Note) {
    notes.insert(0, note);
}

pub fn patch_note(notes: &mut [Note], id: &str, patch: &NotePatch) {
    if let Some(entry) = notes.iter_mut().find(|note| note.id == id) {
        entry.apply_patch(patch);
    }
}

pub fn position_note(notes: &mut [Note], id: &str, x: f64, y: f64) {
    if let Some(entry) = notes.iter_mut().find(|note| note.id == id) {
        entry.x = x;
        entry.y = y;
    }
}

pub fn remove_note(notes: &mut Vec<Note>, id: &str) {
    notes.retain(|note| note.id != id);
}

// ========================
// Store Helpers
// ========================

/// Replace the whole list after a load
pub fn store_set_notes(store: &BoardStore, notes: Vec<Note>) {
    *store.notes().write() = notes;
}

/// Tracked read for rendering
pub fn store_notes(store: &BoardStore) -> Vec<Note> {
    store.notes().get()
}

/// Untracked lookup for event handlers
pub fn store_find_note(store: &BoardStore, id: &str) -> Option<Note> {
    store
        .notes()
        .read_untracked()
        .iter()
        .find(|note| note.id == id)
        .cloned()
}

pub fn store_prepend_note(store: &BoardStore, note: Note) {
    prepend_note(&mut store.notes().write(), note);
}

pub fn store_patch_note(store: &BoardStore, id: &str, patch: &NotePatch) {
    patch_note(&mut store.notes().write(), id, patch);
}

pub fn store_position_note(store: &BoardStore, id: &str, x: f64, y: f64) {
    position_note(&mut store.notes().write(), id, x, y);
}

pub fn store_remove_note(store: &BoardStore, id: &str) {
    remove_note(&mut store.notes().write(), id);
}
