//! Drawer Target
//!
//! What the editor drawer is currently editing.

use crate::models::NoteDraft;

/// Editing target: an existing note, or a pending draft whose submit
/// creates it
#[derive(Clone, Debug, PartialEq)]
pub enum DrawerTarget {
    Note(String),
    Draft(NoteDraft),
}
