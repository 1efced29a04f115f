//! Note Models
//!
//! The note entity, its unsaved/partial forms, and the wire format of the
//! record store. Backends disagree on the identifier field (`_id` vs `id`,
//! string vs number) and may omit attributes, so everything coming off the
//! wire passes through [`WireNote`] before it reaches the board.

use serde::{Deserialize, Serialize};

/// Fixed swatch palette; the first entry is the default color.
pub const COLORS: &[&str] = &["#fce7f3", "#fef9c3", "#dcfce7", "#dbeafe", "#ede9fe"];

/// Default note edge length in pixels
pub const DEFAULT_SIZE: f64 = 200.0;

/// Default position for records that arrive without coordinates
const DEFAULT_POS: f64 = 40.0;

/// A positioned, styled note card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub rotation: f64,
    pub opacity: f64,
}

impl Note {
    /// A note with every attribute at its default.
    pub fn with_defaults(id: String) -> Self {
        Self {
            id,
            title: String::new(),
            content: String::new(),
            x: DEFAULT_POS,
            y: DEFAULT_POS,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            color: COLORS[0].to_string(),
            rotation: 0.0,
            opacity: 1.0,
        }
    }

    /// Normalize a wire record; `None` when it carries no identifier.
    pub fn from_wire(wire: WireNote) -> Option<Self> {
        let id = wire.server_id()?;
        let mut note = Note::with_defaults(id);
        note.apply_patch(&wire.into_patch());
        Some(note)
    }

    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        serde_json::from_value::<WireNote>(value)
            .ok()
            .and_then(Note::from_wire)
    }

    /// Merge the present fields of a partial update into the note.
    pub fn apply_patch(&mut self, patch: &NotePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity;
        }
    }
}

/// A note pending creation; the server assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub rotation: f64,
    pub opacity: f64,
}

impl NoteDraft {
    /// A fresh draft at the given board position.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            title: "New note".to_string(),
            content: String::new(),
            x,
            y,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            color: COLORS[0].to_string(),
            rotation: 0.0,
            opacity: 1.0,
        }
    }

    /// The draft with the present fields of `patch` applied on top.
    pub fn merged(&self, patch: &NotePatch) -> Self {
        let mut draft = self.clone();
        if let Some(title) = &patch.title {
            draft.title = title.clone();
        }
        if let Some(content) = &patch.content {
            draft.content = content.clone();
        }
        if let Some(x) = patch.x {
            draft.x = x;
        }
        if let Some(y) = patch.y {
            draft.y = y;
        }
        if let Some(width) = patch.width {
            draft.width = width;
        }
        if let Some(height) = patch.height {
            draft.height = height;
        }
        if let Some(color) = &patch.color {
            draft.color = color.clone();
        }
        if let Some(rotation) = patch.rotation {
            draft.rotation = rotation;
        }
        if let Some(opacity) = patch.opacity {
            draft.opacity = opacity;
        }
        draft
    }
}

/// Partial note update; only present fields are serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl NotePatch {
    /// Position-only patch used by the drag persistence path.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }
}

/// Server identifiers arrive as strings or numbers depending on dialect.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(serde_json::Number),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Text(text) => text,
            WireId::Number(number) => number.to_string(),
        }
    }
}

/// A raw record as returned by either backend. Absent fields are filled
/// with defaults by [`Note::from_wire`]; [`WireNote::into_patch`] keeps the
/// partiality for merge-into-existing updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireNote {
    #[serde(rename = "_id", default)]
    record_id: Option<WireId>,
    #[serde(default)]
    id: Option<WireId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    rotation: Option<f64>,
    #[serde(default)]
    opacity: Option<f64>,
}

impl WireNote {
    /// The record identifier, `_id` winning over `id`.
    pub fn server_id(&self) -> Option<String> {
        self.record_id
            .clone()
            .or_else(|| self.id.clone())
            .map(WireId::into_string)
    }

    /// The record's present fields as a partial update.
    pub fn into_patch(self) -> NotePatch {
        NotePatch {
            title: self.title,
            content: self.content,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            color: self.color,
            rotation: self.rotation,
            opacity: self.opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_record_id_wins_over_id() {
        let note = Note::from_value(json!({"_id": "abc", "id": 7, "title": "t"})).unwrap();
        assert_eq!(note.id, "abc");
    }

    #[test]
    fn wire_numeric_id_becomes_text() {
        let note = Note::from_value(json!({"id": 42})).unwrap();
        assert_eq!(note.id, "42");
    }

    #[test]
    fn wire_record_without_id_is_dropped() {
        assert!(Note::from_value(json!({"title": "orphan"})).is_none());
    }

    #[test]
    fn absent_fields_fill_with_defaults() {
        let note = Note::from_value(json!({"id": "n1", "title": "hello"})).unwrap();
        assert_eq!(note.title, "hello");
        assert_eq!(note.content, "");
        assert_eq!((note.x, note.y), (40.0, 40.0));
        assert_eq!((note.width, note.height), (200.0, 200.0));
        assert_eq!(note.color, COLORS[0]);
        assert_eq!(note.rotation, 0.0);
        assert_eq!(note.opacity, 1.0);
    }

    #[test]
    fn apply_patch_merges_only_present_fields() {
        let mut note = Note::with_defaults("n1".into());
        note.title = "keep".into();
        note.apply_patch(&NotePatch {
            x: Some(120.0),
            opacity: Some(0.5),
            ..Default::default()
        });
        assert_eq!(note.title, "keep");
        assert_eq!(note.x, 120.0);
        assert_eq!(note.opacity, 0.5);
    }

    #[test]
    fn position_patch_serializes_only_coordinates() {
        let body = serde_json::to_value(NotePatch::position(10.0, 20.0)).unwrap();
        assert_eq!(body, json!({"x": 10.0, "y": 20.0}));
    }

    #[test]
    fn draft_merged_applies_form_fields_over_the_draft() {
        let draft = NoteDraft::at(100.0, 50.0);
        let merged = draft.merged(&NotePatch {
            title: Some("groceries".into()),
            color: Some(COLORS[2].to_string()),
            ..Default::default()
        });
        assert_eq!(merged.title, "groceries");
        assert_eq!(merged.color, COLORS[2]);
        assert_eq!((merged.x, merged.y), (100.0, 50.0));
    }

    #[test]
    fn draft_round_trips_through_the_wire_format() {
        let draft = NoteDraft {
            title: "list".into(),
            content: "milk".into(),
            x: 12.0,
            y: 34.0,
            width: 240.0,
            height: 180.0,
            color: COLORS[3].to_string(),
            rotation: -3.0,
            opacity: 0.9,
        };
        let mut value = serde_json::to_value(&draft).unwrap();
        value["_id"] = json!("server-1");
        let note = Note::from_value(value).unwrap();
        assert_eq!(note.id, "server-1");
        assert_eq!(note.title, draft.title);
        assert_eq!(note.content, draft.content);
        assert_eq!((note.x, note.y), (draft.x, draft.y));
        assert_eq!((note.width, note.height), (draft.width, draft.height));
        assert_eq!(note.color, draft.color);
        assert_eq!(note.rotation, draft.rotation);
        assert_eq!(note.opacity, draft.opacity);
    }

    #[test]
    fn wire_into_patch_keeps_partiality() {
        let wire: WireNote = serde_json::from_value(json!({"_id": "n1", "x": 5.0})).unwrap();
        let patch = wire.into_patch();
        assert_eq!(patch.x, Some(5.0));
        assert!(patch.y.is_none());
        assert!(patch.title.is_none());
    }
}
