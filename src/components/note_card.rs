//! Note Card Component
//!
//! A single absolutely positioned note. The card body is the drag handle;
//! the header actions edit and delete.

use leptos::prelude::*;

use crate::models::Note;

/// A positioned note card with edit/delete actions
#[component]
pub fn NoteCard(
    note: Note,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(into)] on_grab: Callback<web_sys::MouseEvent>,
) -> impl IntoView {
    let style = format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; background: {}; transform: rotate({}deg); opacity: {};",
        note.x, note.y, note.width, note.height, note.color, note.rotation, note.opacity
    );
    let title = if note.title.is_empty() {
        "Untitled".to_string()
    } else {
        note.title.clone()
    };

    view! {
        <div
            class="note"
            style=style
            on:mousedown=move |ev| on_grab.run(ev)
            on:dblclick=move |_| on_edit.run(())
        >
            <div class="note-header">
                <div class="note-title">{title}</div>
                <div class="note-actions">
                    <button
                        type="button"
                        title="Edit"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_edit.run(());
                        }
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        title="Delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_delete.run(());
                        }
                    >
                        "🗑"
                    </button>
                </div>
            </div>
            <div class="note-content">{note.content.clone()}</div>
        </div>
    }
}
