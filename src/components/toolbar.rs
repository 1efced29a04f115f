//! Toolbar Component
//!
//! App title and the new-note action.

use leptos::prelude::*;

#[component]
pub fn Toolbar(#[prop(into)] on_new_note: Callback<()>) -> impl IntoView {
    view! {
        <header class="toolbar">
            <span class="toolbar-title">"Pinwall"</span>
            <button class="new-note-btn" on:click=move |_| on_new_note.run(())>
                "+ New note"
            </button>
        </header>
    }
}
