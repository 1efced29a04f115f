//! Toast Component
//!
//! Transient, non-blocking notification banner; [`AppContext::notify`]
//! drives it.
//!
//! [`AppContext::notify`]: crate::context::AppContext::notify

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Show when=move || ctx.toast.get().is_some()>
            <div class="toast show">{move || ctx.toast.get().unwrap_or_default()}</div>
        </Show>
    }
}
