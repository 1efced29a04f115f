//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays visible, in milliseconds
const TOAST_MS: u32 = 2_500;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Transient notification message - read
    pub toast: ReadSignal<Option<String>>,
    set_toast: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(toast: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            toast: toast.0,
            set_toast: toast.1,
        }
    }

    /// Show a transient notification; it clears itself after [`TOAST_MS`].
    pub fn notify(&self, message: impl Into<String>) {
        self.set_toast.set(Some(message.into()));
        let clear = self.set_toast;
        Timeout::new(TOAST_MS, move || clear.set(None)).forget();
    }
}
