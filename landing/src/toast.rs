//! Toast notifications.
//!
//! [`Toaster`] is the page's [`Notifier`]: every notice becomes a toast that
//! removes itself after [`TOAST_LIFETIME`] or when clicked.

use std::time::Duration;

use launchpad_core::{Notice, NoticeLevel, Notifier};
use leptos::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Handle to the toast stack. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn push(&self, notice: Notice) -> u64 {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                level: notice.level,
                message: notice.message,
            })
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        // The stack may already be gone if the page unmounted
        self.toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, notice: Notice) {
        let id = self.push(notice);
        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_LIFETIME);
    }
}

#[component]
pub fn ToastStack(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toaster=toaster /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toaster: Toaster) -> impl IntoView {
    let id = toast.id;
    let class = format!("toast toast-{}", toast.level.as_label());

    view! {
        <div class=class role="status" on:click=move |_| toaster.dismiss(id)>
            <span class="toast-icon">{icon(toast.level)}</span>
            <span class="toast-message">{toast.message}</span>
        </div>
    }
}

fn icon(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "i",
        NoticeLevel::Success => "✓",
        NoticeLevel::Error => "✕",
    }
}
