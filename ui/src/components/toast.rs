//! Transient pop-up notifications

use leptos::prelude::*;
use scheme_admin_core::{Notification, NotificationLevel};

const TOAST_MILLIS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// Handle for raising notifications; cheap to copy into closures
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show `notification`, dismissing it after a few seconds
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, notification }));

        let items = self.items;
        let handle = gloo_timers::callback::Timeout::new(TOAST_MILLIS, move || {
            items.try_update(|items| items.retain(|t| t.id != id));
        });
        handle.forget();
    }

    fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastStack(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-[60] space-y-2 w-80">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notification.level {
                        NotificationLevel::Success => "p-3 rounded shadow border text-sm flex justify-between items-start bg-green-50 border-green-200 text-green-800",
                        NotificationLevel::Error => "p-3 rounded shadow border text-sm flex justify-between items-start bg-red-50 border-red-200 text-red-800",
                    };
                    view! {
                        <div class=class role="status">
                            <span>{toast.notification.message}</span>
                            <button
                                class="ml-3 text-gray-400 hover:text-gray-600"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
