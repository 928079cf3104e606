//! Screens the list view navigates to but this app does not implement

use leptos::prelude::*;
use leptos_router::components::A;

/// Shown at `/login` after the scheme service rejected the session
#[component]
pub fn SessionExpired() -> impl IntoView {
    view! {
        <div class="p-6 max-w-lg">
            <h2 class="text-2xl font-bold mb-4">"Session expired"</h2>
            <p class="text-gray-600 mb-6">
                "The scheme service did not accept your session. "
                "Sign in to the scheme service again, then return to the list."
            </p>
            <A href="/" attr:class="text-blue-500 hover:underline">"Back to schemes"</A>
        </div>
    }
}

#[component]
pub fn AddSchemeNotice() -> impl IntoView {
    view! {
        <div class="p-6 max-w-lg">
            <h2 class="text-2xl font-bold mb-4">"Add Scheme"</h2>
            <p class="text-gray-600 mb-6">"New schemes are created in the scheme service."</p>
            <A href="/" attr:class="text-blue-500 hover:underline">"Back to schemes"</A>
        </div>
    }
}
