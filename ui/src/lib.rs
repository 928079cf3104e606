use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

mod api;
mod components;

use api::BrowserSchemeApi;
use components::notices::{AddSchemeNotice, SessionExpired};
use components::scheme_list::SchemeListView;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="flex h-screen bg-gray-100">
                // Sidebar
                <div class="w-56 bg-gray-800 text-white p-4 flex flex-col">
                    <h1 class="text-2xl font-bold mb-8">"Scheme Admin"</h1>
                    <nav class="space-y-1 flex-1">
                        <A href="/" attr:class="block p-2 hover:bg-gray-700 rounded transition-colors">
                            "Schemes"
                        </A>
                    </nav>
                </div>

                // Main Content
                <div class="flex-1 overflow-y-auto">
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=Schemes/>
                        <Route path=path!("/login") view=SessionExpired/>
                        <Route path=path!("/addscheme") view=AddSchemeNotice/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

/// Resolves the service origin from the host before showing the list
#[component]
fn Schemes() -> impl IntoView {
    let ui_config = LocalResource::new(api::load_ui_config);

    view! {
        <Suspense fallback=move || view! { <div class="p-6 text-gray-500">"Loading..."</div> }>
            {move || ui_config.get().map(|config| view! {
                <SchemeListView api=BrowserSchemeApi::new(config.api_base_url) />
            })}
        </Suspense>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
