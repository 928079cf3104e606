//! Scheme list screen
//!
//! Owns the `SchemeListState`. Each request takes its ticket with a
//! `begin_*` transition, runs on the browser event loop, and applies its
//! response with the matching `finish_*`.

use leptos::prelude::*;
use leptos_router::components::A;
use scheme_admin_core::{
    Outcome, Route, SchemeApi, SchemeField, SchemeListState, SchemeRecord,
};

use crate::api::BrowserSchemeApi;
use crate::components::scheme_modal::SchemeDetailModal;
use crate::components::toast::{ToastStack, Toasts};

/// Columns of the table, in display order
const COLUMNS: [SchemeField; 7] = [
    SchemeField::SerialNumber,
    SchemeField::Name,
    SchemeField::Ministry,
    SchemeField::Description,
    SchemeField::Place,
    SchemeField::MoneyGranted,
    SchemeField::MoneySpent,
];

/// Full page load, like the other screens do after a save
fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(route.path()).is_err() {
            log::error!("Failed to navigate to {}", route.path());
        }
    }
}

#[component]
pub fn SchemeListView(api: BrowserSchemeApi) -> impl IntoView {
    let state = RwSignal::new(SchemeListState::new());
    let api = StoredValue::new(api);
    let toasts = Toasts::new();

    let apply = move |outcome: Outcome| {
        if let Some(notification) = outcome.notification {
            toasts.push(notification);
        }
        if let Some(route) = outcome.navigate {
            navigate(route);
        }
    };

    let load_all = move || {
        let Some(pending) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let result = api.get_value().list_schemes().await;
            if let Some(outcome) = state.try_update(|s| s.finish_load(pending, result)) {
                apply(outcome);
            }
        });
    };

    // Load on mount
    Effect::new(move || {
        load_all();
    });

    let commit_edit = Callback::new(move |_: ()| {
        let Some(pending) = state.with_untracked(|s| s.begin_edit()) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let result = api
                .get_value()
                .update_scheme(pending.id(), &pending.record)
                .await;
            if let Some(outcome) = state.try_update(|s| s.finish_edit(pending, result)) {
                apply(outcome);
            }
        });
    });

    let commit_delete = Callback::new(move |_: ()| {
        let Some(pending) = state.with_untracked(|s| s.begin_delete()) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let result = api
                .get_value()
                .delete_scheme(pending.id(), &pending.record)
                .await;
            if let Some(outcome) = state.try_update(|s| s.finish_delete(pending, result)) {
                apply(outcome);
            }
        });
    });

    let set_field = Callback::new(move |(field, value): (SchemeField, String)| {
        state.update(|s| {
            if let Err(e) = s.set_field(field, value) {
                log::warn!("Ignoring edit of {}: {}", field, e);
            }
        });
    });

    let close_modal = Callback::new(move |_: ()| state.update(|s| s.close_modal()));

    let select_for_view = move |record: SchemeRecord| state.update(|s| s.select_for_view(record));
    let select_for_edit = move |record: SchemeRecord| state.update(|s| s.select_for_edit(record));
    let select_for_delete = move |record: SchemeRecord| state.update(|s| s.select_for_delete(record));

    let modal = Memo::new(move |_| state.with(|s| s.modal().clone()));
    let schemes = Memo::new(move |_| state.with(|s| s.schemes().to_vec()));

    view! {
        <div class="p-6">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold">"Schemes"</h2>
                <A href=Route::AddScheme.path() attr:class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded">
                    "+ Add Scheme"
                </A>
            </div>

            // Error banner
            {move || state.with(|s| s.error().map(str::to_string)).map(|e| view! {
                <div class="mb-4 p-3 bg-red-50 border border-red-200 rounded text-red-800 text-sm">
                    {e}
                </div>
            })}

            {move || state.with(|s| s.is_loading() && s.schemes().is_empty()).then(|| view! {
                <div class="text-gray-500">"Loading..."</div>
            })}

            <div class="bg-white rounded-lg shadow overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            {COLUMNS.into_iter().map(|field| view! {
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                    {field.label()}
                                </th>
                            }).collect::<Vec<_>>()}
                            <th class="px-4 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {move || schemes.get().into_iter().map(|record| {
                            let for_view = record.clone();
                            let for_edit = record.clone();
                            let for_delete = record.clone();
                            view! {
                                <tr class="hover:bg-gray-50">
                                    {COLUMNS.into_iter().map(|field| view! {
                                        <td class="px-4 py-3 text-sm text-gray-700 align-top">
                                            {record.field(field)}
                                        </td>
                                    }).collect::<Vec<_>>()}
                                    <td class="px-4 py-3 whitespace-nowrap text-right text-sm font-medium">
                                        <button
                                            class="text-gray-600 hover:text-gray-900 mr-3"
                                            on:click=move |_| select_for_view(for_view.clone())
                                        >
                                            "View"
                                        </button>
                                        <button
                                            class="text-blue-600 hover:text-blue-900 mr-3"
                                            on:click=move |_| select_for_edit(for_edit.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="text-red-600 hover:text-red-900"
                                            on:click=move |_| select_for_delete(for_delete.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
                {move || state.with(|s| !s.is_loading() && s.error().is_none() && s.schemes().is_empty()).then(|| view! {
                    <p class="text-center py-12 text-gray-500">"No schemes found"</p>
                })}
            </div>

            <SchemeDetailModal
                modal=modal
                on_field=set_field
                on_save=commit_edit
                on_confirm_delete=commit_delete
                on_cancel=close_modal
            />
            <ToastStack toasts=toasts />
        </div>
    }
}
