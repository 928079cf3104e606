//! Scheme detail modal: view, edit and delete confirmation

use leptos::prelude::*;
use scheme_admin_core::{ModalMode, ModalState, SchemeField};

/// Fields shown in view mode, in display order
const DETAIL_FIELDS: [SchemeField; 9] = [
    SchemeField::SerialNumber,
    SchemeField::Name,
    SchemeField::Ministry,
    SchemeField::Description,
    SchemeField::Place,
    SchemeField::MoneyGranted,
    SchemeField::MoneySpent,
    SchemeField::Date,
    SchemeField::TimeAdded,
];

/// Dialog heading; the edit heading follows the name as it is typed
fn title(mode: ModalMode, name: &str) -> String {
    match mode {
        ModalMode::View => "Scheme Details".to_string(),
        ModalMode::Edit => format!("Edit Scheme: {}", name),
        ModalMode::ConfirmDelete => "Delete Scheme?".to_string(),
    }
}

/// Renders whichever mode `modal` is in. Inputs are forwarded untouched.
#[component]
pub fn SchemeDetailModal(
    #[prop(into)] modal: Signal<ModalState>,
    /// One buffer attribute changed
    on_field: Callback<(SchemeField, String)>,
    on_save: Callback<()>,
    on_confirm_delete: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    // Only a change of mode rebuilds the dialog; buffer edits update values in place
    let mode = Memo::new(move |_| modal.with(|m| m.mode()));

    // Edit and delete read the buffer, view reads the record
    let value_of = move |field: SchemeField| {
        modal.with(|m| {
            m.buffer()
                .or(m.record())
                .map(|r| r.field(field))
                .unwrap_or_default()
        })
    };

    move || {
        let Some(mode) = mode.get() else {
            return ().into_any();
        };

        let heading = move || title(mode, &value_of(SchemeField::Name));

        let body = match mode {
            ModalMode::View => view! {
                <dl class="grid grid-cols-3 gap-x-4 gap-y-2 text-sm">
                    {DETAIL_FIELDS.into_iter().map(|field| view! {
                        <dt class="font-medium text-gray-500">{field.label()}</dt>
                        <dd class="col-span-2 text-gray-900 whitespace-pre-wrap">
                            {move || value_of(field)}
                        </dd>
                    }).collect::<Vec<_>>()}
                </dl>
                <div class="flex justify-end mt-6">
                    <button
                        class="px-4 py-2 text-gray-600 hover:bg-gray-100 rounded"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Close"
                    </button>
                </div>
            }
            .into_any(),
            ModalMode::Edit => view! {
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_save.run(());
                    }
                >
                    {SchemeField::EDITABLE.into_iter().map(|field| view! {
                        <FieldInput
                            field=field
                            value=Signal::derive(move || value_of(field))
                            on_field=on_field
                        />
                    }).collect::<Vec<_>>()}
                    <div class="flex justify-end gap-3 pt-2">
                        <button
                            type="button"
                            class="px-4 py-2 text-gray-600 hover:bg-gray-100 rounded"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                        >
                            "Save"
                        </button>
                    </div>
                </form>
            }
            .into_any(),
            ModalMode::ConfirmDelete => view! {
                <p class="text-gray-600 mb-6">
                    "Are you sure you want to delete scheme "
                    <strong>{move || value_of(SchemeField::Name)}</strong>
                    "?"
                </p>
                <div class="flex justify-end gap-3">
                    <button
                        class="px-4 py-2 text-gray-600 hover:bg-gray-100 rounded"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700"
                        on:click=move |_| on_confirm_delete.run(())
                    >
                        "Delete"
                    </button>
                </div>
            }
            .into_any(),
        };

        view! {
            <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
                <div class="bg-white rounded-lg p-6 max-w-lg w-full mx-4 max-h-[90vh] overflow-y-auto">
                    <h3 class="text-lg font-semibold mb-4">{heading}</h3>
                    {body}
                </div>
            </div>
        }
        .into_any()
    }
}

#[component]
fn FieldInput(
    field: SchemeField,
    value: Signal<String>,
    on_field: Callback<(SchemeField, String)>,
) -> impl IntoView {
    let input_class = "w-full border border-gray-300 rounded px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500";

    let input = match field {
        SchemeField::Description => view! {
            <textarea
                name=field.as_str()
                rows="4"
                class=input_class
                prop:value=move || value.get()
                on:input=move |ev| on_field.run((field, event_target_value(&ev)))
            />
        }
        .into_any(),
        _ => view! {
            <input
                type="text"
                name=field.as_str()
                class=input_class
                prop:value=move || value.get()
                on:input=move |ev| on_field.run((field, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 mb-1">{field.label()}</span>
            {input}
        </label>
    }
}
