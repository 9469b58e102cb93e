//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation button with confirm/cancel actions.

use leptos::prelude::*;
use remote_collection::Confirmation;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, shows "Delete?" with ✓/✗ buttons
/// and reports the answer.
///
/// # Arguments
/// * `busy` - disables the button while any call on the collection is in flight
/// * `deleting` - shows "Deleting..." while this row's delete is in flight
/// * `on_answer` - receives `Confirmed` or `Declined`
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] on_answer: Callback<Confirmation>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    let answer = move |confirmation: Confirmation| {
        set_confirm_delete.set(false);
        on_answer.run(confirmation);
    };

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="delete-button"
                disabled=move || busy.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {move || if deleting.get() { "Deleting..." } else { "Delete" }}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    disabled=move || busy.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        answer(Confirmation::Confirmed);
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        answer(Confirmation::Declined);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
