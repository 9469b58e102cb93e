//! Customer Form Component
//!
//! Create or edit one customer; edit mode when an id is given.

use leptos::prelude::*;
use remote_collection::{FormPhase, FormState, RecordId};

use super::{Link, StatusBanner};
use crate::context::use_app_context;
use crate::drafts::{CustomerDraft, CustomerEdit};
use crate::remote;
use crate::route::Route;

#[component]
pub fn CustomerForm(id: Option<RecordId>) -> impl IntoView {
    let ctx = use_app_context();
    let endpoint = StoredValue::new(ctx.api().customers());
    let form = RwSignal::new(FormState::<CustomerDraft>::for_id(id));

    Effect::new(move |_| {
        remote::load_form(form, endpoint.get_value());
    });

    let heading = move || {
        form.with(|f| match f.record_id() {
            Some(id) => format!("Edit Customer (ID: {})", id),
            None => "Add New Customer".to_string(),
        })
    };
    let busy = Signal::derive(move || form.with(|f| f.is_busy()));
    let loading = Signal::derive(move || form.with(|f| f.phase() == FormPhase::Loading));
    let error = Signal::derive(move || form.with(|f| f.error().map(str::to_string)));
    let shows_fields = move || form.with(|f| f.shows_fields());
    let load_failed = move || form.with(|f| f.phase() == FormPhase::Empty && f.error().is_some());
    let field = move |read: fn(&CustomerDraft) -> String| form.with(|f| read(f.draft()));

    let edit = move |change: CustomerEdit| form.update(|f| f.apply(change));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.is_busy()) {
            return;
        }
        match form.with_untracked(|f| f.draft().to_payload()) {
            Ok(payload) => remote::submit_form(form, endpoint.get_value(), payload, move || {
                ctx.navigate(Route::CustomerList)
            }),
            Err(err) => form.update(|f| f.reject(err.to_string())),
        }
    };

    let submit_label = move || {
        form.with(|f| {
            if f.is_busy() {
                "Saving..."
            } else if f.is_edit() {
                "Update Customer"
            } else {
                "Add Customer"
            }
        })
    };

    view! {
        <div class="customer-form">
            <h2>{heading}</h2>
            <StatusBanner loading=loading loading_text="Loading customer data..." error=error />

            <Show when=shows_fields>
                <form on:submit=on_submit>
                    <div class="field">
                        <label for="firstName">"First Name:"</label>
                        <input
                            type="text"
                            id="firstName"
                            required
                            prop:value=move || field(|d| d.first_name.clone())
                            on:input=move |ev| edit(CustomerEdit::FirstName(event_target_value(&ev)))
                        />
                    </div>
                    <div class="field">
                        <label for="lastName">"Last Name:"</label>
                        <input
                            type="text"
                            id="lastName"
                            required
                            prop:value=move || field(|d| d.last_name.clone())
                            on:input=move |ev| edit(CustomerEdit::LastName(event_target_value(&ev)))
                        />
                    </div>
                    <div class="field">
                        <label for="middleName">"Middle Name (Optional):"</label>
                        <input
                            type="text"
                            id="middleName"
                            prop:value=move || field(|d| d.middle_name.clone())
                            on:input=move |ev| edit(CustomerEdit::MiddleName(event_target_value(&ev)))
                        />
                    </div>
                    <div class="field">
                        <label for="email">"Email:"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || field(|d| d.email.clone())
                            on:input=move |ev| edit(CustomerEdit::Email(event_target_value(&ev)))
                        />
                    </div>
                    <div class="field">
                        <label for="dateOfBirth">"Date of Birth (Optional):"</label>
                        <input
                            type="date"
                            id="dateOfBirth"
                            prop:value=move || field(|d| d.date_of_birth.clone())
                            on:input=move |ev| edit(CustomerEdit::DateOfBirth(event_target_value(&ev)))
                        />
                    </div>
                    <div class="field">
                        <label for="homeAddress">"Home Address (Optional):"</label>
                        <textarea
                            id="homeAddress"
                            rows="3"
                            prop:value=move || field(|d| d.home_address.clone())
                            on:input=move |ev| edit(CustomerEdit::HomeAddress(event_target_value(&ev)))
                        ></textarea>
                    </div>
                    <div class="field checkbox">
                        <input
                            type="checkbox"
                            id="matricNo"
                            prop:checked=move || form.with(|f| f.draft().flagged)
                            on:change=move |ev| edit(CustomerEdit::Flagged(event_target_checked(&ev)))
                        />
                        <label for="matricNo">"Matric No. on file"</label>
                    </div>

                    <button type="submit" disabled=move || busy.get()>{submit_label}</button>
                    <button
                        type="button"
                        disabled=move || busy.get()
                        on:click=move |_| ctx.navigate(Route::CustomerList)
                    >
                        "Cancel"
                    </button>
                </form>
            </Show>
            <Show when=load_failed>
                <Link to=Route::CustomerList class="button">"Back to customers"</Link>
            </Show>
        </div>
    }
}
