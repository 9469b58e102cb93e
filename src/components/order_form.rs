//! Order Form Component
//!
//! Create or edit one order. Loads the customers collection for the
//! customer selector alongside the order itself.

use leptos::prelude::*;
use remote_collection::{CollectionCache, FormPhase, FormState, RecordId};

use super::{Link, StatusBanner};
use crate::context::use_app_context;
use crate::drafts::{customer_options, OrderDraft, OrderEdit};
use crate::models::Customer;
use crate::remote;
use crate::route::Route;

#[component]
pub fn OrderForm(id: Option<RecordId>) -> impl IntoView {
    let ctx = use_app_context();
    let api = ctx.api();
    let orders = StoredValue::new(api.orders());
    let customers_endpoint = StoredValue::new(api.customers());
    let form = RwSignal::new(FormState::<OrderDraft>::for_id(id));
    let customers = RwSignal::new(CollectionCache::<Customer>::new());

    Effect::new(move |_| {
        remote::refresh(customers, customers_endpoint.get_value());
        remote::load_form(form, orders.get_value());
    });

    // Create mode: preselect the first customer once the list arrives
    Effect::new(move |_| {
        let loaded = customers.with(|c| c.is_loaded().then(|| c.items().to_vec()));
        if let Some(list) = loaded {
            form.update(|f| {
                if !f.is_edit() {
                    f.update_draft(|d| d.default_customer(&list));
                }
            });
        }
    });

    let heading = move || {
        form.with(|f| match f.record_id() {
            Some(id) => format!("Edit Order (ID: {})", id),
            None => "Create New Order".to_string(),
        })
    };
    let busy = Signal::derive(move || form.with(|f| f.is_busy()));
    let customers_loading = Signal::derive(move || customers.with(|c| c.is_loading()));
    let loading = Signal::derive(move || form.with(|f| f.phase() == FormPhase::Loading));
    let error = Signal::derive(move || form.with(|f| f.error().map(str::to_string)));
    let customers_error = Signal::derive(move || customers.with(|c| c.error().map(str::to_string)));
    let shows_fields = move || form.with(|f| f.shows_fields());
    let load_failed = move || form.with(|f| f.phase() == FormPhase::Empty && f.error().is_some());
    let field = move |read: fn(&OrderDraft) -> String| form.with(|f| read(f.draft()));

    let edit = move |change: OrderEdit| form.update(|f| f.apply(change));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.is_busy()) || customers_loading.get_untracked() {
            return;
        }
        let payload = customers.with_untracked(|c| {
            form.with_untracked(|f| f.draft().to_payload(c.items()))
        });
        match payload {
            Ok(payload) => remote::submit_form(form, orders.get_value(), payload, move || {
                ctx.navigate(Route::OrderList)
            }),
            Err(err) => form.update(|f| f.reject(err.to_string())),
        }
    };

    let submit_label = move || {
        form.with(|f| {
            if f.is_busy() {
                "Saving..."
            } else if f.is_edit() {
                "Update Order"
            } else {
                "Create Order"
            }
        })
    };

    let options = move || customers.with(|c| customer_options(c.items()));

    view! {
        <div class="order-form">
            <h2>{heading}</h2>
            <StatusBanner loading=loading loading_text="Loading order data..." error=error />
            <StatusBanner
                loading=customers_loading
                loading_text="Loading customers for selection..."
                error=customers_error
            />

            <Show when=shows_fields>
                <form on:submit=on_submit>
                    <div class="field">
                        <label for="customerId">"Customer:"</label>
                        <select
                            id="customerId"
                            required
                            disabled=move || customers_loading.get()
                            prop:value=move || field(|d| d.customer_id.clone())
                            on:change=move |ev| edit(OrderEdit::Customer(event_target_value(&ev)))
                        >
                            <For
                                each=options
                                key=|(value, _)| value.clone()
                                children=move |(value, label)| {
                                    let selected_value = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || field(|d| d.customer_id.clone()) == selected_value
                                        >
                                            {label}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <div class="field">
                        <label for="menuItems">"Menu Items (comma-separated):"</label>
                        <textarea
                            id="menuItems"
                            rows="3"
                            placeholder="e.g., Burger, Fries, Coke"
                            required
                            prop:value=move || field(|d| d.menu_items.clone())
                            on:input=move |ev| edit(OrderEdit::MenuItems(event_target_value(&ev)))
                        ></textarea>
                    </div>
                    <div class="field">
                        <label for="orderDate">"Order Date (Optional):"</label>
                        <input
                            type="date"
                            id="orderDate"
                            prop:value=move || field(|d| d.order_date.clone())
                            on:input=move |ev| edit(OrderEdit::OrderDate(event_target_value(&ev)))
                        />
                    </div>
                    <div class="field">
                        <label for="specialInstructions">"Special Instructions (Optional):"</label>
                        <textarea
                            id="specialInstructions"
                            rows="2"
                            prop:value=move || field(|d| d.special_instructions.clone())
                            on:input=move |ev| edit(OrderEdit::SpecialInstructions(event_target_value(&ev)))
                        ></textarea>
                    </div>
                    <div class="field">
                        <label for="paymentMethod">"Payment Method (Optional):"</label>
                        <input
                            type="text"
                            id="paymentMethod"
                            prop:value=move || field(|d| d.payment_method.clone())
                            on:input=move |ev| edit(OrderEdit::PaymentMethod(event_target_value(&ev)))
                        />
                    </div>
                    <div class="field">
                        <label for="nextReservationDate">"Next Reservation Date (Optional):"</label>
                        <input
                            type="date"
                            id="nextReservationDate"
                            prop:value=move || field(|d| d.next_reservation_date.clone())
                            on:input=move |ev| edit(OrderEdit::NextReservationDate(event_target_value(&ev)))
                        />
                    </div>

                    <button type="submit" disabled=move || busy.get() || customers_loading.get()>
                        {submit_label}
                    </button>
                    <button
                        type="button"
                        disabled=move || busy.get()
                        on:click=move |_| ctx.navigate(Route::OrderList)
                    >
                        "Cancel"
                    </button>
                </form>
            </Show>
            <Show when=load_failed>
                <Link to=Route::OrderList class="button">"Back to orders"</Link>
            </Show>
        </div>
    }
}
