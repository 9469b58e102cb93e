//! Customer List Component
//!
//! All customers in a table, with edit links and confirmed delete.

use leptos::prelude::*;
use remote_collection::{CollectionCache, Confirmation};

use super::{DeleteConfirmButton, Link, StatusBanner};
use crate::context::use_app_context;
use crate::models::Customer;
use crate::remote;
use crate::route::Route;

#[component]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_app_context();
    let endpoint = StoredValue::new(ctx.api().customers());
    let cache = RwSignal::new(CollectionCache::<Customer>::new());

    // Load once on mount
    Effect::new(move |_| {
        remote::refresh(cache, endpoint.get_value());
    });

    let loading = Signal::derive(move || cache.with(|c| c.is_loading()));
    let error = Signal::derive(move || cache.with(|c| c.error().map(str::to_string)));
    let has_rows = move || cache.with(|c| !c.is_empty());
    let show_empty = move || cache.with(|c| c.is_loaded() && c.is_empty());

    view! {
        <div class="customer-list">
            <h2>"Customer List"</h2>
            <Link to=Route::CustomerForm(None) class="button">"Add New Customer"</Link>

            <StatusBanner loading=loading loading_text="Loading customers..." error=error />

            <Show when=show_empty>
                <p class="empty">"No customers found."</p>
            </Show>
            <Show when=has_rows>
                <table>
                    <thead>
                        <tr>
                            <th>"First Name"</th>
                            <th>"Last Name"</th>
                            <th>"Middle Name"</th>
                            <th>"Email"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || cache.with(|c| c.items().to_vec())
                            key=|customer| customer.id.clone()
                            children=move |customer| {
                                let id = customer.id.clone();
                                let row_id = id.clone();
                                let deleting = Signal::derive(move || cache.with(|c| c.is_deleting(&row_id)));
                                let on_answer = Callback::new(move |answer: Confirmation| {
                                    remote::delete(cache, endpoint.get_value(), id.clone(), answer);
                                });

                                view! {
                                    <tr>
                                        <td>{customer.first_name.clone()}</td>
                                        <td>{customer.last_name.clone()}</td>
                                        <td>{customer.middle_name.clone().unwrap_or_default()}</td>
                                        <td>{customer.email.clone()}</td>
                                        <td class="action-buttons">
                                            <Link to=Route::CustomerForm(Some(customer.id.clone())) class="button">
                                                "Edit"
                                            </Link>
                                            <DeleteConfirmButton busy=loading deleting=deleting on_answer=on_answer />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
