//! Order List Component
//!
//! All orders in a table, with edit links and confirmed delete.

use leptos::prelude::*;
use remote_collection::{CollectionCache, Confirmation};

use super::{DeleteConfirmButton, Link, StatusBanner};
use crate::context::use_app_context;
use crate::models::Order;
use crate::remote;
use crate::route::Route;

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_app_context();
    let endpoint = StoredValue::new(ctx.api().orders());
    let cache = RwSignal::new(CollectionCache::<Order>::new());

    Effect::new(move |_| {
        remote::refresh(cache, endpoint.get_value());
    });

    let loading = Signal::derive(move || cache.with(|c| c.is_loading()));
    let error = Signal::derive(move || cache.with(|c| c.error().map(str::to_string)));
    let has_rows = move || cache.with(|c| !c.is_empty());
    let show_empty = move || cache.with(|c| c.is_loaded() && c.is_empty());

    view! {
        <div class="order-list">
            <h2>"Order List"</h2>
            <Link to=Route::OrderForm(None) class="button">"Create New Order"</Link>

            <StatusBanner loading=loading loading_text="Loading orders..." error=error />

            <Show when=show_empty>
                <p class="empty">"No orders found."</p>
            </Show>
            <Show when=has_rows>
                <table>
                    <thead>
                        <tr>
                            <th>"Order ID"</th>
                            <th>"Customer"</th>
                            <th>"Order Date"</th>
                            <th>"Menu Items"</th>
                            <th>"Payment Method"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || cache.with(|c| c.items().to_vec())
                            key=|order| order.id.clone()
                            children=move |order| {
                                let id = order.id.clone();
                                let row_id = id.clone();
                                let deleting = Signal::derive(move || cache.with(|c| c.is_deleting(&row_id)));
                                let on_answer = Callback::new(move |answer: Confirmation| {
                                    remote::delete(cache, endpoint.get_value(), id.clone(), answer);
                                });

                                view! {
                                    <tr>
                                        <td>{order.id.to_string()}</td>
                                        <td>{order.customer_label()}</td>
                                        <td>{order.order_date_label()}</td>
                                        <td>{order.menu_items.join(", ")}</td>
                                        <td>{order.payment_label()}</td>
                                        <td class="action-buttons">
                                            <Link to=Route::OrderForm(Some(order.id.clone())) class="button">
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
