//! TastyBites Console App
//!
//! Navigation shell: top bar plus the view for the current route.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{CustomerForm, CustomerList, NavBar, NotFound, OrderForm, OrderList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::route::{self, Route};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let route = signal(route::current_route());
    let ctx = AppContext::new(config, route);

    // Provide context to all children
    provide_context(ctx);

    // Back/forward buttons
    let popstate = window_event_listener(ev::popstate, move |_| ctx.sync_with_location());
    on_cleanup(move || popstate.remove());

    let current_view = move || match ctx.route.get() {
        Route::CustomerList => view! { <CustomerList /> }.into_any(),
        Route::CustomerForm(id) => view! { <CustomerForm id=id /> }.into_any(),
        Route::OrderList => view! { <OrderList /> }.into_any(),
        Route::OrderForm(id) => view! { <OrderForm id=id /> }.into_any(),
        Route::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
    };

    view! {
        <NavBar />
        <main class="container">
            {current_view}
        </main>
    }
}
