//! Navigation Bar Component
//!
//! Brand, section links, and the in-app `Link` used by every view.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::{Route, Section};

/// Anchor that switches views through the History API.
///
/// Modified clicks (new tab, new window) are left to the browser.
#[component]
pub fn Link(
    to: Route,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = to.path();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ctx.navigate(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

/// Top bar with the brand and Customers / Orders links
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let active = move || ctx.route.get().section();

    let link_class = move |section: Section| {
        move || {
            if active() == Some(section) { "nav-link active" } else { "nav-link" }
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="brand">"TastyBites"</span>
            <a
                href=Route::CustomerList.path()
                class=link_class(Section::Customers)
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ctx.navigate(Route::CustomerList);
                }
            >
                "Customers"
            </a>
            <a
                href=Route::OrderList.path()
                class=link_class(Section::Orders)
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ctx.navigate(Route::OrderList);
                }
            >
                "Orders"
            </a>
            <span class="api-origin" title="API base URL">{ctx.config().api_base_url}</span>
        </nav>
    }
}
