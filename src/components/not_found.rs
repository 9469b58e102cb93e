//! Not Found Component

use leptos::prelude::*;

use super::Link;
use crate::route::Route;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <Link to=Route::CustomerList>"Back to customers"</Link>
        </div>
    }
}
