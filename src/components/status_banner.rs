//! Status Banner Component
//!
//! Loading notice and error line shared by list and form views.

use leptos::prelude::*;

#[component]
pub fn StatusBanner(
    #[prop(into)] loading: Signal<bool>,
    loading_text: &'static str,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="loading">{loading_text}</p>
        </Show>
        {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
    }
}
