//! Static page header component.

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>{APP_NAME}</h1>
        </header>
    }
}
