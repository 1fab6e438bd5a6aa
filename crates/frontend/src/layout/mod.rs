pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Application shell: header on top, page content below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
