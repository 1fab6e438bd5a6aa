use crate::layout::global_context::{use_app_context, Page};
use crate::shared::i18n::texts;
use chrono::{Datelike, Utc};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app_context();
    let t = move || &texts(ctx.language.get()).landing;
    let year = Utc::now().year();

    view! {
        <div class="landing">
            <header class="landing__header">
                <span class="landing__brand">{move || t().performance_panel}</span>
                <div class="landing__actions">
                    <button class="button button--ghost" on:click=move |_| ctx.toggle_language()>
                        {move || texts(ctx.language.get()).header.language_toggle}
                    </button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate(Page::Login)>
                        {move || t().login}
                    </Button>
                </div>
            </header>

            <main class="landing__hero">
                <h1>{move || t().welcome_title}</h1>
                <p>{move || t().welcome_subtitle}</p>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::Performance)>
                    {move || t().access_panel}
                </Button>
            </main>

            <footer class="landing__footer">
                {move || format!("© {} Agence. {}", year, t().footer_rights)}
            </footer>
        </div>
    }
}
