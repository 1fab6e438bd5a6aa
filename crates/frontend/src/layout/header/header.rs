use crate::layout::global_context::{use_app_context, Page};
use crate::shared::i18n::{texts, Texts};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let t = move || texts(ctx.language.get());

    let nav_item = move |page: Page, label: fn(&'static Texts) -> &'static str| {
        view! {
            <button
                class="header__nav-item"
                class:header__nav-item--active=move || ctx.page.get() == page
                on:click=move |_| ctx.navigate(page)
            >
                {move || label(t())}
            </button>
        }
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Agence"</span>
                <nav class="header__nav">
                    {nav_item(Page::Landing, |t| t.header.home)}
                    <span class="header__nav-item header__nav-item--static">{move || t().header.projects}</span>
                    <span class="header__nav-item header__nav-item--static">{move || t().header.administrative}</span>
                    {nav_item(Page::Performance, |t| t.header.commercial)}
                    <span class="header__nav-item header__nav-item--static">{move || t().header.financial}</span>
                    {nav_item(Page::Tasks, |t| t.header.tasks)}
                </nav>
            </div>
            <div class="header__actions">
                <span class="header__user">{icon("user")} {move || t().header.user}</span>
                <button
                    class="button button--ghost"
                    aria-label="Toggle language"
                    on:click=move |_| ctx.toggle_language()
                >
                    {move || t().header.language_toggle}
                </button>
                <button class="button button--ghost" on:click=move |_| ctx.navigate(Page::Login)>
                    {icon("logout")}
                    {move || t().header.logout}
                </button>
            </div>
        </header>
    }
}
