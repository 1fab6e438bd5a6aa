use crate::dashboards::d400_performance::ui::PerformanceDashboard;
use crate::domain::a004_task::ui::TaskList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::system::pages::{
    landing::LandingPage, login::LoginPage, register::RegisterPage, verify::VerifyPage,
};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        {move || {
            let page = ctx.page.get();
            match page {
                Page::Landing => view! { <LandingPage /> }.into_any(),
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::Register => view! { <RegisterPage /> }.into_any(),
                Page::Verify => view! { <VerifyPage /> }.into_any(),
                Page::Performance => view! { <Shell><PerformanceDashboard /></Shell> }.into_any(),
                Page::Tasks => view! { <Shell><TaskList /></Shell> }.into_any(),
            }
        }}
    }
}
