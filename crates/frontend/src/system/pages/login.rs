use crate::layout::global_context::{use_app_context, Page};
use crate::shared::i18n::texts;
use leptos::prelude::*;

/// Static sign-in form; nothing is checked, submitting opens the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let t = move || &texts(ctx.language.get()).login;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.navigate(Page::Performance);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>{move || t().title}</h2>
                <p>{move || t().description}</p>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="m@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{move || t().password}</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary">{move || t().login_button}</button>
                </form>

                <div class="login-info">
                    <p>
                        {move || t().no_account} " "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Register);
                        }>{move || t().register_link}</a>
                    </p>
                    <p>
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Landing);
                        }>{move || t().back_to_home}</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
