use crate::layout::global_context::{use_app_context, Page};
use crate::shared::i18n::texts;
use crate::system::registration::api::{self, field_error, SubmitError};
use contracts::system::registration::{DeliveryStatus, FieldError, RegisterRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let t = move || &texts(ctx.language.get()).register;

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let error_for = move |field: &'static str| {
        move || {
            field_errors
                .with(|errors| field_error(errors, field))
                .map(|m| view! { <p class="form-error">{m}</p> })
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            language: ctx.language.get_untracked(),
        };

        let errors = request.validate();
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(Vec::new());
        error.set(None);
        loading.set(true);

        spawn_local(async move {
            match api::register(&request).await {
                Ok(response) if response.status == DeliveryStatus::Success => {
                    log::info!("{} {}", t().success_description, response.email);
                    password.set(String::new());
                    ctx.open_verify(response.email);
                }
                Ok(_) => error.set(Some(t().error_description.to_string())),
                Err(SubmitError::Invalid(errors)) => field_errors.set(errors),
                Err(SubmitError::Failed(e)) => {
                    log::error!("Registration failed: {}", e);
                    error.set(Some(t().error_description.to_string()));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>{move || t().title}</h2>
                <p>{move || t().description}</p>

                {move || error.get().map(|e| view! {
                    <div class="error-message">
                        <strong>{t().error_title}</strong>
                        " "
                        {e}
                    </div>
                })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">{move || t().name_label}</label>
                        <input
                            type="text"
                            id="name"
                            placeholder=move || t().name_placeholder
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                        {error_for("name")}
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="m@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                        {error_for("email")}
                    </div>

                    <div class="form-group">
                        <label for="password">{move || t().password_label}</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                        {error_for("password")}
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { t().loading_button } else { t().submit_button }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        {move || t().already_have_account} " "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Login);
                        }>{move || t().login_link}</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
