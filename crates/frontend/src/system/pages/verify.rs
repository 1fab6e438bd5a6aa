use crate::layout::global_context::{use_app_context, Page};
use crate::shared::i18n::{texts, verify_description, VerifyTexts};
use crate::system::registration::api::{self, field_error, SubmitError};
use contracts::system::registration::{VerifyOutcome, VerifyRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Message shown for a verification outcome; `true` marks success
pub fn outcome_message(t: &'static VerifyTexts, outcome: VerifyOutcome) -> (bool, &'static str) {
    match outcome {
        VerifyOutcome::Verified => (true, t.success_description),
        VerifyOutcome::InvalidCode => (false, t.invalid_description),
        VerifyOutcome::Expired => (false, t.expired_description),
        VerifyOutcome::NotFound => (false, t.error_description),
    }
}

#[component]
pub fn VerifyPage() -> impl IntoView {
    let ctx = use_app_context();
    let t = move || &texts(ctx.language.get()).verify;

    let code = RwSignal::new(String::new());
    let code_error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<(bool, String)>);
    let loading = RwSignal::new(false);

    let back_to_register = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(Page::Register);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(email) = ctx.verify_email.get_untracked() else {
            return;
        };
        let request = VerifyRequest {
            email,
            code: code.get_untracked().trim().to_string(),
            language: ctx.language.get_untracked(),
        };

        let errors = request.validate();
        if let Some(message) = field_error(&errors, "code") {
            code_error.set(Some(message));
            return;
        }
        code_error.set(None);
        result.set(None);
        loading.set(true);

        spawn_local(async move {
            match api::verify(&request).await {
                Ok(response) => {
                    let (ok, message) = outcome_message(t(), response.outcome);
                    if ok {
                        ctx.verify_email.set(None);
                    }
                    result.set(Some((ok, message.to_string())));
                }
                Err(SubmitError::Invalid(errors)) => {
                    code_error.set(field_error(&errors, "code"));
                }
                Err(SubmitError::Failed(e)) => {
                    log::error!("Verification failed: {}", e);
                    result.set(Some((false, t().error_description.to_string())));
                }
            }
            loading.set(false);
        });
    };

    let form = move || {
        view! {
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="code">{move || t().code_label}</label>
                    <input
                        type="text"
                        id="code"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                        disabled=move || loading.get()
                    />
                    {move || code_error.get().map(|m| view! { <p class="form-error">{m}</p> })}
                </div>
                <button type="submit" class="btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { t().loading_button } else { t().submit_button }}
                </button>
            </form>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>{move || t().title}</h2>

                {move || match result.get() {
                    Some((true, message)) => view! {
                        <div class="success-message">
                            <strong>{t().success_title}</strong>
                            <p>{message}</p>
                            <a href="#" on:click=move |ev| {
                                ev.prevent_default();
                                ctx.navigate(Page::Login);
                            }>{texts(ctx.language.get()).login.title}</a>
                        </div>
                    }
                    .into_any(),
                    Some((false, message)) => view! {
                        <div class="error-message">
                            <strong>{t().invalid_title}</strong>
                            " "
                            {message}
                        </div>
                        {form()}
                    }
                    .into_any(),
                    None => match ctx.verify_email.get() {
                        Some(email) => view! {
                            <p>{verify_description(ctx.language.get(), &email)}</p>
                            {form()}
                        }
                        .into_any(),
                        None => view! {
                            <div class="error-message">
                                <strong>{t().error_title}</strong>
                                " "
                                {t().error_description}
                            </div>
                        }
                        .into_any(),
                    },
                }}

                <div class="login-info">
                    <a href="#" on:click=back_to_register>{move || t().back_to_register}</a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::language::Language;

    #[test]
    fn test_outcome_messages() {
        let t = &texts(Language::Pt).verify;
        assert_eq!(outcome_message(t, VerifyOutcome::Verified), (true, t.success_description));
        assert!(!outcome_message(t, VerifyOutcome::InvalidCode).0);
        assert_eq!(outcome_message(t, VerifyOutcome::Expired).1, t.expired_description);
        assert_eq!(outcome_message(t, VerifyOutcome::NotFound).1, t.error_description);
    }
}
