use shared::validation::validate_forgot_password;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::forms::form_message::{FormMessage, MessageKind};
use super::forms::submit_button::SubmitButton;
use super::forms::text_field::TextField;
use super::theme::ThemeToggle;
use crate::hooks::use_api::use_api;
use crate::routes::Route;
use crate::services::auth;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let api_client = use_api();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let field_error = use_state(|| Option::<String>::None);
    let error = use_state(|| Option::<String>::None);
    let success_message = use_state(|| Option::<String>::None);
    let is_loading = use_state(|| false);

    let on_email_input = {
        let email = email.clone();
        let field_error = field_error.clone();
        let error = error.clone();
        Callback::from(move |value: String| {
            email.set(value);
            field_error.set(None);
            error.set(None);
        })
    };

    let on_submit = {
        let email = email.clone();
        let field_error = field_error.clone();
        let error = error.clone();
        let success_message = success_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }

            let request = match validate_forgot_password(&email) {
                Ok(request) => request,
                Err(e) => {
                    field_error.set(Some(e.to_string()));
                    return;
                }
            };

            field_error.set(None);
            is_loading.set(true);
            error.set(None);
            success_message.set(None);

            let api_client = api_client.clone();
            let email = email.clone();
            let error = error.clone();
            let success_message = success_message.clone();
            let is_loading = is_loading.clone();

            spawn_local(async move {
                match auth::forgot_password(&api_client, &request).await {
                    Ok(_) => {
                        success_message.set(Some(format!(
                            "A reset link was sent to {}",
                            request.email
                        )));
                        email.set(String::new());
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let on_back_to_login = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Login);
        }
    });

    // The form is replaced by the confirmation once the request went through
    let body = if success_message.is_some() {
        html! {
            <>
                <FormMessage kind={MessageKind::Success} message={(*success_message).clone()} />
                <button type="button" class="btn btn-secondary btn-block" onclick={on_back_to_login}>
                    {"Back to login"}
                </button>
            </>
        }
    } else {
        html! {
            <>
                <FormMessage kind={MessageKind::Error} message={(*error).clone()} />
                <form class="auth-form" onsubmit={on_submit} novalidate=true>
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        value={(*email).clone()}
                        on_input={on_email_input}
                        error={(*field_error).clone()}
                        disabled={*is_loading}
                    />
                    <SubmitButton label="Send reset link" loading_label="Sending..." loading={*is_loading} />
                </form>
            </>
        }
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-header">
                    <div>
                        <h2 class="auth-title">{"Reset password"}</h2>
                        <p class="auth-subtitle">{"Enter your email to receive a reset link"}</p>
                    </div>
                    <ThemeToggle />
                </div>

                {body}

                <div class="auth-footer">
                    {"Remembered your password? "}
                    <Link<Route> to={Route::Login} classes="auth-link">{"Sign in"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
