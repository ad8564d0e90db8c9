use shared::validation::{LoginForm, LoginFormErrors};
use shared::{ApiError, LoginResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::forms::form_message::{FormMessage, MessageKind};
use super::forms::submit_button::SubmitButton;
use super::forms::text_field::TextField;
use super::theme::ThemeToggle;
use crate::hooks::use_api::{use_api, use_session_store};
use crate::routes::{Route, SignupNotice};
use crate::services::auth;
use crate::services::logging::Logger;
use crate::services::storage::SessionStore;

/// Settle a login call. On success the token (if any) is persisted and the
/// next route returned; on failure the banner message is returned and the
/// session is left alone.
pub fn finish_login(
    session: &SessionStore,
    result: Result<LoginResponse, ApiError>,
) -> Result<Route, String> {
    let response = result.map_err(|e| e.to_string())?;

    if let Some(token) = response.session_token() {
        if let Err(e) = session.save_token(token) {
            Logger::warn_with_component("login", &e.to_string());
        }
    }

    let signed_in = match response.user_label() {
        Some(user) => format!("Signed in as {}", user),
        None => "Signed in".to_string(),
    };
    Logger::info_with_component("login", &signed_in);

    Ok(Route::SelectProfile)
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api_client = use_api();
    let session = use_session_store();
    let navigator = use_navigator();
    let signup_notice = use_location().and_then(|location| location.state::<SignupNotice>());

    // Coming from signup, the new account's email is filled in
    let prefill = signup_notice.as_ref().map(|notice| notice.email.clone());
    let form = use_state(move || LoginForm {
        email_or_username: prefill.unwrap_or_default(),
        ..LoginForm::default()
    });
    let field_errors = use_state(LoginFormErrors::default);
    let general_error = use_state(|| Option::<String>::None);
    let is_loading = use_state(|| false);

    // Typing clears that field's error and the banner
    let on_identifier_input = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        let general_error = general_error.clone();
        Callback::from(move |value: String| {
            form.set(LoginForm {
                email_or_username: value,
                ..(*form).clone()
            });
            field_errors.set(LoginFormErrors {
                email_or_username: None,
                ..(*field_errors).clone()
            });
            general_error.set(None);
        })
    };

    let on_password_input = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        let general_error = general_error.clone();
        Callback::from(move |value: String| {
            form.set(LoginForm {
                password: value,
                ..(*form).clone()
            });
            field_errors.set(LoginFormErrors {
                password: None,
                ..(*field_errors).clone()
            });
            general_error.set(None);
        })
    };

    let on_remember_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                remember_me: input.checked(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        let general_error = general_error.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }

            let request = match form.validate() {
                Ok(request) => request,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };

            field_errors.set(LoginFormErrors::default());
            general_error.set(None);
            is_loading.set(true);

            let api_client = api_client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let general_error = general_error.clone();
            let is_loading = is_loading.clone();

            spawn_local(async move {
                match finish_login(&session, auth::login(&api_client, &request).await) {
                    Ok(route) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&route);
                        }
                    }
                    Err(message) => general_error.set(Some(message)),
                }

                is_loading.set(false);
            });
        })
    };

    let signup_message = signup_notice
        .as_ref()
        .map(|_| "Account created. Sign in to continue.".to_string());

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-header">
                    <h2 class="auth-title">{"Login"}</h2>
                    <ThemeToggle />
                </div>

                <FormMessage kind={MessageKind::Success} message={signup_message} />
                <FormMessage kind={MessageKind::Error} message={(*general_error).clone()} />

                <form class="auth-form" onsubmit={on_submit} novalidate=true>
                    <TextField
                        id="emailOrUsername"
                        label="Email or username"
                        placeholder="Email or username"
                        autocomplete="username"
                        value={form.email_or_username.clone()}
                        on_input={on_identifier_input}
                        error={field_errors.email_or_username.map(|e| e.to_string())}
                        disabled={*is_loading}
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        value={form.password.clone()}
                        on_input={on_password_input}
                        error={field_errors.password.map(|e| e.to_string())}
                        disabled={*is_loading}
                    />

                    <div class="form-row">
                        <label class="checkbox">
                            <input
                                id="remember-me"
                                type="checkbox"
                                checked={form.remember_me}
                                onchange={on_remember_change}
                                disabled={*is_loading}
                            />
                            {"Remember me"}
                        </label>
                        <Link<Route> to={Route::ForgotPassword} classes="auth-link">
                            {"Forgot your password?"}
                        </Link<Route>>
                    </div>

                    <SubmitButton label="Sign in" loading_label="Signing in..." loading={*is_loading} />
                </form>

                <div class="auth-footer">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Signup} classes="auth-link">{"Sign up"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
