use shared::validation::{SignupForm, SignupFormErrors, PASSWORD_RULES};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::forms::form_message::{FormMessage, MessageKind};
use super::forms::submit_button::SubmitButton;
use super::forms::text_field::TextField;
use super::theme::ThemeToggle;
use crate::hooks::use_api::use_api;
use crate::routes::{Route, SignupNotice};
use crate::services::auth;

#[derive(Clone, Copy, PartialEq)]
enum SignupField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

fn with_field(form: &SignupForm, field: SignupField, value: String) -> SignupForm {
    let mut form = form.clone();
    match field {
        SignupField::Name => form.name = value,
        SignupField::Email => form.email = value,
        SignupField::Password => form.password = value,
        SignupField::ConfirmPassword => form.confirm_password = value,
    }
    form
}

fn without_error(errors: &SignupFormErrors, field: SignupField) -> SignupFormErrors {
    let mut errors = errors.clone();
    match field {
        SignupField::Name => errors.name = None,
        SignupField::Email => errors.email = None,
        SignupField::Password => errors.password = None,
        SignupField::ConfirmPassword => errors.confirm_password = None,
    }
    errors
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let api_client = use_api();
    let navigator = use_navigator();

    let form = use_state(SignupForm::default);
    let field_errors = use_state(SignupFormErrors::default);
    let general_error = use_state(|| Option::<String>::None);
    let is_loading = use_state(|| false);

    let on_input = |field: SignupField| {
        let form = form.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |value: String| {
            form.set(with_field(&form, field, value));
            field_errors.set(without_error(&field_errors, field));
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

            field_errors.set(SignupFormErrors::default());
            general_error.set(None);
            is_loading.set(true);

            let api_client = api_client.clone();
            let navigator = navigator.clone();
            let general_error = general_error.clone();
            let is_loading = is_loading.clone();

            spawn_local(async move {
                match auth::register(&api_client, &request).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push_with_state(
                                &Route::Login,
                                SignupNotice {
                                    email: request.email.clone(),
                                },
                            );
                        }
                    }
                    Err(e) => {
                        general_error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-header">
                    <div>
                        <h2 class="auth-title">{"Create account"}</h2>
                        <p class="auth-subtitle">{"Fill in the fields to register"}</p>
                    </div>
                    <ThemeToggle />
                </div>

                <FormMessage kind={MessageKind::Error} message={(*general_error).clone()} />

                <form class="auth-form" onsubmit={on_submit} novalidate=true>
                    <TextField
                        id="name"
                        label="Full name"
                        placeholder="Your full name"
                        autocomplete="name"
                        value={form.name.clone()}
                        on_input={on_input(SignupField::Name)}
                        error={field_errors.name.map(|e| e.to_string())}
                        disabled={*is_loading}
                    />
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        value={form.email.clone()}
                        on_input={on_input(SignupField::Email)}
                        error={field_errors.email.map(|e| e.to_string())}
                        disabled={*is_loading}
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="••••••••"
                        autocomplete="new-password"
                        value={form.password.clone()}
                        on_input={on_input(SignupField::Password)}
                        error={field_errors.password.map(|e| e.to_string())}
                        disabled={*is_loading}
                    >
                        <div class="password-rules">
                            {"The password must contain at least:"}
                            <ul>
                                {for PASSWORD_RULES.iter().map(|rule| html! { <li>{*rule}</li> })}
                            </ul>
                        </div>
                    </TextField>
                    <TextField
                        id="confirmPassword"
                        label="Confirm password"
                        input_type="password"
                        placeholder="••••••••"
                        autocomplete="new-password"
                        value={form.confirm_password.clone()}
                        on_input={on_input(SignupField::ConfirmPassword)}
                        error={field_errors.confirm_password.map(|e| e.to_string())}
                        disabled={*is_loading}
                    />

                    <SubmitButton label="Sign up" loading_label="Creating account..." loading={*is_loading} />
                </form>

                <div class="auth-footer">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="auth-link">{"Sign in"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_editing_a_field_clears_only_its_error() {
        let errors = SignupForm::default().validate().unwrap_err();
        assert!(errors.name.is_some() && errors.email.is_some() && errors.password.is_some());

        let cleared = without_error(&errors, SignupField::Email);
        assert!(cleared.email.is_none());
        assert_eq!(cleared.name, errors.name);
        assert_eq!(cleared.password, errors.password);
    }

    #[wasm_bindgen_test]
    fn test_with_field_updates_one_value() {
        let form = with_field(&SignupForm::default(), SignupField::ConfirmPassword, "Secret1".to_string());
        assert_eq!(form.confirm_password, "Secret1");
        assert!(form.password.is_empty());
    }
}
