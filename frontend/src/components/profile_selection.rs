use shared::{ApiError, Profile, SetProfileRequest, SetProfileResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::forms::form_message::{FormMessage, MessageKind};
use super::theme::ThemeToggle;
use crate::hooks::use_api::{use_api, use_session_store};
use crate::routes::{DashboardState, Route};
use crate::services::auth;
use crate::services::logging::Logger;
use crate::services::storage::SessionStore;

pub const PROFILE_ERROR_MESSAGE: &str = "Could not select profile. Please try again.";

/// Settle a profile selection call: persist the profile and return the
/// dashboard route with its history state, or the fixed banner message.
pub fn finish_profile(
    session: &SessionStore,
    profile: Profile,
    result: Result<SetProfileResponse, ApiError>,
) -> Result<(Route, DashboardState), String> {
    let response = result.map_err(|e| {
        Logger::error_with_component(
            "profile_selection",
            &format!("Failed to select profile {}: {}", profile, e),
        );
        PROFILE_ERROR_MESSAGE.to_string()
    })?;

    if let Err(e) = session.save_profile(profile) {
        Logger::warn_with_component("profile_selection", &e.to_string());
    }

    Ok((
        Route::Dashboard { profile },
        DashboardState {
            profile_details: response.profile_details,
        },
    ))
}

#[derive(Properties, PartialEq)]
struct ProfileCardProps {
    profile: Profile,
    selected: bool,
    loading: bool,
    on_select: Callback<Profile>,
}

#[function_component(ProfileCard)]
fn profile_card(props: &ProfileCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let profile = props.profile;
        Callback::from(move |_: MouseEvent| on_select.emit(profile))
    };

    // While a request is pending the chosen card spins and the rest fade
    let class = classes!(
        "profile-card",
        props.selected.then_some("active"),
        (props.loading && !props.selected).then_some("dimmed"),
    );

    html! {
        <button type="button" {class} {onclick} disabled={props.loading}>
            <span class="profile-icon">{props.profile.icon()}</span>
            <span class="profile-text">
                <span class="profile-label">{props.profile.label()}</span>
                <span class="profile-description">{props.profile.description()}</span>
            </span>
            {if props.loading && props.selected {
                html! { <span class="spinner" aria-hidden="true"></span> }
            } else { html! {} }}
        </button>
    }
}

#[function_component(ProfileSelection)]
pub fn profile_selection() -> Html {
    let api_client = use_api();
    let session = use_session_store();
    let navigator = use_navigator();

    let selected_profile = use_state(|| Option::<Profile>::None);
    let is_loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_select = {
        let selected_profile = selected_profile.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        Callback::from(move |profile: Profile| {
            if *is_loading {
                return;
            }

            selected_profile.set(Some(profile));
            error.set(None);
            is_loading.set(true);

            let api_client = api_client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let selected_profile = selected_profile.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();

            spawn_local(async move {
                let result = auth::set_profile(&api_client, &SetProfileRequest { profile }).await;
                match finish_profile(&session, profile, result) {
                    Ok((route, state)) => {
                        if let Some(navigator) = navigator {
                            navigator.push_with_state(&route, state);
                        }
                    }
                    Err(message) => {
                        error.set(Some(message));
                        selected_profile.set(None);
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
                    <h2 class="auth-title">{"Select your profile"}</h2>
                    <ThemeToggle />
                </div>

                <FormMessage kind={MessageKind::Error} message={(*error).clone()} />

                <div class="profile-list">
                    {for Profile::ALL.iter().map(|profile| html! {
                        <ProfileCard
                            key={profile.as_str()}
                            profile={*profile}
                            selected={*selected_profile == Some(*profile)}
                            loading={*is_loading}
                            on_select={on_select.clone()}
                        />
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::ApiClient;
    use serde_json::json;
    use shared::ClientConfig;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_store(prefix: &str) -> SessionStore {
        SessionStore::new(&ClientConfig {
            token_storage_key: format!("{}.authToken", prefix),
            profile_storage_key: format!("{}.userProfile", prefix),
            ..ClientConfig::default()
        })
    }

    #[wasm_bindgen_test]
    fn test_teacher_selection_stores_profile_and_opens_dashboard() {
        let store = test_store("test.profile.ok");
        let response = SetProfileResponse {
            profile_details: Some(json!({"classes": 4})),
        };

        let (route, state) = finish_profile(&store, Profile::Teacher, Ok(response)).unwrap();

        assert_eq!(route, Route::Dashboard { profile: Profile::Teacher });
        assert_eq!(route.to_path(), "/dashboard/teacher");
        assert_eq!(state.profile_details, Some(json!({"classes": 4})));
        assert_eq!(store.profile(), Some(Profile::Teacher));

        store.clear().unwrap();
    }

    #[wasm_bindgen_test]
    fn test_failed_selection_uses_fixed_message() {
        let store = test_store("test.profile.http");
        let error = ApiError::Http {
            path: auth::SET_PROFILE_PATH.to_string(),
            status: 500,
            message: "Database unavailable".to_string(),
        };

        assert_eq!(
            finish_profile(&store, Profile::Admin, Err(error)),
            Err(PROFILE_ERROR_MESSAGE.to_string())
        );
        assert_eq!(store.profile(), None);
    }

    #[wasm_bindgen_test]
    async fn test_selection_transport_failure_stores_nothing() {
        let store = test_store("test.profile.down");
        let client = ApiClient::with_base_url("http://127.0.0.1:9/api".to_string());
        let request = SetProfileRequest { profile: Profile::Coordinator };

        let result = auth::set_profile(&client, &request).await;

        assert_eq!(
            finish_profile(&store, Profile::Coordinator, result),
            Err(PROFILE_ERROR_MESSAGE.to_string())
        );
        assert_eq!(store.profile(), None);
    }
}
