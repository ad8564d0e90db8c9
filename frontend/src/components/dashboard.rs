use shared::Profile;
use yew::prelude::*;
use yew_router::prelude::*;

use super::theme::ThemeToggle;
use crate::hooks::use_api::use_session_store;
use crate::routes::{DashboardState, Route};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub profile: Profile,
}

/// Landing page after profile selection. The real dashboards live elsewhere;
/// this shows who is signed in and whatever details the API returned.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let session = use_session_store();
    let navigator = use_navigator();
    let details = use_location()
        .and_then(|location| location.state::<DashboardState>())
        .and_then(|state| state.profile_details.clone());

    let on_sign_out = Callback::from(move |_: MouseEvent| {
        if let Err(e) = session.clear() {
            Logger::warn_with_component("dashboard", &e.to_string());
        }
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>
                    <span class="profile-icon">{props.profile.icon()}</span>
                    {format!("{} dashboard", props.profile.label())}
                </h1>
                <div class="dashboard-actions">
                    <ThemeToggle />
                    <button type="button" class="btn btn-secondary" onclick={on_sign_out}>
                        {"Sign out"}
                    </button>
                </div>
            </header>
            {if let Some(details) = details {
                let pretty = serde_json::to_string_pretty(&details)
                    .unwrap_or_else(|_| details.to_string());
                html! {
                    <section class="profile-details">
                        <h2>{"Profile details"}</h2>
                        <pre>{pretty}</pre>
                    </section>
                }
            } else { html! {} }}
        </div>
    }
}
