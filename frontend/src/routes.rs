use serde_json::Value;
use shared::Profile;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::forgot_password_page::ForgotPasswordPage;
use crate::components::login_page::LoginPage;
use crate::components::not_found::NotFound;
use crate::components::profile_selection::ProfileSelection;
use crate::components::signup_page::SignupPage;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/select-profile")]
    SelectProfile,
    #[at("/dashboard/:profile")]
    Dashboard { profile: Profile },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// History state pushed by the signup screen when it hands over to login
#[derive(Debug, Clone, PartialEq)]
pub struct SignupNotice {
    pub email: String,
}

/// History state pushed by profile selection for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub profile_details: Option<Value>,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::SelectProfile => html! { <ProfileSelection /> },
        Route::Dashboard { profile } => html! { <Dashboard {profile} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_auth_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/signup"), Some(Route::Signup));
        assert_eq!(Route::recognize("/forgot-password"), Some(Route::ForgotPassword));
        assert_eq!(Route::recognize("/select-profile"), Some(Route::SelectProfile));
    }

    #[wasm_bindgen_test]
    fn test_dashboard_route_per_profile() {
        for profile in Profile::ALL {
            let route = Route::Dashboard { profile };
            assert_eq!(route.to_path(), profile.dashboard_path());
            assert_eq!(Route::recognize(&profile.dashboard_path()), Some(route));
        }
    }

    #[wasm_bindgen_test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/dashboard/student"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
