use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2 class="auth-title">{"Page not found"}</h2>
                <p class="auth-subtitle">{"The page you are looking for does not exist."}</p>
                <div class="auth-footer">
                    <Link<Route> to={Route::Login} classes="auth-link">{"Go to login"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
