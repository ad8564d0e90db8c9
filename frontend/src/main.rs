use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod routes;
mod services;

use components::theme::ThemeProvider;
use routes::{switch, Route};
use services::api::ApiClient;
use services::config::client_config;
use services::logging::Logger;
use services::storage::SessionStore;

#[function_component(App)]
fn app() -> Html {
    // One client and one store for the whole app, handed down through context
    let api_client = use_state(|| {
        let config = client_config();
        Logger::info_with_component("app", &format!("Using API at {}", config.api_base_url));
        ApiClient::from_config(&config)
    });
    let session = use_state(|| {
        let store = SessionStore::new(&client_config());
        if store.token().is_some() {
            let profile = store.profile().map(|p| p.to_string()).unwrap_or_else(|| "none".to_string());
            Logger::debug_with_component("app", &format!("Stored session found, profile: {}", profile));
        }
        store
    });

    html! {
        <ContextProvider<ApiClient> context={(*api_client).clone()}>
            <ContextProvider<SessionStore> context={(*session).clone()}>
                <ThemeProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </ThemeProvider>
            </ContextProvider<SessionStore>>
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
