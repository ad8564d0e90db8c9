use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::storage::SessionStore;

/// The API client provided at the application root.
///
/// Components rendered outside the provider
/// get a client built from the default configuration.
#[hook]
pub fn use_api() -> ApiClient {
    match use_context::<ApiClient>() {
        Some(client) => client,
        None => {
            Logger::warn_with_component("use_api", "No ApiClient in context, using default");
            ApiClient::new()
        }
    }
}

/// The session store provided at the application root
#[hook]
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_default()
}
